//! Tests for decimal recognition

use super::super::decimal::{is_decimal, normalize_separator, parse_decimal};

#[test]
fn test_is_decimal_accepts_plain_numbers() {
    for text in ["0", "40", "-79", "40.446195", "-79.948862", "40,446195"] {
        assert!(is_decimal(text), "{text} should be a decimal");
    }
}

#[test]
fn test_is_decimal_rejects_other_shapes() {
    for text in ["", " 40", "40.", ".5", "+40", "1e5", "1.2.3", "40°", "N40", "--1"] {
        assert!(!is_decimal(text), "{text:?} should not be a decimal");
    }
}

#[test]
fn test_normalize_separator() {
    assert_eq!(normalize_separator("26,7717"), "26.7717");
    assert_eq!(normalize_separator("26.7717"), "26.7717");
}

#[test]
fn test_parse_decimal() {
    assert_eq!(parse_decimal("40,5"), Some(40.5));
    assert_eq!(parse_decimal("-0.4614"), Some(-0.4614));
    assert_eq!(parse_decimal("forty"), None);
}
