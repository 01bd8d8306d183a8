//! Decimal number recognition
//!
//! A decimal here is an optional leading `-`, digits, and at most one
//! fractional part introduced by `.` or `,`. Exponents, `+` signs and
//! grouping separators are not accepted.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(?:[.,][0-9]+)?$").expect("valid decimal regex")
});

/// Whether `text` is a plain decimal number
pub fn is_decimal(text: &str) -> bool {
    DECIMAL_PATTERN.is_match(text)
}

/// Read a `,` decimal separator as `.`
pub fn normalize_separator(text: &str) -> Cow<'_, str> {
    if text.contains(',') {
        Cow::Owned(text.replace(',', "."))
    } else {
        Cow::Borrowed(text)
    }
}

/// Parse `text` if it is a plain decimal number
pub fn parse_decimal(text: &str) -> Option<f64> {
    if !is_decimal(text) {
        return None;
    }
    normalize_separator(text).parse::<f64>().ok()
}
