//! Direction extraction
//!
//! Finds the hemisphere of a coordinate string and returns the token that
//! is left once the direction marker is removed.

use crate::app::models::{AxisKind, Direction};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// `-40°...` or `40°...`: the sign picks the direction
static SIGNED_DEGREES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)[0-9]+°").expect("valid signed degrees regex"));

/// Split `text` into its direction and the remaining token
///
/// Checked in this order:
/// 1. a leading direction letter of `kind` followed by more text
/// 2. a trailing direction letter of `kind` preceded by more text
/// 3. optional `-`, digits and a degree marker; `-` means the negative
///    direction and is stripped, otherwise the positive direction is used
///
/// Letters of the other axis never count as a direction.
pub fn extract_direction(text: &str, kind: AxisKind) -> Option<(Direction, &str)> {
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        let rest = chars.as_str();
        if !rest.is_empty() {
            if let Some(direction) = kind.direction_for(first) {
                trace!(%direction, "leading direction letter");
                return Some((direction, rest.trim()));
            }
        }
    }

    let mut chars = text.chars();
    if let Some(last) = chars.next_back() {
        let rest = chars.as_str();
        if !rest.is_empty() {
            if let Some(direction) = kind.direction_for(last) {
                trace!(%direction, "trailing direction letter");
                return Some((direction, rest.trim()));
            }
        }
    }

    let captures = SIGNED_DEGREES.captures(text)?;
    if captures[1].is_empty() {
        Some((kind.positive(), text))
    } else {
        Some((kind.negative(), text[1..].trim_start()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_letter() {
        assert_eq!(
            extract_direction("N 40°26'46\"", AxisKind::Latitude),
            Some((Direction::North, "40°26'46\""))
        );
        assert_eq!(
            extract_direction("w79:56:55", AxisKind::Longitude),
            Some((Direction::West, "79:56:55"))
        );
    }

    #[test]
    fn test_trailing_letter() {
        assert_eq!(
            extract_direction("40°26'46.302\"s", AxisKind::Latitude),
            Some((Direction::South, "40°26'46.302\""))
        );
    }

    #[test]
    fn test_sign_selects_direction() {
        assert_eq!(
            extract_direction("-79° 56' 55\"", AxisKind::Longitude),
            Some((Direction::West, "79° 56' 55\""))
        );
        assert_eq!(
            extract_direction("12°30'", AxisKind::Latitude),
            Some((Direction::North, "12°30'"))
        );
    }

    #[test]
    fn test_other_axis_letters_are_ignored() {
        // the degree marker still selects the positive direction
        assert_eq!(
            extract_direction("40°26'46\"E", AxisKind::Latitude),
            Some((Direction::North, "40°26'46\"E"))
        );
        assert_eq!(extract_direction("E 40.5", AxisKind::Latitude), None);
    }

    #[test]
    fn test_no_direction() {
        assert_eq!(extract_direction("N", AxisKind::Latitude), None);
        assert_eq!(extract_direction("40:26:46", AxisKind::Latitude), None);
        assert_eq!(extract_direction("abc", AxisKind::Latitude), None);
    }
}
