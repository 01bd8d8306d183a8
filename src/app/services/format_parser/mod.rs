//! Text parser for latitude and longitude values
//!
//! Coordinate text arrives in many dialects. This module recognises them
//! through an ordered chain of format rules:
//!
//! 1. the whole input is a bare decimal (`-79.948862`, `40,446195`)
//! 2. otherwise a direction is extracted ([`direction`]) and the remaining
//!    token is tried against [`rules::TOKEN_RULES`] in order
//!
//! The first rule that matches decides the result. If its arguments then
//! fail validation the parse fails as a whole and no later rule is tried.
//!
//! ## Usage
//!
//! ```rust
//! use gps_axis::Latitude;
//! use gps_axis::app::services::format_parser::try_parse_str;
//!
//! let latitude: Option<Latitude> = try_parse_str("40°26'46.302\"N");
//! assert_eq!(latitude.unwrap().to_string(), "40°26'46.302\"N");
//! assert!(try_parse_str::<Latitude>("not a coordinate").is_none());
//! ```

pub mod decimal;
pub mod direction;
pub mod rules;

#[cfg(test)]
pub mod tests;

pub use direction::extract_direction;
pub use rules::{Candidate, FormatRule, TOKEN_RULES, TokenRule};

use crate::app::models::{Axis, AxisKind};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// `40 deg 26'` is read as `40° 26'`
static DEGREE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+deg").expect("valid degree word regex"));

/// A rule that matched, with the arguments it extracted
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRule {
    pub rule: FormatRule,
    pub candidate: Candidate,
}

/// Trim the input and spell the degree word as a marker
///
/// Returns `None` for empty or whitespace-only input.
pub fn prepare(text: &str) -> Option<Cow<'_, str>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(DEGREE_WORD.replace_all(trimmed, "°"))
}

/// Find the first rule matching `text` for an axis of `kind`
///
/// Only syntax is checked here; nothing is validated.
pub fn match_rules(text: &str, kind: AxisKind) -> Option<MatchedRule> {
    let prepared = prepare(text)?;

    if let Some(candidate) = rules::bare_decimal(&prepared) {
        return Some(MatchedRule {
            rule: FormatRule::BareDecimal,
            candidate,
        });
    }

    let (direction, token) = extract_direction(&prepared, kind)?;

    TOKEN_RULES.iter().find_map(|entry| {
        (entry.extract)(token, direction).map(|candidate| MatchedRule {
            rule: entry.rule,
            candidate,
        })
    })
}

/// Parse `text` as an axis value, `None` on any failure
///
/// A syntactic match that fails validation (for example `95°N` as a
/// latitude) is also `None`; the validation error is only logged.
pub fn try_parse_str<A: Axis>(text: &str) -> Option<A> {
    let axis = A::KIND;
    let Some(matched) = match_rules(text, axis) else {
        trace!(input = text, axis = %axis, "no format rule matched");
        return None;
    };

    trace!(input = text, axis = %axis, rule = %matched.rule, "format rule matched");

    match matched.candidate.build::<A>() {
        Ok(value) => Some(value),
        Err(error) => {
            debug!(
                input = text,
                axis = %axis,
                rule = %matched.rule,
                kind = %error.kind(),
                "Rejected matched coordinate text: {}",
                error
            );
            None
        }
    }
}
