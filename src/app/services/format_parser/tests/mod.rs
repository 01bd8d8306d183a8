//! Tests for the coordinate text parser
//!
//! Helpers shared by the rule, decimal and end-to-end parser tests.

use crate::app::models::{Latitude, Longitude};

use super::try_parse_str;

mod decimal_tests;

/// Canonical text of `input` parsed as a latitude
pub fn latitude_text(input: &str) -> Option<String> {
    try_parse_str::<Latitude>(input).map(|value| value.to_string())
}

/// Canonical text of `input` parsed as a longitude
pub fn longitude_text(input: &str) -> Option<String> {
    try_parse_str::<Longitude>(input).map(|value| value.to_string())
}
