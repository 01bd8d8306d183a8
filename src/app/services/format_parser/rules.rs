//! Format rules and the token rule chain
//!
//! Each rule pairs a [`FormatRule`] name with an extractor that turns the
//! direction-stripped token into a [`Candidate`]. [`TOKEN_RULES`] is tried
//! in order and the first extractor returning `Some` wins.

use super::decimal;
use crate::app::models::{Axis, Component, Direction};
use crate::error::GpsError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `40°26'46.302"`, `40d26'46.302`, `40:26:46.302`
static DEGREES_MINUTES_SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3})[°d:]\s*([0-9]{1,2})[:'](.+)$")
        .expect("valid degrees minutes seconds regex")
});

/// `40°26.7717'`
static DEGREES_FRACTIONAL_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3})°\s*([0-9.,]+)'?$").expect("valid fractional minutes regex")
});

/// `40°26"46.302'`
static DEGREES_SECONDS_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([0-9]{1,3})°\s*([0-9.,]+)"\s*([0-9.,]+)'?$"#)
        .expect("valid seconds minutes regex")
});

/// Names of the recognised text formats, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatRule {
    /// Whole input is a signed decimal
    BareDecimal,
    /// Degrees, whole minutes and a seconds token
    DegreesMinutesSeconds,
    /// Signed decimal left over after removing a direction letter
    SignedDecimal,
    /// Degrees and fractional minutes
    DegreesFractionalMinutes,
    /// Degrees, then the `"` token, then the `'` token
    DegreesSecondsMinutes,
}

impl FormatRule {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatRule::BareDecimal => "bare-decimal",
            FormatRule::DegreesMinutesSeconds => "degrees-minutes-seconds",
            FormatRule::SignedDecimal => "signed-decimal",
            FormatRule::DegreesFractionalMinutes => "degrees-fractional-minutes",
            FormatRule::DegreesSecondsMinutes => "degrees-seconds-minutes",
        }
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constructor arguments extracted by a rule, not yet validated
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// Signed decimal degrees; the sign decides the direction
    Decimal(f64),
    /// Raw DMS tokens; `seconds: None` means fractional minutes
    Parts {
        direction: Direction,
        degrees: Component,
        minutes: Component,
        seconds: Option<Component>,
    },
}

impl Candidate {
    /// Run the axis constructor on the extracted arguments
    pub fn build<A: Axis>(self) -> Result<A, GpsError> {
        match self {
            Candidate::Decimal(value) => A::build_from_decimal(value),
            Candidate::Parts {
                direction,
                degrees,
                minutes,
                seconds,
            } => A::build(direction.as_str(), degrees, minutes, seconds),
        }
    }
}

/// One entry of the token rule chain
pub struct TokenRule {
    pub rule: FormatRule,
    pub extract: fn(&str, Direction) -> Option<Candidate>,
}

/// Rules applied to the token left after direction extraction
pub static TOKEN_RULES: [TokenRule; 4] = [
    TokenRule {
        rule: FormatRule::DegreesMinutesSeconds,
        extract: degrees_minutes_seconds,
    },
    TokenRule {
        rule: FormatRule::SignedDecimal,
        extract: signed_decimal,
    },
    TokenRule {
        rule: FormatRule::DegreesFractionalMinutes,
        extract: degrees_fractional_minutes,
    },
    TokenRule {
        rule: FormatRule::DegreesSecondsMinutes,
        extract: degrees_seconds_minutes,
    },
];

/// Whole input as a signed decimal
pub fn bare_decimal(text: &str) -> Option<Candidate> {
    decimal::parse_decimal(text).map(Candidate::Decimal)
}

pub fn degrees_minutes_seconds(token: &str, direction: Direction) -> Option<Candidate> {
    let captures = DEGREES_MINUTES_SECONDS.captures(token)?;
    let rest = captures[3].trim();
    let seconds = rest.strip_suffix('"').unwrap_or(rest).trim_end();

    Some(Candidate::Parts {
        direction,
        degrees: Component::from(&captures[1]),
        minutes: Component::from(&captures[2]),
        seconds: Some(Component::from(seconds)),
    })
}

/// The number's own sign decides the direction; the extracted letter is
/// ignored, so `S 40.5` reads as north.
pub fn signed_decimal(token: &str, _direction: Direction) -> Option<Candidate> {
    decimal::parse_decimal(token).map(Candidate::Decimal)
}

pub fn degrees_fractional_minutes(token: &str, direction: Direction) -> Option<Candidate> {
    let captures = DEGREES_FRACTIONAL_MINUTES.captures(token)?;
    Some(Candidate::Parts {
        direction,
        degrees: Component::from(&captures[1]),
        minutes: Component::from(&captures[2]),
        seconds: None,
    })
}

/// The token before `"` is passed as minutes and the one after as seconds,
/// the field order this format has always been read with.
pub fn degrees_seconds_minutes(token: &str, direction: Direction) -> Option<Candidate> {
    let captures = DEGREES_SECONDS_MINUTES.captures(token)?;
    Some(Candidate::Parts {
        direction,
        degrees: Component::from(&captures[1]),
        minutes: Component::from(&captures[2]),
        seconds: Some(Component::from(&captures[3])),
    })
}
