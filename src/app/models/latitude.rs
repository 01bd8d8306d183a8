//! Latitude: 90° N (90.0) down to 90° S (-90.0)

use super::{Axis, AxisElement, AxisInput, AxisKind, Component, Coordinate};
use crate::app::services::{format_parser, resolver};
use crate::error::GpsError;
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A validated latitude
///
/// Equality compares canonical text, so two latitudes are equal exactly when
/// they render identically.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Latitude(AxisElement);

impl Latitude {
    /// Create a latitude from direction (`N`/`S`), degrees, minutes and seconds
    pub fn new(
        direction: &str,
        degrees: impl Into<Component>,
        minutes: impl Into<Component>,
        seconds: impl Into<Component>,
    ) -> std::result::Result<Self, GpsError> {
        Self::build(direction, degrees.into(), minutes.into(), Some(seconds.into()))
    }

    /// Create a latitude from fractional minutes; the fraction becomes seconds
    pub fn from_minutes(
        direction: &str,
        degrees: impl Into<Component>,
        minutes: impl Into<Component>,
    ) -> std::result::Result<Self, GpsError> {
        Self::build(direction, degrees.into(), minutes.into(), None)
    }

    /// Create a latitude from signed decimal degrees
    pub fn from_decimal(value: f64) -> std::result::Result<Self, GpsError> {
        Self::build_from_decimal(value)
    }

    /// Parse latitude text in any supported format
    ///
    /// Returns `None` both when no format matches and when a matched value
    /// fails validation (for example 95°N).
    pub fn try_parse_string(text: &str) -> Option<Self> {
        format_parser::try_parse_str(text)
    }

    /// Resolve a latitude from text, a decimal, a coordinate or a latitude
    pub fn try_parse<'a>(value: impl Into<AxisInput<'a, Self>>) -> Option<Self> {
        resolver::resolve(value.into())
    }

    /// Whether `value` resolves to a latitude with the same canonical text
    pub fn equals<'a>(&self, value: impl Into<AxisInput<'a, Self>>) -> bool {
        Self::try_parse(value).is_some_and(|other| other == *self)
    }
}

impl Axis for Latitude {
    const KIND: AxisKind = AxisKind::Latitude;

    fn from_element(element: AxisElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &AxisElement {
        &self.0
    }

    fn from_coordinate(coordinate: &Coordinate) -> Self {
        *coordinate.latitude()
    }
}

impl Deref for Latitude {
    type Target = AxisElement;

    fn deref(&self) -> &AxisElement {
        &self.0
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq for Latitude {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_text() == other.canonical_text()
    }
}

impl Eq for Latitude {}

impl FromStr for Latitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse_string(s).ok_or_else(|| Error::unparseable_input(s, AxisKind::Latitude))
    }
}

impl TryFrom<f64> for Latitude {
    type Error = GpsError;

    fn try_from(value: f64) -> std::result::Result<Self, GpsError> {
        Self::from_decimal(value)
    }
}
