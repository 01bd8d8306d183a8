//! Longitude: 180° E (180.0) to 180° W (-180.0)

use super::{Axis, AxisElement, AxisInput, AxisKind, Component, Coordinate};
use crate::app::services::{format_parser, resolver};
use crate::error::GpsError;
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A validated longitude
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Longitude(AxisElement);

impl Longitude {
    /// Create a longitude from direction (`E`/`W`), degrees, minutes and seconds
    pub fn new(
        direction: &str,
        degrees: impl Into<Component>,
        minutes: impl Into<Component>,
        seconds: impl Into<Component>,
    ) -> std::result::Result<Self, GpsError> {
        Self::build(direction, degrees.into(), minutes.into(), Some(seconds.into()))
    }

    /// Create a longitude from fractional minutes; the fraction becomes seconds
    pub fn from_minutes(
        direction: &str,
        degrees: impl Into<Component>,
        minutes: impl Into<Component>,
    ) -> std::result::Result<Self, GpsError> {
        Self::build(direction, degrees.into(), minutes.into(), None)
    }

    /// Create a longitude from signed decimal degrees
    pub fn from_decimal(value: f64) -> std::result::Result<Self, GpsError> {
        Self::build_from_decimal(value)
    }

    /// Parse longitude text in any supported format, `None` on failure
    pub fn try_parse_string(text: &str) -> Option<Self> {
        format_parser::try_parse_str(text)
    }

    /// Resolve a longitude from text, a decimal, a coordinate or a longitude
    pub fn try_parse<'a>(value: impl Into<AxisInput<'a, Self>>) -> Option<Self> {
        resolver::resolve(value.into())
    }

    /// Whether `value` resolves to a longitude with the same canonical text
    pub fn equals<'a>(&self, value: impl Into<AxisInput<'a, Self>>) -> bool {
        Self::try_parse(value).is_some_and(|other| other == *self)
    }
}

impl Axis for Longitude {
    const KIND: AxisKind = AxisKind::Longitude;

    fn from_element(element: AxisElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &AxisElement {
        &self.0
    }

    fn from_coordinate(coordinate: &Coordinate) -> Self {
        *coordinate.longitude()
    }
}

impl Deref for Longitude {
    type Target = AxisElement;

    fn deref(&self) -> &AxisElement {
        &self.0
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq for Longitude {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_text() == other.canonical_text()
    }
}

impl Eq for Longitude {}

impl FromStr for Longitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse_string(s).ok_or_else(|| Error::unparseable_input(s, AxisKind::Longitude))
    }
}

impl TryFrom<f64> for Longitude {
    type Error = GpsError;

    fn try_from(value: f64) -> std::result::Result<Self, GpsError> {
        Self::from_decimal(value)
    }
}
