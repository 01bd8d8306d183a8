//! Data models for coordinate axis values
//!
//! This module contains the core data structures for representing a single
//! coordinate axis (latitude or longitude): the direction letters, the axis
//! kind with its limits, the shared validated element, the two concrete axis
//! types and the inputs they can be resolved from.

use crate::constants::{LATITUDE_MAX_DEGREES, LONGITUDE_MAX_DEGREES};
use crate::error::GpsError;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod component;
pub mod coordinate;
pub mod element;
pub mod input;
pub mod latitude;
pub mod longitude;

pub use component::Component;
pub use coordinate::Coordinate;
pub use element::{AxisElement, DmsParts};
pub use input::{AxisInput, StringForm};
pub use latitude::Latitude;
pub use longitude::Longitude;

// =============================================================================
// Direction Letters
// =============================================================================

/// Hemisphere marker encoding the sign of an axis value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// Look up a direction by its letter, ignoring case
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }

    /// Sign applied to the decimal value: -1 for S and W, +1 otherwise
    pub fn sign(self) -> f64 {
        match self {
            Direction::South | Direction::West => -1.0,
            Direction::North | Direction::East => 1.0,
        }
    }

    /// The axis this direction belongs to
    pub fn axis(self) -> AxisKind {
        match self {
            Direction::North | Direction::South => AxisKind::Latitude,
            Direction::East | Direction::West => AxisKind::Longitude,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Axis Kind
// =============================================================================

/// Which of the two coordinate dimensions a value represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// North/south axis, 90° S to 90° N
    Latitude,
    /// East/west axis, 180° W to 180° E
    Longitude,
}

impl AxisKind {
    /// Largest allowed degree value
    pub fn max_degrees(self) -> u16 {
        match self {
            AxisKind::Latitude => LATITUDE_MAX_DEGREES,
            AxisKind::Longitude => LONGITUDE_MAX_DEGREES,
        }
    }

    /// Direction used for values >= 0
    pub fn positive(self) -> Direction {
        match self {
            AxisKind::Latitude => Direction::North,
            AxisKind::Longitude => Direction::East,
        }
    }

    /// Direction used for values < 0
    pub fn negative(self) -> Direction {
        match self {
            AxisKind::Latitude => Direction::South,
            AxisKind::Longitude => Direction::West,
        }
    }

    /// Whether `direction` is one of this axis' two letters
    pub fn accepts(self, direction: Direction) -> bool {
        direction.axis() == self
    }

    /// Look up one of this axis' letters, ignoring case
    pub fn direction_for(self, letter: char) -> Option<Direction> {
        Direction::from_letter(letter).filter(|d| self.accepts(*d))
    }

    pub fn is_latitude(self) -> bool {
        self == AxisKind::Latitude
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AxisKind::Latitude => "latitude",
            AxisKind::Longitude => "longitude",
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Ok(AxisKind::Latitude),
            "lon" | "lng" | "long" | "longitude" => Ok(AxisKind::Longitude),
            other => Err(Error::configuration(format!(
                "Unknown axis '{}': expected 'latitude' or 'longitude'",
                other
            ))),
        }
    }
}

// =============================================================================
// Axis Trait
// =============================================================================

/// Shared behaviour of [`Latitude`] and [`Longitude`]
///
/// Implementors bind an [`AxisKind`] to a newtype over [`AxisElement`]; the
/// parser and resolver services are written once against this trait.
pub trait Axis: Copy + fmt::Display + Sized {
    /// Axis this type represents
    const KIND: AxisKind;

    /// Wrap an element already validated for [`Self::KIND`]
    fn from_element(element: AxisElement) -> Self;

    /// Borrow the validated element
    fn element(&self) -> &AxisElement;

    /// Pick the matching member out of a two-axis coordinate
    fn from_coordinate(coordinate: &Coordinate) -> Self;

    /// Validate and build a value from raw components
    fn build(
        direction: &str,
        degrees: Component,
        minutes: Component,
        seconds: Option<Component>,
    ) -> std::result::Result<Self, GpsError> {
        AxisElement::build(Self::KIND, direction, degrees, minutes, seconds).map(Self::from_element)
    }

    /// Build from signed decimal degrees
    fn build_from_decimal(value: f64) -> std::result::Result<Self, GpsError> {
        AxisElement::from_dms(Self::KIND, AxisElement::decimal_to_dms(value, Self::KIND))
            .map(Self::from_element)
    }

    /// Canonical text form used for display and equality
    fn canonical_text(&self) -> String {
        self.element().canonical_text()
    }
}
