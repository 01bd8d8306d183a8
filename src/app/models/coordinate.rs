//! Two-axis coordinate aggregate

use super::{Latitude, Longitude};
use crate::error::GpsError;
use serde::Serialize;
use std::fmt;

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    latitude: Latitude,
    longitude: Longitude,
}

impl Coordinate {
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build both axes from signed decimal degrees
    pub fn from_decimal(latitude: f64, longitude: f64) -> Result<Self, GpsError> {
        Ok(Self::new(
            Latitude::from_decimal(latitude)?,
            Longitude::from_decimal(longitude)?,
        ))
    }

    pub fn latitude(&self) -> &Latitude {
        &self.latitude
    }

    pub fn longitude(&self) -> &Longitude {
        &self.longitude
    }

    /// Location as a `(latitude, longitude)` decimal tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude.decimal(), self.longitude.decimal())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}
