//! Validated coordinate axis element and decimal/DMS conversion
//!
//! [`AxisElement`] holds the state shared by latitudes and longitudes. It is
//! only created through [`AxisElement::build`], which validates every field
//! and derives the signed decimal value once; there are no setters, so the
//! decimal can always be recomputed from the sexagesimal fields.

use super::{AxisKind, Component, Direction};
use crate::constants::{
    DEGREE_MARKER, MINUTE_MARKER, MINUTES_PER_DEGREE, SECOND_MARKER, SECONDS_PER_DEGREE,
    SECONDS_PER_MINUTE, SECONDS_PRECISION, SEXAGESIMAL_LIMIT,
};
use crate::error::{GpsError, GpsErrorKind};
use serde::Serialize;
use std::fmt;

/// One validated coordinate axis value
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AxisElement {
    kind: AxisKind,
    direction: Direction,
    degrees: u16,
    minutes: u8,
    seconds: f64,
    decimal: f64,
}

/// Unvalidated DMS fields produced by [`AxisElement::decimal_to_dms`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsParts {
    pub direction: Direction,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl AxisElement {
    /// Validate raw components and build an element
    ///
    /// With `seconds` present, `minutes` must be a whole number. Without it,
    /// `minutes` may be fractional and the fraction becomes the seconds.
    pub fn build(
        kind: AxisKind,
        direction: &str,
        degrees: Component,
        minutes: Component,
        seconds: Option<Component>,
    ) -> Result<Self, GpsError> {
        let direction = init_direction(kind, direction)?;
        let degrees = init_degrees(kind, &degrees)?;
        let (minutes, seconds) = init_minutes(&minutes, seconds.as_ref())?;

        // Keeps canonical-text carry from ever rendering past the maximum,
        // so every canonical text parses back.
        if degrees == kind.max_degrees() && (minutes > 0 || seconds > 0.0) {
            return Err(GpsError::degrees(format!(
                "A {} cannot exceed {}°.",
                kind,
                kind.max_degrees()
            )));
        }

        let decimal = calc_decimal(direction, degrees, minutes, seconds);

        Ok(Self {
            kind,
            direction,
            degrees,
            minutes,
            seconds,
            decimal,
        })
    }

    /// Build from the output of [`AxisElement::decimal_to_dms`]
    pub fn from_dms(kind: AxisKind, parts: DmsParts) -> Result<Self, GpsError> {
        Self::build(
            kind,
            parts.direction.as_str(),
            Component::Float(parts.degrees),
            Component::Float(parts.minutes),
            Some(Component::Float(parts.seconds)),
        )
    }

    /// Split signed decimal degrees into direction, degrees, minutes and seconds
    ///
    /// No validation happens here; out-of-range or non-finite input is
    /// rejected by the constructor the parts are fed into.
    pub fn decimal_to_dms(value: f64, kind: AxisKind) -> DmsParts {
        let direction = if value < 0.0 {
            kind.negative()
        } else {
            kind.positive()
        };

        let absolute = value.abs();
        let degrees = absolute.floor();
        let remainder_minutes = (absolute - degrees) * MINUTES_PER_DEGREE;
        let minutes = remainder_minutes.floor();
        let seconds = (remainder_minutes - minutes) * SECONDS_PER_MINUTE;

        DmsParts {
            direction,
            degrees,
            minutes,
            seconds,
        }
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn is_latitude(&self) -> bool {
        self.kind.is_latitude()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn degrees(&self) -> u16 {
        self.degrees
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Signed decimal degrees (negative for S and W)
    pub fn decimal(&self) -> f64 {
        self.decimal
    }

    /// Render as `{degrees}°{minutes}'{seconds}"{direction}`
    ///
    /// Seconds are rounded to [`SECONDS_PRECISION`] places. A value that
    /// rounds up to 60 carries into the minutes so the text stays parseable.
    pub fn canonical_text(&self) -> String {
        let scale = 10f64.powi(SECONDS_PRECISION as i32);
        let mut seconds = (self.seconds * scale).round() / scale;
        let mut minutes = u32::from(self.minutes);
        let mut degrees = u32::from(self.degrees);

        if seconds >= SEXAGESIMAL_LIMIT {
            seconds -= SEXAGESIMAL_LIMIT;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1;
        }

        format!(
            "{}{}{}{}{:.*}{}{}",
            degrees,
            DEGREE_MARKER,
            minutes,
            MINUTE_MARKER,
            SECONDS_PRECISION,
            seconds,
            SECOND_MARKER,
            self.direction
        )
    }
}

impl fmt::Display for AxisElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

fn init_direction(kind: AxisKind, direction: &str) -> Result<Direction, GpsError> {
    let trimmed = direction.trim();
    let mut chars = trimmed.chars();

    let letter = match (chars.next(), chars.next()) {
        (Some(letter), None) => letter,
        (None, _) => return Err(GpsError::direction("The direction is empty.")),
        _ => {
            return Err(GpsError::direction(format!(
                "'{}' is not a single direction letter.",
                trimmed
            )));
        }
    };

    let direction = Direction::from_letter(letter).ok_or_else(|| {
        GpsError::direction(format!("'{}' is not a known direction letter.", letter))
    })?;

    if !kind.accepts(direction) {
        return Err(GpsError::direction(format!(
            "A {} uses '{}' or '{}', not '{}'.",
            kind,
            kind.positive(),
            kind.negative(),
            direction
        )));
    }

    Ok(direction)
}

fn init_degrees(kind: AxisKind, degrees: &Component) -> Result<u16, GpsError> {
    let value = finite_value(degrees, GpsErrorKind::Degrees)?;
    let max = kind.max_degrees();

    if value.fract() != 0.0 {
        return Err(GpsError::degrees(format!(
            "{} is not a whole number of degrees.",
            degrees
        )));
    }
    if value < 0.0 || value > f64::from(max) {
        return Err(GpsError::degrees(format!(
            "{} is outside the {} range 0..={}.",
            degrees, kind, max
        )));
    }

    Ok(value as u16)
}

fn init_minutes(minutes: &Component, seconds: Option<&Component>) -> Result<(u8, f64), GpsError> {
    let raw_minutes = finite_value(minutes, GpsErrorKind::Minutes)?;
    if !(0.0..SEXAGESIMAL_LIMIT).contains(&raw_minutes) {
        return Err(GpsError::minutes(format!(
            "{} is outside the range 0..60.",
            minutes
        )));
    }

    match seconds {
        Some(seconds_component) => {
            if raw_minutes.fract() != 0.0 {
                return Err(GpsError::minutes(format!(
                    "{} must be a whole number when seconds are given.",
                    minutes
                )));
            }

            let seconds = finite_value(seconds_component, GpsErrorKind::Seconds)?;
            if !(0.0..SEXAGESIMAL_LIMIT).contains(&seconds) {
                return Err(GpsError::seconds(format!(
                    "{} is outside the range 0..60.",
                    seconds_component
                )));
            }

            // abs() drops the sign of -0.0
            Ok((raw_minutes as u8, seconds.abs()))
        }
        None => {
            let whole = raw_minutes.trunc();
            let seconds = (raw_minutes - whole) * SECONDS_PER_MINUTE;
            Ok((whole as u8, seconds.abs()))
        }
    }
}

fn finite_value(component: &Component, kind: GpsErrorKind) -> Result<f64, GpsError> {
    let value = component.to_f64().map_err(|e| {
        GpsError::new(kind, Some(format!("{} is not a number.", component).as_str()))
            .with_source(e)
    })?;

    if !value.is_finite() {
        return Err(GpsError::new(
            kind,
            Some(format!("{} is not a finite number.", component).as_str()),
        ));
    }

    Ok(value)
}

fn calc_decimal(direction: Direction, degrees: u16, minutes: u8, seconds: f64) -> f64 {
    direction.sign()
        * (f64::from(degrees)
            + f64::from(minutes) / MINUTES_PER_DEGREE
            + seconds / SECONDS_PER_DEGREE)
}
