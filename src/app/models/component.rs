//! Raw degree/minute/second inputs accepted by the axis constructors.

use crate::app::services::format_parser::decimal::normalize_separator;
use std::fmt;
use std::num::ParseFloatError;

/// A single numeric component as supplied by the caller
///
/// Constructors accept integers, floats and numeric text alike; text is
/// trimmed and a `,` decimal separator is read as `.` before parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Component {
    /// Numeric value of this component
    ///
    /// Only text can fail; range and finiteness checks are left to the
    /// element constructor.
    pub fn to_f64(&self) -> Result<f64, ParseFloatError> {
        match self {
            Component::Integer(value) => Ok(*value as f64),
            Component::Float(value) => Ok(*value),
            Component::Text(text) => normalize_separator(text.trim()).parse::<f64>(),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Integer(value) => write!(f, "{}", value),
            Component::Float(value) => write!(f, "{}", value),
            Component::Text(text) => write!(f, "'{}'", text),
        }
    }
}

impl From<i64> for Component {
    fn from(value: i64) -> Self {
        Component::Integer(value)
    }
}

impl From<i32> for Component {
    fn from(value: i32) -> Self {
        Component::Integer(i64::from(value))
    }
}

impl From<u32> for Component {
    fn from(value: u32) -> Self {
        Component::Integer(i64::from(value))
    }
}

impl From<u16> for Component {
    fn from(value: u16) -> Self {
        Component::Integer(i64::from(value))
    }
}

impl From<u8> for Component {
    fn from(value: u8) -> Self {
        Component::Integer(i64::from(value))
    }
}

impl From<f64> for Component {
    fn from(value: f64) -> Self {
        Component::Float(value)
    }
}

impl From<f32> for Component {
    fn from(value: f32) -> Self {
        Component::Float(f64::from(value))
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Component::Text(value.to_string())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Component::Text(value)
    }
}

impl From<&String> for Component {
    fn from(value: &String) -> Self {
        Component::Text(value.clone())
    }
}
