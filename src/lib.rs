//! GPS Axis Library
//!
//! A Rust library for turning loosely formatted latitude and longitude values
//! into validated, canonical coordinate-axis values.
//!
//! This library provides tools for:
//! - Validating degrees/minutes/seconds against the rules of each axis
//! - Converting between signed decimal degrees and DMS components
//! - Parsing DMS text in several common dialects through an ordered rule chain
//! - Resolving heterogeneous inputs (decimals, text, coordinates) to an axis
//! - Rendering and comparing values through one canonical text form

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod format_parser;
        pub mod resolver;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    Axis, AxisElement, AxisInput, AxisKind, Component, Coordinate, Direction, DmsParts, Latitude,
    Longitude, StringForm,
};
pub use config::Config;
pub use error::{GpsError, GpsErrorKind};

/// Result type alias for the GPS axis crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the outer surfaces of the crate (CLI, configuration, text conversions)
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A coordinate component failed validation
    #[error(transparent)]
    Gps(#[from] GpsError),

    /// Input did not match any supported coordinate format
    #[error("Unable to parse '{input}' as a {axis}")]
    UnparseableInput { input: String, axis: AxisKind },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an unparseable input error
    pub fn unparseable_input(input: impl Into<String>, axis: AxisKind) -> Self {
        Self::UnparseableInput {
            input: input.into(),
            axis,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
