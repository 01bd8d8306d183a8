//! Application constants for the GPS axis crate
//!
//! This module contains the axis limits, conversion factors, formatting
//! settings and configuration defaults used throughout the crate.

// =============================================================================
// Axis Limits
// =============================================================================

/// Largest degree value a latitude may carry (90° N / 90° S)
pub const LATITUDE_MAX_DEGREES: u16 = 90;

/// Largest degree value a longitude may carry (180° E / 180° W)
pub const LONGITUDE_MAX_DEGREES: u16 = 180;

/// Exclusive upper bound for both minutes and seconds
pub const SEXAGESIMAL_LIMIT: f64 = 60.0;

// =============================================================================
// Conversion Factors
// =============================================================================

/// Minutes in one degree
pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds in one degree
pub const SECONDS_PER_DEGREE: f64 = MINUTES_PER_DEGREE * SECONDS_PER_MINUTE;

// =============================================================================
// Canonical Text Form
// =============================================================================

/// Number of decimal places used for seconds in the canonical text form
///
/// The same precision is used for rendering and for equality, so changing it
/// changes which values compare equal.
pub const SECONDS_PRECISION: usize = 3;

/// Degree marker used in canonical output
pub const DEGREE_MARKER: char = '°';

/// Minute marker used in canonical output
pub const MINUTE_MARKER: char = '\'';

/// Second marker used in canonical output
pub const SECOND_MARKER: char = '"';

// =============================================================================
// Error Handling
// =============================================================================

/// Error code attached to validation errors unless another one is supplied
pub const DEFAULT_ERROR_CODE: i32 = 256;

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Directory name below the user configuration directory
pub const CONFIG_DIR_NAME: &str = "gps-axis";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "GPS_AXIS_";

/// Default logging level when neither config nor flags specify one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Logging levels accepted in configuration
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit status for a successful command
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status when a command fails
pub const EXIT_FAILURE: i32 = 1;

/// Exit status of `compare` when the two values differ
pub const EXIT_NOT_EQUAL: i32 = 2;
