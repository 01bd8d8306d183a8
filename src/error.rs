//! Validation errors raised while building coordinate axis values.
//!
//! Every failure names exactly one offending field so callers can branch on
//! [`GpsError::kind`] instead of matching message text.

use crate::constants::DEFAULT_ERROR_CODE;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The coordinate component a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GpsErrorKind {
    /// Invalid or unknown direction letter
    Direction,
    /// Invalid degree value
    Degrees,
    /// Invalid minutes value
    Minutes,
    /// Invalid seconds value
    Seconds,
}

impl GpsErrorKind {
    /// Field name used in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            GpsErrorKind::Direction => "direction",
            GpsErrorKind::Degrees => "degrees",
            GpsErrorKind::Minutes => "minutes",
            GpsErrorKind::Seconds => "seconds",
        }
    }
}

impl fmt::Display for GpsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coordinate component failed validation
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GpsError {
    kind: GpsErrorKind,
    message: String,
    code: i32,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GpsError {
    /// Create an error for `kind`, optionally appending a detail sentence
    pub fn new(kind: GpsErrorKind, detail: Option<&str>) -> Self {
        let mut message = format!(
            "Invalid or unknown value for a geo coordinate \"{}\" element/part!",
            kind
        );
        if let Some(detail) = detail.map(str::trim).filter(|d| !d.is_empty()) {
            message.push(' ');
            message.push_str(detail);
        }

        Self {
            kind,
            message,
            code: DEFAULT_ERROR_CODE,
            source: None,
        }
    }

    /// Create a direction error
    pub fn direction(detail: impl AsRef<str>) -> Self {
        Self::new(GpsErrorKind::Direction, Some(detail.as_ref()))
    }

    /// Create a degrees error
    pub fn degrees(detail: impl AsRef<str>) -> Self {
        Self::new(GpsErrorKind::Degrees, Some(detail.as_ref()))
    }

    /// Create a minutes error
    pub fn minutes(detail: impl AsRef<str>) -> Self {
        Self::new(GpsErrorKind::Minutes, Some(detail.as_ref()))
    }

    /// Create a seconds error
    pub fn seconds(detail: impl AsRef<str>) -> Self {
        Self::new(GpsErrorKind::Seconds, Some(detail.as_ref()))
    }

    /// Replace the numeric error code
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Attach the underlying cause
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The offending component
    pub fn kind(&self) -> GpsErrorKind {
        self.kind
    }

    /// Numeric error code (256 unless overridden)
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Full human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_message_names_the_field() {
        let error = GpsError::new(GpsErrorKind::Degrees, None);
        assert_eq!(
            error.to_string(),
            "Invalid or unknown value for a geo coordinate \"degrees\" element/part!"
        );
        assert_eq!(error.kind(), GpsErrorKind::Degrees);
    }

    #[test]
    fn test_detail_is_appended() {
        let error = GpsError::minutes("60 is not below 60");
        assert!(error.message().ends_with("element/part! 60 is not below 60"));
        assert!(error.message().contains("\"minutes\""));
    }

    #[test]
    fn test_blank_detail_is_ignored() {
        let error = GpsError::new(GpsErrorKind::Seconds, Some("   "));
        assert!(error.message().ends_with("element/part!"));
    }

    #[test]
    fn test_default_and_custom_code() {
        assert_eq!(GpsError::direction("x").code(), 256);
        assert_eq!(GpsError::direction("x").with_code(42).code(), 42);
    }

    #[test]
    fn test_source_is_chained() {
        let cause = "abc".parse::<f64>().unwrap_err();
        let error = GpsError::seconds("not a number").with_source(cause);
        assert!(error.source().is_some());
        assert!(GpsError::seconds("plain").source().is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(GpsErrorKind::Direction.to_string(), "direction");
        assert_eq!(GpsErrorKind::Seconds.as_str(), "seconds");
    }
}
