//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `GPS_AXIS_*` environment variables. Command line flags are applied on top
//! by the CLI.

use crate::app::models::AxisKind;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, ENV_PREFIX, LOG_LEVELS,
};
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured text for terminals
    #[default]
    Human,
    /// One JSON document per command
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::configuration(format!(
                "Unknown output format '{}': expected 'human' or 'json'",
                other
            ))),
        }
    }
}

/// Parsing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Axis used when a command is not told which one to parse
    pub default_axis: AxisKind,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            default_axis: AxisKind::Latitude,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Colour human output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Global configuration for the gps-axis tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Set the axis used when none is given
    pub fn with_default_axis(mut self, axis: AxisKind) -> Self {
        self.parsing.default_axis = axis;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Disable coloured output
    pub fn without_color(mut self) -> Self {
        self.output.color = false;
        self
    }

    /// `<config dir>/gps-axis/config.toml`, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read and validate a TOML configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults, then a config file, then environment overrides
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when a file is present there.
    pub fn load_layered(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::load_from_file(path)?
            }
            None => match Self::default_config_path().filter(|p| p.exists()) {
                Some(default_path) => {
                    debug!("Loading configuration from {}", default_path.display());
                    Self::load_from_file(&default_path)?
                }
                None => {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GPS_AXIS_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(axis) = lookup(&format!("{}DEFAULT_AXIS", ENV_PREFIX)) {
            self.parsing.default_axis = axis.parse()?;
        }
        if let Some(format) = lookup(&format!("{}OUTPUT_FORMAT", ENV_PREFIX)) {
            self.output.format = format.parse()?;
        }
        if let Some(level) = lookup(&format!("{}LOG_LEVEL", ENV_PREFIX)) {
            self.logging.level = level.trim().to_ascii_lowercase();
        }
        Ok(())
    }

    /// Check settings that serde cannot check
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}': expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.parsing.default_axis, AxisKind::Latitude);
        assert_eq!(config.output.format, OutputFormat::Human);
        assert!(config.output.color);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_default_axis(AxisKind::Longitude)
            .with_format(OutputFormat::Json)
            .with_log_level("debug")
            .without_color();
        assert_eq!(config.parsing.default_axis, AxisKind::Longitude);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.output.color);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
[parsing]
default_axis = "longitude"

[output]
format = "json"
"#,
        );

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.parsing.default_axis, AxisKind::Longitude);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let file = write_config("[parsing]\ndefault_axis = \"altitude\"\n");
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(Error::Configuration { .. })
        ));

        let file = write_config("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(Error::Configuration { .. })
        ));

        let missing = Path::new("/definitely/not/here/config.toml");
        assert!(matches!(
            Config::load_from_file(missing),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_explicit_file_is_loaded_by_layered_load() {
        let file = write_config("[output]\ncolor = false\n");
        let config = Config::load_layered(Some(file.path())).unwrap();
        assert!(!config.output.color);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("GPS_AXIS_DEFAULT_AXIS", "lon"),
            ("GPS_AXIS_OUTPUT_FORMAT", "JSON"),
            ("GPS_AXIS_LOG_LEVEL", " Info "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env(|key| env.get(key).map(|value| value.to_string()))
            .unwrap();

        assert_eq!(config.parsing.default_axis, AxisKind::Longitude);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_override_errors() {
        let mut config = Config::default();
        let result = config.apply_env(|key| {
            (key == "GPS_AXIS_OUTPUT_FORMAT").then(|| "yaml".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_path_ends_with_file_name() {
        if let Some(path) = Config::default_config_path() {
            assert!(path.ends_with("gps-axis/config.toml"));
        }
    }
}
