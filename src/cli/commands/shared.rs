//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, axis parsing helpers and the
//! report types printed by more than one command.

use crate::app::models::{Axis, AxisElement, AxisKind, Direction, Latitude, Longitude};
use crate::cli::args::CommonArgs;
use crate::config::{Config, OutputFormat};
use crate::constants::EXIT_SUCCESS;
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

/// Result of a command that completed without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub exit_code: i32,
}

impl CommandOutcome {
    pub fn success() -> Self {
        Self {
            exit_code: EXIT_SUCCESS,
        }
    }

    pub fn with_exit_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

/// One parsed axis value as printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisReport {
    /// Text the value was read from
    pub input: String,
    pub axis: AxisKind,
    /// Canonical text form
    pub canonical: String,
    pub direction: Direction,
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
    pub decimal: f64,
}

impl AxisReport {
    pub fn new(input: impl Into<String>, element: &AxisElement) -> Self {
        Self {
            input: input.into(),
            axis: element.kind(),
            canonical: element.canonical_text(),
            direction: element.direction(),
            degrees: element.degrees(),
            minutes: element.minutes(),
            seconds: element.seconds(),
            decimal: element.decimal(),
        }
    }

    /// Multi-line human form
    pub fn render_human(&self) -> String {
        let mut output = format!("{}\n", self.canonical.bold().green());
        output.push_str(&format!("  {:<10} {}\n", "axis:".dimmed(), self.axis));
        output.push_str(&format!("  {:<10} {}\n", "direction:".dimmed(), self.direction));
        output.push_str(&format!("  {:<10} {}\n", "degrees:".dimmed(), self.degrees));
        output.push_str(&format!("  {:<10} {}\n", "minutes:".dimmed(), self.minutes));
        output.push_str(&format!("  {:<10} {:.3}\n", "seconds:".dimmed(), self.seconds));
        output.push_str(&format!("  {:<10} {}", "decimal:".dimmed(), self.decimal));
        output
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(config: &Config, args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = config.logging.level.as_str();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gps_axis={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &CommonArgs) {
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.no_color {
        config.output.color = false;
    }
    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
}

/// Turn colour on or off for everything printed afterwards
pub fn configure_color(config: &Config) {
    if !config.output.color || config.output.format == OutputFormat::Json {
        colored::control::set_override(false);
    }
}

/// Parse `value` as an axis of `kind`
pub fn parse_axis_value(value: &str, kind: AxisKind) -> Result<AxisElement> {
    match kind {
        AxisKind::Latitude => Ok(*value.parse::<Latitude>()?.element()),
        AxisKind::Longitude => Ok(*value.parse::<Longitude>()?.element()),
    }
}

/// Render `report` in the configured format
pub fn render<T: Serialize>(
    format: OutputFormat,
    report: &T,
    human: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| Error::serialization("Failed to serialize report", e)),
    }
}
