//! Command-line argument definitions for gps-axis
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::models::AxisKind;
use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the gps-axis tool
///
/// Normalizes latitude and longitude values written as decimal degrees or
/// in one of several DMS text dialects.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gps-axis",
    version,
    about = "Parse, validate and normalize latitude/longitude values",
    long_about = "Parses latitude and longitude values written as decimal degrees or as \
                  degrees/minutes/seconds text (40°26'46.302\"N, N 40d26'46.302, 40:26:46.302 N, \
                  -79° 56' 55.903\", 40°26.7717'N and more), validates them against the rules \
                  of each axis and prints them in one canonical form."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a value in any supported format and print its canonical form
    Parse(ParseArgs),
    /// Convert signed decimal degrees to degrees, minutes and seconds
    Convert(ConvertArgs),
    /// Check whether two values denote the same axis value
    Compare(CompareArgs),
    /// Parse a latitude and a longitude into one coordinate
    Coordinate(CoordinateArgs),
}

impl Commands {
    /// Flags shared by every subcommand
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Parse(args) => &args.common,
            Commands::Convert(args) => &args.common,
            Commands::Compare(args) => &args.common,
            Commands::Coordinate(args) => &args.common,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Commands::Parse(_) => "parse",
            Commands::Convert(_) => "convert",
            Commands::Compare(_) => "compare",
            Commands::Coordinate(_) => "coordinate",
        }
    }
}

/// Output, logging and configuration flags
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CommonArgs {
    /// Output format for results
    ///
    /// Falls back to the configured format (human unless configured).
    #[arg(long = "format", value_enum, help = "Output format for results")]
    pub format: Option<OutputFormat>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only errors are logged. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// gps-axis/config.toml in the user configuration directory.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long = "no-color", help = "Disable coloured output")]
    pub no_color: bool,
}

impl CommonArgs {
    /// Log level selected by the verbosity flags
    ///
    /// `None` when no flag was given, leaving the choice to the configuration.
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Value to parse, e.g. "40°26'46.302\"N" or "-79.948862"
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Axis to parse the value as
    #[arg(
        short = 'a',
        long = "axis",
        value_name = "AXIS",
        help = "Axis to parse as: latitude (lat) or longitude (lon)"
    )]
    pub axis: Option<AxisKind>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Signed decimal degrees; negative means S or W
    #[arg(value_name = "DECIMAL", allow_hyphen_values = true)]
    pub decimal: f64,

    /// Axis to convert to
    #[arg(
        short = 'a',
        long = "axis",
        value_name = "AXIS",
        help = "Axis to convert to: latitude (lat) or longitude (lon)"
    )]
    pub axis: Option<AxisKind>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the compare command
#[derive(Debug, Clone, Parser)]
pub struct CompareArgs {
    /// Reference value
    #[arg(value_name = "LEFT", allow_hyphen_values = true)]
    pub left: String,

    /// Value compared against the reference
    #[arg(value_name = "RIGHT", allow_hyphen_values = true)]
    pub right: String,

    /// Axis both values are read as
    #[arg(
        short = 'a',
        long = "axis",
        value_name = "AXIS",
        help = "Axis to compare on: latitude (lat) or longitude (lon)"
    )]
    pub axis: Option<AxisKind>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the coordinate command
#[derive(Debug, Clone, Parser)]
pub struct CoordinateArgs {
    /// Latitude in any supported format
    #[arg(value_name = "LATITUDE", allow_hyphen_values = true)]
    pub latitude: String,

    /// Longitude in any supported format
    #[arg(value_name = "LONGITUDE", allow_hyphen_values = true)]
    pub longitude: String,

    #[command(flatten)]
    pub common: CommonArgs,
}
