//! Coordinate command implementation
//!
//! Parses a latitude and a longitude and prints them as one coordinate.

use crate::Result;
use crate::app::models::{Coordinate, Latitude, Longitude};
use crate::cli::args::CoordinateArgs;
use crate::cli::commands::shared::{AxisReport, CommandOutcome, render};
use crate::config::Config;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

/// A parsed latitude/longitude pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateReport {
    /// `"<latitude> <longitude>"` in canonical text
    pub canonical: String,
    pub latitude: AxisReport,
    pub longitude: AxisReport,
}

impl CoordinateReport {
    pub fn render_human(&self) -> String {
        format!(
            "{}\n  {:<10} ({}, {})",
            self.canonical.bold().green(),
            "decimal:".dimmed(),
            self.latitude.decimal,
            self.longitude.decimal
        )
    }
}

/// Run the coordinate command
pub fn run_coordinate(args: &CoordinateArgs, config: &Config) -> Result<CommandOutcome> {
    let report = coordinate_report(args)?;
    println!(
        "{}",
        render(config.output.format, &report, CoordinateReport::render_human)?
    );
    Ok(CommandOutcome::success())
}

pub fn coordinate_report(args: &CoordinateArgs) -> Result<CoordinateReport> {
    info!(
        "Parsing coordinate '{}' / '{}'",
        args.latitude, args.longitude
    );

    let latitude: Latitude = args.latitude.parse()?;
    let longitude: Longitude = args.longitude.parse()?;
    let coordinate = Coordinate::new(latitude, longitude);

    Ok(CoordinateReport {
        canonical: coordinate.to_string(),
        latitude: AxisReport::new(args.latitude.clone(), &latitude),
        longitude: AxisReport::new(args.longitude.clone(), &longitude),
    })
}
