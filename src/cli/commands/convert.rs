//! Convert command implementation
//!
//! Turns signed decimal degrees into degrees, minutes and seconds.

use crate::Result;
use crate::app::models::{Axis, AxisElement, AxisKind, Latitude, Longitude};
use crate::cli::args::ConvertArgs;
use crate::cli::commands::shared::{AxisReport, CommandOutcome, render};
use crate::config::Config;
use tracing::info;

/// Run the convert command
pub fn run_convert(args: &ConvertArgs, config: &Config) -> Result<CommandOutcome> {
    let report = convert_report(args, config)?;
    println!(
        "{}",
        render(config.output.format, &report, AxisReport::render_human)?
    );
    Ok(CommandOutcome::success())
}

/// Convert the decimal with the requested or configured axis
///
/// Out-of-range and non-finite values fail with the validation error.
pub fn convert_report(args: &ConvertArgs, config: &Config) -> Result<AxisReport> {
    let axis = args.axis.unwrap_or(config.parsing.default_axis);
    info!("Converting {} to {}", args.decimal, axis);

    let element: AxisElement = match axis {
        AxisKind::Latitude => *Latitude::try_from(args.decimal)?.element(),
        AxisKind::Longitude => *Longitude::try_from(args.decimal)?.element(),
    };
    Ok(AxisReport::new(args.decimal.to_string(), &element))
}
