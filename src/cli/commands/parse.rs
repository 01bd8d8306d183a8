//! Parse command implementation
//!
//! Reads one value in any supported text format and prints its canonical
//! form together with the validated components.

use crate::Result;
use crate::cli::args::ParseArgs;
use crate::cli::commands::shared::{AxisReport, CommandOutcome, parse_axis_value, render};
use crate::config::Config;
use tracing::info;

/// Run the parse command
pub fn run_parse(args: &ParseArgs, config: &Config) -> Result<CommandOutcome> {
    let report = parse_report(args, config)?;
    println!(
        "{}",
        render(config.output.format, &report, AxisReport::render_human)?
    );
    Ok(CommandOutcome::success())
}

/// Parse the value with the requested or configured axis
pub fn parse_report(args: &ParseArgs, config: &Config) -> Result<AxisReport> {
    let axis = args.axis.unwrap_or(config.parsing.default_axis);
    info!("Parsing '{}' as {}", args.value, axis);

    let element = parse_axis_value(&args.value, axis)?;
    Ok(AxisReport::new(args.value.clone(), &element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::app::models::{AxisKind, Direction};
    use crate::cli::args::CommonArgs;

    fn args(value: &str, axis: Option<AxisKind>) -> ParseArgs {
        ParseArgs {
            value: value.to_string(),
            axis,
            common: CommonArgs::default(),
        }
    }

    #[test]
    fn test_default_axis_comes_from_config() {
        let config = Config::default().with_default_axis(AxisKind::Longitude);
        let report = parse_report(&args("w 79:56:55.903", None), &config).unwrap();
        assert_eq!(report.axis, AxisKind::Longitude);
        assert_eq!(report.canonical, "79°56'55.903\"W");
    }

    #[test]
    fn test_explicit_axis_wins() {
        let config = Config::default().with_default_axis(AxisKind::Longitude);
        let report = parse_report(&args("-33.8688 S", Some(AxisKind::Latitude)), &config).unwrap();
        assert_eq!(report.direction, Direction::South);
        assert_eq!(report.input, "-33.8688 S");
    }

    #[test]
    fn test_unparseable_value() {
        let error = parse_report(&args("95°N", None), &Config::default()).unwrap_err();
        assert!(matches!(error, Error::UnparseableInput { .. }));
        assert_eq!(error.to_string(), "Unable to parse '95°N' as a latitude");
    }
}
