//! Compare command implementation
//!
//! Two values are equal when they render to the same canonical text. The
//! left value must parse; a right value that does not parse is simply not
//! equal.

use crate::Result;
use crate::app::models::{AxisKind, Latitude, Longitude};
use crate::cli::args::CompareArgs;
use crate::cli::commands::shared::{CommandOutcome, render};
use crate::config::Config;
use crate::constants::EXIT_NOT_EQUAL;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

/// Result of comparing two values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareReport {
    pub axis: AxisKind,
    pub left: String,
    /// Canonical text of the right value, `None` when it does not parse
    pub right: Option<String>,
    pub equal: bool,
}

impl CompareReport {
    pub fn render_human(&self) -> String {
        let right = self.right.as_deref().unwrap_or("(unparseable)");
        let verdict = if self.equal {
            "equal".green().bold()
        } else {
            "not equal".red().bold()
        };
        format!("{} {} {} ({})", self.left, verdict, right, self.axis)
    }
}

/// Run the compare command; exits with status 2 when the values differ
pub fn run_compare(args: &CompareArgs, config: &Config) -> Result<CommandOutcome> {
    let report = compare_report(args, config)?;
    println!(
        "{}",
        render(config.output.format, &report, CompareReport::render_human)?
    );

    if report.equal {
        Ok(CommandOutcome::success())
    } else {
        Ok(CommandOutcome::with_exit_code(EXIT_NOT_EQUAL))
    }
}

pub fn compare_report(args: &CompareArgs, config: &Config) -> Result<CompareReport> {
    let axis = args.axis.unwrap_or(config.parsing.default_axis);
    info!("Comparing '{}' with '{}' as {}", args.left, args.right, axis);

    let right = args.right.as_str();
    let report = match axis {
        AxisKind::Latitude => {
            let left: Latitude = args.left.parse()?;
            CompareReport {
                axis,
                left: left.to_string(),
                right: Latitude::try_parse(right).map(|value| value.to_string()),
                equal: left.equals(right),
            }
        }
        AxisKind::Longitude => {
            let left: Longitude = args.left.parse()?;
            CompareReport {
                axis,
                left: left.to_string(),
                right: Longitude::try_parse(right).map(|value| value.to_string()),
                equal: left.equals(right),
            }
        }
    };

    Ok(report)
}
