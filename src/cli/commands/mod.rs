//! Command implementations for the gps-axis CLI
//!
//! Each command is implemented in its own module. They share configuration
//! loading, logging setup and report rendering through [`shared`].

pub mod compare;
pub mod convert;
pub mod coordinate;
pub mod parse;
pub mod shared;

pub use shared::CommandOutcome;

use crate::Result;
use crate::cli::args::Commands;
use tracing::debug;

/// Main command runner for gps-axis
///
/// Loads the layered configuration, sets up logging and dispatches to the
/// subcommand handler:
/// - `parse`: any supported text format to canonical form
/// - `convert`: decimal degrees to DMS
/// - `compare`: canonical equality of two values
/// - `coordinate`: latitude and longitude into one coordinate
pub fn run(command: Commands) -> Result<CommandOutcome> {
    let common = command.common();
    let config = shared::load_configuration(common)?;
    shared::setup_logging(&config, common)?;
    shared::configure_color(&config);

    debug!("Running {} command", command.name());

    match &command {
        Commands::Parse(args) => parse::run_parse(args, &config),
        Commands::Convert(args) => convert::run_convert(args, &config),
        Commands::Compare(args) => compare::run_compare(args, &config),
        Commands::Coordinate(args) => coordinate::run_coordinate(args, &config),
    }
}
