use clap::Parser;
use gps_axis::cli::{args::Args, commands};
use gps_axis::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(EXIT_SUCCESS);
    };

    match commands::run(command) {
        Ok(outcome) => process::exit(outcome.exit_code),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(EXIT_FAILURE);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("gps-axis - Latitude/Longitude Normalizer");
    println!("========================================");
    println!();
    println!("Parse latitude and longitude values written as decimal degrees or");
    println!("degrees/minutes/seconds text and print them in one canonical form.");
    println!();
    println!("USAGE:");
    println!("    gps-axis <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse        Parse a value in any supported format");
    println!("    convert      Convert decimal degrees to degrees/minutes/seconds");
    println!("    compare      Check whether two values are the same (exit 2 if not)");
    println!("    coordinate   Parse a latitude and a longitude together");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Normalize a latitude:");
    println!("    gps-axis parse \"N 40d26'46.302\"");
    println!();
    println!("    # Convert a decimal longitude, JSON output:");
    println!("    gps-axis convert -79.948862 --axis longitude --format json");
    println!();
    println!("    # Compare two notations of the same value:");
    println!("    gps-axis compare 40.446195 \"40°26'46.302\\\"N\"");
    println!();
    println!("    # Parse a full coordinate:");
    println!("    gps-axis coordinate \"-33.8688 S\" \"151°12'33.48\\\"E\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    gps-axis <COMMAND> --help");
}
