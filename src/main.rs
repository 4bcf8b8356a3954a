//! plant-api CLI entry point
//!
//! Parses arguments and dispatches to the CLI module. Errors go to
//! stderr and exit non-zero.

use plant_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
