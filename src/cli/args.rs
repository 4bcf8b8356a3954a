//! CLI argument definitions using clap
//!
//! Commands:
//! - plant-api init --config <path>
//! - plant-api serve --config <path> [--port <port>]
//! - plant-api seed --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// plant-api - A small REST API for a plant catalogue
#[derive(Parser, Debug)]
#[command(name = "plant-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and the plants table
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./plant-api.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./plant-api.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Insert sample plants
    Seed {
        /// Path to configuration file
        #[arg(long, default_value = "./plant-api.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
