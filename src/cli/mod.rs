//! CLI module for plant-api
//!
//! Provides command-line interface for:
//! - init: Create the database and table
//! - serve: Run the HTTP API
//! - seed: Insert sample plants

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, seed_samples, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
