//! plant-api - A small REST API for a plant catalogue
//!
//! - `plants`: the `Plant` record and its SQLite repository
//! - `http_server`: axum routes, error rendering, server startup
//! - `observability`: tracing subscriber setup
//! - `cli`: command-line entry point

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod plants;
