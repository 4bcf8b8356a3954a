//! # HTTP Server Module
//!
//! Axum router and server for the plant API.
//!
//! # Endpoints
//!
//! - `/plants` - list and create
//! - `/plants/:id` - fetch, partial update, delete

pub mod config;
pub mod errors;
pub mod extract;
pub mod plant_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use plant_routes::{plant_routes, PlantsState};
pub use server::HttpServer;
