//! # Plant Store
//!
//! Data layer for the plant catalogue: the `Plant` record, the create and
//! partial-update payloads, and a SQLite-backed repository over the single
//! `plants` table.

pub mod config;
pub mod errors;
pub mod model;
pub mod repository;
pub mod seed;

pub use config::DatabaseConfig;
pub use errors::{StoreError, StoreResult};
pub use model::{NewPlant, Plant, PlantPatch};
pub use repository::PlantRepository;
