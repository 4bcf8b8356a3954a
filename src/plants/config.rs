//! Storage configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Path value that selects a private in-memory database
pub const MEMORY_PATH: &str = ":memory:";

/// Database configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file (default: "plants.db")
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Pool size (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_path() -> PathBuf {
    PathBuf::from("plants.db")
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Config for a database file at `path`
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Config for an in-memory database
    pub fn in_memory() -> Self {
        Self::at(MEMORY_PATH)
    }

    /// Whether this config selects an in-memory database
    pub fn is_memory(&self) -> bool {
        self.path == Path::new(MEMORY_PATH)
    }

    /// Pool size actually used.
    ///
    /// Every in-memory connection is its own database, so the pool is
    /// pinned to one connection.
    pub fn pool_size(&self) -> u32 {
        if self.is_memory() {
            1
        } else {
            self.max_connections
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, PathBuf::from("plants.db"));
        assert_eq!(config.pool_size(), 5);
        assert!(!config.is_memory());
    }

    #[test]
    fn test_memory_pool_is_single_connection() {
        let config = DatabaseConfig {
            max_connections: 8,
            ..DatabaseConfig::in_memory()
        };
        assert!(config.is_memory());
        assert_eq!(config.pool_size(), 1);
    }
}
