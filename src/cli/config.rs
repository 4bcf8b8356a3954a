//! Configuration file
//!
//! JSON, every section optional:
//!
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 5555, "cors_origins": [] },
//!   "database": { "path": "plants.db", "max_connections": 5 },
//!   "log_format": "pretty"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::plants::DatabaseConfig;

use super::errors::{CliError, CliResult};

/// Process configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }
        if self.database.max_connections == 0 {
            return Err(CliError::config_error("database.max_connections must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 5555);
    }

    #[test]
    fn test_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("plant-api.json");
        fs::write(
            &path,
            r#"{"database": {"path": "/tmp/shop.db"}, "log_format": "json"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.database.path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.server, HttpServerConfig::default());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = Config::parse("{not json").unwrap_err();
        assert!(err.message().starts_with("Invalid config JSON"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = Config::parse(r#"{"server": {"port": 0}}"#).unwrap_err();
        assert_eq!(err.message(), "server.port must be > 0");
    }

    #[test]
    fn test_zero_pool_rejected() {
        assert!(Config::parse(r#"{"database": {"max_connections": 0}}"#).is_err());
    }
}
