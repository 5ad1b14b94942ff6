//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates the settings of every
//! backend. Configuration is loaded from a TOML file; every section is
//! optional. Secrets are read from the environment (`UNISTORE_MYSQL_PASSWORD`),
//! never from the file.
//!
//! # Example
//!
//! ```no_run
//! use unistore::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("unistore.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::backend::{
    ByteStoreConfig, MemcachedConfig, MongoConfig, MysqlConfig, ObjectFileConfig, SqliteConfig,
};
use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::error::{ConfigError, Result};

/// Environment variable holding the MySQL password.
pub const MYSQL_PASSWORD_ENV: &str = "UNISTORE_MYSQL_PASSWORD";

/// Longest expiry memcached treats as relative; larger values are read as a
/// Unix timestamp.
pub const MAX_CACHE_TTL_SECS: u32 = 30 * 24 * 60 * 60;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`], parse directly with
/// [`Config::parse_toml`], or start from [`Config::from_env`] when no file
/// is given.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Embedded relational store.
    #[serde(default)]
    pub sqlite: SqliteConfig,

    /// Networked relational store.
    #[serde(default)]
    pub mysql: MysqlConfig,

    /// Document store.
    #[serde(default)]
    pub mongo: MongoConfig,

    /// Ordered on-disk key-value store.
    #[serde(default)]
    pub bytestore: ByteStoreConfig,

    /// Serialized-object file store.
    #[serde(default)]
    pub object_file: ObjectFileConfig,

    /// Expiring cache.
    #[serde(default)]
    pub memcached: MemcachedConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the MySQL password from the `UNISTORE_MYSQL_PASSWORD` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., an empty endpoint list)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Built-in defaults plus environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override fails validation.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn apply_env(&mut self) {
        if let Ok(password) = std::env::var(MYSQL_PASSWORD_ENV) {
            self.mysql.password = password;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }

        if self.sqlite.database.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "sqlite.database",
            }
            .into());
        }

        if self.mysql.host.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "mysql.host" }.into());
        }
        if self.mysql.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "mysql.port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.mysql.user.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "mysql.user" }.into());
        }
        check_identifier("mysql.database", &self.mysql.database)?;

        if self.mongo.uri.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "mongo.uri" }.into());
        }
        check_identifier("mongo.database", &self.mongo.database)?;
        check_identifier("mongo.collection", &self.mongo.collection)?;

        if self.bytestore.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "bytestore.path",
            }
            .into());
        }
        if self.object_file.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "object_file.path",
            }
            .into());
        }

        if self.memcached.endpoints.is_empty()
            || self.memcached.endpoints.iter().any(|e| e.trim().is_empty())
        {
            return Err(ConfigError::MissingField {
                field: "memcached.endpoints",
            }
            .into());
        }
        if self.memcached.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "memcached.ttl_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.memcached.ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                field: "memcached.ttl_secs",
                reason: format!("must be at most {MAX_CACHE_TTL_SECS} (30 days)"),
            }
            .into());
        }

        Ok(())
    }
}

/// Namespace names end up in statements that cannot bind them as parameters.
fn check_identifier(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "may only contain letters, digits and underscores".to_string(),
        }
        .into());
    }
    Ok(())
}
