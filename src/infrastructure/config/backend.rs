//! Per-backend connection settings.
//!
//! Every endpoint, credential and namespace an adapter needs lives here.
//! Defaults match a local development setup with every server on its
//! standard port.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, Result};

/// Embedded relational store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SqliteConfig {
    /// Database path, or `:memory:` for a fresh in-memory instance per adapter.
    pub database: String,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database: ":memory:".into(),
        }
    }
}

impl SqliteConfig {
    /// True when the database lives only as long as its connection.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.database == ":memory:"
    }
}

/// Networked relational store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MysqlConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// Loaded from `UNISTORE_MYSQL_PASSWORD` at runtime (never from the config file).
    #[serde(skip)]
    pub password: String,
    /// Database created on connect when missing.
    pub database: String,
}

impl Default for MysqlConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3306,
            user: "root".into(),
            password: String::new(),
            database: "handler_mysql_db".into(),
        }
    }
}

impl MysqlConfig {
    /// Server-level URL with no database selected.
    ///
    /// # Errors
    /// Returns an error if the host or credentials cannot form a URL.
    pub fn server_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("mysql://{}:{}", self.host, self.port))?;
        url.set_username(&self.user)
            .map_err(|()| ConfigError::InvalidValue {
                field: "mysql.user",
                reason: "cannot be used in a connection URL".to_string(),
            })?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|()| ConfigError::InvalidValue {
                    field: "UNISTORE_MYSQL_PASSWORD",
                    reason: "cannot be used in a connection URL".to_string(),
                })?;
        }
        Ok(url)
    }

    /// URL selecting the configured database.
    ///
    /// # Errors
    /// Returns an error if the host or credentials cannot form a URL.
    pub fn database_url(&self) -> Result<Url> {
        let mut url = self.server_url()?;
        url.set_path(&self.database);
        Ok(url)
    }
}

/// Document store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Delete every document in the collection when the adapter connects.
    ///
    /// Off by default: wiping prior data is only wanted for throwaway runs.
    pub clear_on_connect: bool,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017/".into(),
            database: "handler_mongo_db".into(),
            collection: "stacks".into(),
            clear_on_connect: false,
        }
    }
}

/// Ordered on-disk key-value store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ByteStoreConfig {
    pub path: PathBuf,
}

impl Default for ByteStoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("cache.redb"),
        }
    }
}

/// Serialized-object file settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObjectFileConfig {
    pub path: PathBuf,
}

impl Default for ObjectFileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data.bin"),
        }
    }
}

/// Expiring cache settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MemcachedConfig {
    /// `host:port` pairs; a `memcache://` prefix is optional.
    pub endpoints: Vec<String>,
    /// Expiry applied to every insert and update, in seconds.
    pub ttl_secs: u32,
}

impl Default for MemcachedConfig {
    fn default() -> Self {
        Self {
            endpoints: vec!["127.0.0.1:11211".into()],
            ttl_secs: 60,
        }
    }
}

impl MemcachedConfig {
    /// Endpoints as `memcache://` URLs understood by the client.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.endpoints
            .iter()
            .map(|endpoint| {
                if endpoint.starts_with("memcache://") {
                    endpoint.clone()
                } else {
                    format!("memcache://{endpoint}")
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_defaults_to_memory() {
        assert!(SqliteConfig::default().is_in_memory());
        let file = SqliteConfig {
            database: "persons.db".into(),
        };
        assert!(!file.is_in_memory());
    }

    #[test]
    fn mysql_server_url_has_no_database() {
        let url = MysqlConfig::default().server_url().unwrap();
        assert_eq!(url.scheme(), "mysql");
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(3306));
        assert_eq!(url.username(), "root");
        assert_eq!(url.password(), None);
        assert!(url.path().is_empty() || url.path() == "/");
    }

    #[test]
    fn mysql_database_url_selects_database() {
        let url = MysqlConfig::default().database_url().unwrap();
        assert_eq!(url.path(), "/handler_mysql_db");
    }

    #[test]
    fn mysql_password_is_percent_encoded() {
        let config = MysqlConfig {
            password: "p@ss word".into(),
            ..MysqlConfig::default()
        };
        let url = config.server_url().unwrap();
        assert_eq!(url.password(), Some("p%40ss%20word"));
    }

    #[test]
    fn mongo_clear_on_connect_is_opt_in() {
        assert!(!MongoConfig::default().clear_on_connect);
    }

    #[test]
    fn memcached_urls_add_scheme_once() {
        let config = MemcachedConfig {
            endpoints: vec!["10.0.0.1:11211".into(), "memcache://10.0.0.2:11211".into()],
            ttl_secs: 60,
        };
        assert_eq!(
            config.urls(),
            vec!["memcache://10.0.0.1:11211", "memcache://10.0.0.2:11211"]
        );
    }

    #[test]
    fn memcached_default_ttl_is_one_minute() {
        assert_eq!(MemcachedConfig::default().ttl_secs, 60);
    }
}
