//! Backend kinds and how each one keys its records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six storage engines the facade can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Embedded relational store (SQLite).
    Sqlite,
    /// Networked relational store (MySQL).
    Mysql,
    /// Document store (MongoDB).
    Mongo,
    /// Ordered on-disk key-value store (redb).
    ByteStore,
    /// Serialized-object file store.
    ObjectFile,
    /// Expiring in-memory cache (Memcached).
    Memcached,
}

/// How a backend resolves the lookup key passed to update, delete and select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keying {
    /// The key is matched against the non-unique `name` column.
    ByName,
    /// The caller-supplied key is the unique lookup handle.
    ByKey,
}

impl BackendKind {
    /// Every backend, in the order the demo driver exercises them.
    pub const ALL: [BackendKind; 6] = [
        Self::Sqlite,
        Self::Mysql,
        Self::Mongo,
        Self::ByteStore,
        Self::ObjectFile,
        Self::Memcached,
    ];

    /// Stable lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
            Self::Mongo => "mongo",
            Self::ByteStore => "byte-store",
            Self::ObjectFile => "object-file",
            Self::Memcached => "memcached",
        }
    }

    #[must_use]
    pub const fn keying(self) -> Keying {
        match self {
            Self::Sqlite | Self::Mysql => Keying::ByName,
            Self::Mongo | Self::ByteStore | Self::ObjectFile | Self::Memcached => Keying::ByKey,
        }
    }

    /// True when the backend talks to an external server that must already be running.
    #[must_use]
    pub const fn is_networked(self) -> bool {
        matches!(self, Self::Mysql | Self::Mongo | Self::Memcached)
    }

    /// True when stored records may vanish without an explicit delete.
    #[must_use]
    pub const fn is_expiring(self) -> bool {
        matches!(self, Self::Memcached)
    }

    /// Key that finds a record written with `insert(key, value)`.
    ///
    /// Name-keyed backends ignore the key on insert and store only the value,
    /// so the value is what a later select has to look up.
    #[must_use]
    pub fn lookup_key<'a>(self, key: &'a str, value: &'a str) -> &'a str {
        match self.keying() {
            Keying::ByName => value,
            Keying::ByKey => key,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown backend name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend '{0}' (expected one of: sqlite, mysql, mongo, byte-store, object-file, memcached)")]
pub struct UnknownBackend(pub String);

impl FromStr for BackendKind {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "mysql" => Ok(Self::Mysql),
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "byte-store" | "bytestore" | "redb" | "dbm" => Ok(Self::ByteStore),
            "object-file" | "objectfile" | "pickle" => Ok(Self::ObjectFile),
            "memcached" | "memcache" => Ok(Self::Memcached),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}
