use thiserror::Error;

use crate::domain::BackendKind;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Crate error.
///
/// Backend failures keep the driver's own error type so callers see the
/// statement or command failure unmodified.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("schema migration failed: {0}")]
    Migration(String),

    #[cfg(feature = "mongodb")]
    #[error("document store error: {0}")]
    Document(#[from] mongodb::error::Error),

    #[error("byte store error: {0}")]
    ByteStore(#[from] redb::Error),

    #[error("failed to encode object file: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("failed to decode object file: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[cfg(feature = "memcached")]
    #[error("cache error: {0}")]
    Cache(#[from] memcache::MemcacheError),

    #[error("stored value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("{backend} adapter is closed")]
    Closed { backend: BackendKind },

    #[error("{backend} support was not compiled in (enable the `{feature}` feature)")]
    Unavailable {
        backend: BackendKind,
        feature: &'static str,
    },

    #[error("{failed} of {total} backends failed")]
    BackendsFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
