//! Adapter factory.

use crate::adapter::outbound::{ByteStoreAdapter, ObjectFileAdapter, SqliteAdapter};
use crate::domain::BackendKind;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::Adapter;

/// Construct and connect the adapter for `kind`.
///
/// Construction is where connectivity is checked: an unreachable server
/// fails here and nothing is retried.
///
/// # Errors
/// Returns [`Error::Unavailable`] when the backend's cargo feature is off,
/// otherwise whatever the backend's connect step returns.
pub fn build_adapter(kind: BackendKind, config: &Config) -> Result<Box<dyn Adapter>> {
    match kind {
        BackendKind::Sqlite => Ok(Box::new(SqliteAdapter::connect(&config.sqlite)?)),
        BackendKind::Mysql => build_mysql(config),
        BackendKind::Mongo => build_mongo(config),
        BackendKind::ByteStore => Ok(Box::new(ByteStoreAdapter::new(&config.bytestore))),
        BackendKind::ObjectFile => Ok(Box::new(ObjectFileAdapter::new(&config.object_file))),
        BackendKind::Memcached => build_memcached(config),
    }
}

/// Whether support for `kind` was compiled into this build.
#[must_use]
pub const fn is_compiled(kind: BackendKind) -> bool {
    match kind {
        BackendKind::Sqlite | BackendKind::ByteStore | BackendKind::ObjectFile => true,
        BackendKind::Mysql => cfg!(feature = "mysql"),
        BackendKind::Mongo => cfg!(feature = "mongodb"),
        BackendKind::Memcached => cfg!(feature = "memcached"),
    }
}

#[cfg(feature = "mysql")]
fn build_mysql(config: &Config) -> Result<Box<dyn Adapter>> {
    use crate::adapter::outbound::MysqlAdapter;
    Ok(Box::new(MysqlAdapter::connect(&config.mysql)?))
}

#[cfg(not(feature = "mysql"))]
fn build_mysql(_config: &Config) -> Result<Box<dyn Adapter>> {
    Err(Error::Unavailable {
        backend: BackendKind::Mysql,
        feature: "mysql",
    })
}

#[cfg(feature = "mongodb")]
fn build_mongo(config: &Config) -> Result<Box<dyn Adapter>> {
    use crate::adapter::outbound::MongoAdapter;
    Ok(Box::new(MongoAdapter::connect(&config.mongo)?))
}

#[cfg(not(feature = "mongodb"))]
fn build_mongo(_config: &Config) -> Result<Box<dyn Adapter>> {
    Err(Error::Unavailable {
        backend: BackendKind::Mongo,
        feature: "mongodb",
    })
}

#[cfg(feature = "memcached")]
fn build_memcached(config: &Config) -> Result<Box<dyn Adapter>> {
    use crate::adapter::outbound::MemcachedAdapter;
    Ok(Box::new(MemcachedAdapter::connect(&config.memcached)?))
}

#[cfg(not(feature = "memcached"))]
fn build_memcached(_config: &Config) -> Result<Box<dyn Adapter>> {
    Err(Error::Unavailable {
        backend: BackendKind::Memcached,
        feature: "memcached",
    })
}
