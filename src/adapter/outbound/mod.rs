//! Outbound adapters (driven side): one per storage backend.

pub mod bytestore;
pub mod object_file;
pub mod relational;

#[cfg(feature = "memcached")]
pub mod memcached;
#[cfg(feature = "mongodb")]
pub mod mongo;

pub use bytestore::ByteStoreAdapter;
pub use object_file::ObjectFileAdapter;
pub use relational::SqliteAdapter;

#[cfg(feature = "mysql")]
pub use relational::MysqlAdapter;

#[cfg(feature = "memcached")]
pub use memcached::MemcachedAdapter;
#[cfg(feature = "mongodb")]
pub use mongo::MongoAdapter;
