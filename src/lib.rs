//! Unistore - one create/read/update/delete facade over six storage backends.
//!
//! Callers write `insert`, `update`, `delete` and `select` once against the
//! [`port::Adapter`] trait and pick a backend at runtime:
//!
//! - **embedded relational** (SQLite, via Diesel)
//! - **networked relational** (MySQL, via Diesel; `mysql` feature)
//! - **document store** (MongoDB; `mongodb` feature)
//! - **ordered byte store** (redb)
//! - **object file** (a `bincode`-encoded map)
//! - **expiring cache** (Memcached; `memcached` feature)
//!
//! Relational backends identify records by their non-unique `name`; the
//! other backends by the caller-supplied key. Select results are normalized
//! into [`domain::Selection`].
//!
//! # Modules
//!
//! - [`domain`] - Backend kinds, records and selections
//! - [`port`] - The [`port::Adapter`] capability trait
//! - [`adapter`] - Backend implementations and the command-line interface
//! - [`infrastructure`] - Configuration, logging and the adapter factory
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use unistore::domain::BackendKind;
//! use unistore::infrastructure::config::Config;
//! use unistore::infrastructure::factory::build_adapter;
//!
//! fn main() -> unistore::error::Result<()> {
//!     let config = Config::from_env()?;
//!     let mut store = build_adapter(BackendKind::ByteStore, &config)?;
//!     store.insert("user1", "Mike")?;
//!     println!("{}", store.select("user1")?);
//!     store.close()
//! }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
