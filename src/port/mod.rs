//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                       ┌──────────────────┐
//!                       │   CLI / caller   │
//!                       └────────┬─────────┘
//!                                │ dyn Adapter
//!     ┌──────────┬──────────┬────┴─────┬───────────┬────────────┐
//!     ▼          ▼          ▼          ▼           ▼            ▼
//! ┌────────┐ ┌───────┐ ┌────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐
//! │ SQLite │ │ MySQL │ │ Mongo  │ │ ByteStore│ │ObjectFile│ │Memcached │
//! └────────┘ └───────┘ └────────┘ └──────────┘ └──────────┘ └──────────┘
//! ```

mod adapter;

pub use adapter::Adapter;
