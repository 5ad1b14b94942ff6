//! Backend-agnostic domain types.

pub mod backend;
pub mod record;

pub use backend::{BackendKind, Keying, UnknownBackend};
pub use record::{Record, Selection};
