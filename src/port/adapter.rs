//! The uniform CRUD contract every backend adapter implements.

use crate::domain::{BackendKind, Selection};
use crate::error::Result;

/// Create/read/update/delete against one storage backend.
///
/// Callers can hold a `Box<dyn Adapter>` without knowing which engine sits
/// behind it. Keying differs per backend (see [`BackendKind::keying`]):
///
/// - Name-keyed backends ignore `key` on insert and store `value` as the
///   record name. Update, delete and select match every record whose name
///   equals `key`.
/// - Key-keyed backends store `value` under `key`. Update overwrites and
///   creates the record when it is absent.
///
/// Missing records are never errors: update and delete become no-ops and
/// select returns an empty sequence or `Selection::Value(None)`.
/// Every call blocks until the backend round-trip completes.
///
/// # Implementation Notes
///
/// - Implementations own their connection state exclusively
/// - Backend failures are returned unmodified and never retried
/// - Adapters holding a connection return [`Error::Closed`] from every
///   operation after [`Adapter::close`]; file-backed adapters stay usable
///
/// [`Error::Closed`]: crate::error::Error::Closed
pub trait Adapter: Send {
    /// Which backend this adapter drives.
    fn kind(&self) -> BackendKind;

    /// Create a new record.
    fn insert(&mut self, key: &str, value: &str) -> Result<()>;

    /// Rewrite the record(s) found by `key` to hold `value`.
    fn update(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the record(s) found by `key`.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Look up the record(s) found by `key`.
    fn select(&mut self, key: &str) -> Result<Selection>;

    /// Release connection resources. Closing twice is a no-op.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
