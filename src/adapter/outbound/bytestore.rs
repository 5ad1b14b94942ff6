//! Ordered on-disk key-value adapter (redb).
//!
//! No handle is kept between calls: every operation opens the store file,
//! runs one primitive, and closes it again when the database value is
//! dropped, including on error paths. Writes and deletes create the file when
//! it is missing; reads never do.

use std::path::{Path, PathBuf};

use redb::{Database, ReadableTable, TableDefinition, TableError};
use tracing::debug;

use crate::domain::{BackendKind, Selection};
use crate::error::Result;
use crate::infrastructure::config::backend::ByteStoreConfig;
use crate::port::Adapter;

/// Values are stored as raw UTF-8 bytes keyed by the caller's key.
const ENTRIES: TableDefinition<&str, &[u8]> = TableDefinition::new("entries");

/// File-backed key-value adapter.
#[derive(Debug, Clone)]
pub struct ByteStoreAdapter {
    path: PathBuf,
}

impl ByteStoreAdapter {
    /// Bind to a store file. Nothing is opened until the first operation.
    #[must_use]
    pub fn new(config: &ByteStoreConfig) -> Self {
        Self {
            path: config.path.clone(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn put(&self, key: &str, value: &str) -> std::result::Result<(), redb::Error> {
        let db = Database::create(&self.path)?;
        let txn = db.begin_write()?;
        {
            let mut table = txn.open_table(ENTRIES)?;
            table.insert(key, value.as_bytes())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> std::result::Result<bool, redb::Error> {
        let db = Database::create(&self.path)?;
        let txn = db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(ENTRIES)?;
            let removed = table.remove(key)?;
            removed.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }

    fn get(&self, key: &str) -> std::result::Result<Option<Vec<u8>>, redb::Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        let db = Database::open(&self.path)?;
        let txn = db.begin_read()?;
        let table = match txn.open_table(ENTRIES) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = table.get(key)?.map(|guard| guard.value().to_vec());
        Ok(value)
    }
}

impl Adapter for ByteStoreAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::ByteStore
    }

    fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        self.put(key, value)?;
        debug!(backend = "byte-store", key, bytes = value.len(), "insert");
        Ok(())
    }

    fn update(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let removed = self.remove(key)?;
        debug!(backend = "byte-store", key, removed, "delete");
        Ok(())
    }

    fn select(&mut self, key: &str) -> Result<Selection> {
        let value = self
            .get(key)?
            .map(String::from_utf8)
            .transpose()?;
        debug!(backend = "byte-store", key, found = value.is_some(), "select");
        Ok(Selection::Value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(dir: &tempfile::TempDir) -> ByteStoreAdapter {
        ByteStoreAdapter::new(&ByteStoreConfig {
            path: dir.path().join("cache.redb"),
        })
    }

    #[test]
    fn user1_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = adapter(&dir);

        store.insert("user1", "Mike").unwrap();
        assert_eq!(store.select("user1").unwrap().value(), Some("Mike"));

        store.update("user1", "Micheal").unwrap();
        assert_eq!(store.select("user1").unwrap().value(), Some("Micheal"));

        store.delete("user1").unwrap();
        assert_eq!(store.select("user1").unwrap(), Selection::Value(None));
    }

    #[test]
    fn select_on_missing_file_is_absent_and_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = adapter(&dir);

        assert_eq!(store.select("user1").unwrap(), Selection::Value(None));
        assert!(!store.path().exists());
    }

    #[test]
    fn delete_on_missing_file_creates_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = adapter(&dir);

        store.delete("user1").unwrap();
        assert!(store.path().exists());
        assert_eq!(store.select("user1").unwrap(), Selection::Value(None));
    }

    #[test]
    fn update_creates_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = adapter(&dir);

        store.update("user2", "Anna").unwrap();
        assert_eq!(store.select("user2").unwrap().value(), Some("Anna"));
    }

    #[test]
    fn empty_value_is_distinct_from_absence() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = adapter(&dir);

        store.insert("blank", "").unwrap();
        assert_eq!(
            store.select("blank").unwrap(),
            Selection::Value(Some(String::new()))
        );
    }

    #[test]
    fn values_survive_a_new_adapter() {
        let dir = tempfile::tempdir().unwrap();
        adapter(&dir).insert("user1", "Mike").unwrap();

        let mut reopened = adapter(&dir);
        assert_eq!(reopened.select("user1").unwrap().value(), Some("Mike"));
    }
}
