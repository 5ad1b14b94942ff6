//! Serialized-object file adapter.
//!
//! The whole key/value map is held in memory and written to one file with
//! `bincode` after every mutation; every select reloads the map from that
//! file first. Each call therefore costs time proportional to everything
//! stored, which is acceptable only for small data sets.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{BackendKind, Selection};
use crate::error::Result;
use crate::infrastructure::config::backend::ObjectFileConfig;
use crate::port::Adapter;

/// File-persisted key/value map.
#[derive(Debug, Clone)]
pub struct ObjectFileAdapter {
    path: PathBuf,
    data: BTreeMap<String, String>,
}

impl ObjectFileAdapter {
    /// Start with an empty map bound to the configured file.
    ///
    /// The file is not read here; the first select replaces the map with
    /// whatever the file holds.
    #[must_use]
    pub fn new(config: &ObjectFileConfig) -> Self {
        Self {
            path: config.path.clone(),
            data: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the whole map and replace the file.
    ///
    /// Written to a sibling temp file first, then renamed over the target.
    fn save(&self) -> Result<()> {
        let bytes = bincode::serde::encode_to_vec(&self.data, bincode::config::standard())?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), entries = self.data.len(), bytes = bytes.len(), "object file saved");
        Ok(())
    }

    /// Replace the map with the file contents; a missing file is an empty map.
    fn load(&mut self) -> Result<()> {
        self.data = match fs::read(&self.path) {
            Ok(bytes) => {
                let (data, _) =
                    bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
                data
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(())
    }
}

impl Adapter for ObjectFileAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::ObjectFile
    }

    fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn update(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert(key, value)
    }

    /// Rewrites the file even when `key` was not present.
    fn delete(&mut self, key: &str) -> Result<()> {
        self.data.remove(key);
        self.save()
    }

    fn select(&mut self, key: &str) -> Result<Selection> {
        self.load()?;
        Ok(Selection::Value(self.data.get(key).cloned()))
    }
}
