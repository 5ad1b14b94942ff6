#![allow(dead_code)]

pub mod contract;

use std::path::Path;

use tempfile::TempDir;
use unistore::domain::BackendKind;
use unistore::infrastructure::config::Config;

/// Backends that run without any external server.
pub const LOCAL_BACKENDS: [BackendKind; 3] = [
    BackendKind::Sqlite,
    BackendKind::ByteStore,
    BackendKind::ObjectFile,
];

/// Configuration whose on-disk stores all live under `dir`.
pub fn local_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.bytestore.path = dir.path().join("cache.redb");
    config.object_file.path = dir.path().join("data.bin");
    config
}

/// Same as [`local_config`] but with a file-backed SQLite database, so
/// state survives between adapters and CLI invocations.
pub fn persistent_config(dir: &TempDir) -> Config {
    let mut config = local_config(dir);
    config.sqlite.database = path_str(&dir.path().join("persons.db"));
    config
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
