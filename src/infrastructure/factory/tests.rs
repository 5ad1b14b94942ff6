//! Tests for factory functions.
//!
//! Only the backends that need no external server are constructed here;
//! networked backends are covered by the `integration-tests` feature.

use crate::domain::BackendKind;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::{build_adapter, is_compiled};

fn local_config(dir: &tempfile::TempDir) -> Config {
    let mut config = Config::default();
    config.bytestore.path = dir.path().join("cache.redb");
    config.object_file.path = dir.path().join("data.bin");
    config
}

#[test]
fn builds_local_backends_with_matching_kind() {
    let dir = tempfile::tempdir().unwrap();
    let config = local_config(&dir);

    for kind in [
        BackendKind::Sqlite,
        BackendKind::ByteStore,
        BackendKind::ObjectFile,
    ] {
        let adapter = build_adapter(kind, &config).expect("local backend builds");
        assert_eq!(adapter.kind(), kind);
    }
}

#[test]
fn local_backends_are_always_compiled() {
    assert!(is_compiled(BackendKind::Sqlite));
    assert!(is_compiled(BackendKind::ByteStore));
    assert!(is_compiled(BackendKind::ObjectFile));
}

#[cfg(not(feature = "mysql"))]
#[test]
fn mysql_without_feature_is_unavailable() {
    use crate::error::Error;

    let config = Config::default();
    assert!(!is_compiled(BackendKind::Mysql));
    assert!(matches!(
        build_adapter(BackendKind::Mysql, &config),
        Err(Error::Unavailable {
            backend: BackendKind::Mysql,
            feature: "mysql"
        })
    ));
}

#[test]
fn building_byte_store_touches_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = local_config(&dir);

    let _adapter = build_adapter(BackendKind::ByteStore, &config).unwrap();
    assert!(!config.bytestore.path.exists());
}
