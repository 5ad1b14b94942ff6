//! Contract checks shared by the local and network test suites.
//!
//! Each check takes a freshly built adapter and asserts one property of the
//! insert/update/delete/select contract, choosing the lookup key the way the
//! adapter's keying requires.

use unistore::domain::{Keying, Selection};
use unistore::port::Adapter;

fn key_for(adapter: &dyn Adapter, key: &str, name: &str) -> String {
    match adapter.kind().keying() {
        Keying::ByName => name.to_string(),
        Keying::ByKey => key.to_string(),
    }
}

/// `insert(k, v); select(lookup)` yields exactly `v`.
pub fn round_trip(adapter: &mut dyn Adapter) {
    adapter.insert("rt-key", "rt-value").unwrap();
    let lookup = adapter.kind().lookup_key("rt-key", "rt-value").to_string();
    let selection = adapter.select(&lookup).unwrap();
    assert_eq!(selection.values(), vec!["rt-value"], "{}", adapter.kind());
}

/// `insert(k, v1); update(k, v2); select` yields `v2` and not `v1`.
pub fn update_visibility(adapter: &mut dyn Adapter) {
    let kind = adapter.kind();
    adapter.insert("uv-key", "uv-old").unwrap();
    let lookup = key_for(adapter, "uv-key", "uv-old");
    adapter.update(&lookup, "uv-new").unwrap();

    let after = kind.lookup_key("uv-key", "uv-new");
    let selection = adapter.select(after).unwrap();
    assert_eq!(selection.values(), vec!["uv-new"], "{kind}");

    let before = kind.lookup_key("uv-key", "uv-old");
    let selection = adapter.select(before).unwrap();
    assert!(!selection.values().contains(&"uv-old"), "{kind}");
}

/// `insert(k, v); delete(lookup); select(lookup)` is empty or absent.
pub fn delete_removes(adapter: &mut dyn Adapter) {
    adapter.insert("dr-key", "dr-value").unwrap();
    let lookup = key_for(adapter, "dr-key", "dr-value");
    adapter.delete(&lookup).unwrap();
    let selection = adapter.select(&lookup).unwrap();
    assert!(selection.is_empty(), "{}: {selection}", adapter.kind());
}

/// Deleting something never stored succeeds.
pub fn idempotent_delete(adapter: &mut dyn Adapter) {
    adapter.delete("never-stored").unwrap();
    adapter.delete("never-stored").unwrap();
    assert!(adapter.select("never-stored").unwrap().is_empty());
}

/// Not-found is an empty sequence for name-keyed backends, an absence
/// marker for key-keyed ones.
pub fn not_found_shape(adapter: &mut dyn Adapter) {
    let selection = adapter.select("missing").unwrap();
    match adapter.kind().keying() {
        Keying::ByName => assert_eq!(selection, Selection::Records(vec![])),
        Keying::ByKey if adapter.kind() == unistore::domain::BackendKind::Mongo => {
            assert_eq!(selection, Selection::Records(vec![]));
        }
        Keying::ByKey => assert_eq!(selection, Selection::Value(None)),
    }
}

/// Every check, in order, on one adapter.
pub fn all(adapter: &mut dyn Adapter) {
    round_trip(adapter);
    update_visibility(adapter);
    delete_removes(adapter);
    idempotent_delete(adapter);
    not_found_shape(adapter);
}
