//! Tests against live MySQL, MongoDB and Memcached servers.
//!
//! Run with `--features integration-tests` (plus `mysql` for the MySQL
//! tests) once the servers listed by `unistore check requirements` are up.

#![cfg(feature = "integration-tests")]

mod support;

use unistore::domain::BackendKind;
use unistore::infrastructure::config::Config;
use unistore::infrastructure::factory::build_adapter;

use support::contract;

#[cfg(feature = "mysql")]
#[test]
fn mysql_honors_the_contract() {
    let mut config = Config::from_env().unwrap();
    config.mysql.database = "unistore_it".into();

    let mut mysql = build_adapter(BackendKind::Mysql, &config).unwrap();
    for name in ["rt-value", "uv-old", "uv-new", "dr-value"] {
        mysql.delete(name).unwrap();
    }
    contract::all(mysql.as_mut());

    mysql.insert("a", "it-dup").unwrap();
    mysql.insert("b", "it-dup").unwrap();
    assert_eq!(mysql.select("it-dup").unwrap().values().len(), 2);
    mysql.delete("it-dup").unwrap();
    mysql.close().unwrap();
}

#[cfg(feature = "mongodb")]
#[test]
fn mongo_user1_scenario() {
    let mut config = Config::from_env().unwrap();
    config.mongo.collection = "unistore_it".into();
    config.mongo.clear_on_connect = true;

    let mut mongo = build_adapter(BackendKind::Mongo, &config).unwrap();
    mongo.insert("user1", "Mike").unwrap();
    let selection = mongo.select("user1").unwrap();
    assert_eq!(selection.values(), vec!["Mike"]);

    mongo.update("user1", "Micheal").unwrap();
    assert_eq!(mongo.select("user1").unwrap().values(), vec!["Micheal"]);

    mongo.delete("user1").unwrap();
    assert!(mongo.select("user1").unwrap().is_empty());

    contract::all(mongo.as_mut());
    mongo.close().unwrap();
}

#[cfg(feature = "mongodb")]
#[test]
fn mongo_returns_every_document_with_a_key() {
    let mut config = Config::from_env().unwrap();
    config.mongo.collection = "unistore_it_dup".into();
    config.mongo.clear_on_connect = true;

    let mut mongo = build_adapter(BackendKind::Mongo, &config).unwrap();
    mongo.insert("dup", "first").unwrap();
    mongo.insert("dup", "second").unwrap();
    assert_eq!(mongo.select("dup").unwrap().values(), vec!["first", "second"]);

    // Update rewrites only the first match.
    mongo.update("dup", "renamed").unwrap();
    let selection = mongo.select("dup").unwrap();
    let values = selection.values();
    assert_eq!(values.len(), 2);
    assert_eq!(values.iter().filter(|v| **v == "renamed").count(), 1);

    // Delete removes only the first match.
    mongo.delete("dup").unwrap();
    assert_eq!(mongo.select("dup").unwrap().values().len(), 1);
    mongo.close().unwrap();
}

#[cfg(feature = "memcached")]
#[test]
fn memcached_honors_the_contract() {
    let config = Config::from_env().unwrap();

    let mut cache = build_adapter(BackendKind::Memcached, &config).unwrap();
    for key in ["rt-key", "uv-key", "dr-key", "missing", "never-stored"] {
        cache.delete(key).unwrap();
    }
    contract::all(cache.as_mut());

    // Only the immediate read is asserted; expiry is not timed here.
    cache.insert("user1", "Mike").unwrap();
    assert_eq!(cache.select("user1").unwrap().value(), Some("Mike"));
    cache.delete("user1").unwrap();
    cache.close().unwrap();
}
