//! Embedded relational adapter (SQLite).
//!
//! With the default `:memory:` database every adapter starts from an empty
//! instance, and closing it discards everything that was stored.

use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use tracing::info;

use super::run_migrations;
use crate::domain::BackendKind;
use crate::error::Result;
use crate::infrastructure::config::backend::SqliteConfig;

/// Embedded migrations for the SQLite dialect.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/sqlite");

/// SQLite-backed adapter owning a single connection.
pub struct SqliteAdapter {
    /// `None` once the adapter has been closed.
    conn: Option<SqliteConnection>,
    database: String,
}

impl SqliteAdapter {
    /// Open the database and provision the `persons` table.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn connect(config: &SqliteConfig) -> Result<Self> {
        let mut conn = SqliteConnection::establish(&config.database)?;
        run_migrations(&mut conn, MIGRATIONS)?;
        info!(database = %config.database, "sqlite adapter connected");

        Ok(Self {
            conn: Some(conn),
            database: config.database.clone(),
        })
    }
}

name_keyed_adapter!(SqliteAdapter, BackendKind::Sqlite, "sqlite");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Record, Selection};
    use crate::error::Error;
    use crate::port::Adapter;

    fn adapter() -> SqliteAdapter {
        SqliteAdapter::connect(&SqliteConfig::default()).expect("open in-memory sqlite")
    }

    #[test]
    fn insert_ignores_key_and_stores_value_as_name() {
        let mut db = adapter();
        db.insert("ignored", "Mike").unwrap();

        assert!(db.select("ignored").unwrap().is_empty());
        let selection = db.select("Mike").unwrap();
        assert_eq!(
            selection,
            Selection::Records(vec![Record::Person {
                id: 1,
                name: "Mike".to_string()
            }])
        );
    }

    #[test]
    fn mike_scenario() {
        let mut db = adapter();

        db.insert("Mike", "Mike").unwrap();
        assert_eq!(db.select("Mike").unwrap().values(), vec!["Mike"]);

        db.update("Mike", "Micheal").unwrap();
        assert_eq!(db.select("Micheal").unwrap().values(), vec!["Micheal"]);
        assert!(db.select("Mike").unwrap().is_empty());

        db.delete("Micheal").unwrap();
        assert_eq!(db.select("Micheal").unwrap(), Selection::Records(vec![]));
    }

    #[test]
    fn duplicate_names_are_all_returned_updated_and_deleted() {
        let mut db = adapter();
        db.insert("", "Mike").unwrap();
        db.insert("", "Mike").unwrap();
        db.insert("", "Anna").unwrap();

        let selection = db.select("Mike").unwrap();
        let records = selection.records().unwrap();
        assert_eq!(records.len(), 2);
        assert!(matches!(records[0], Record::Person { id: 1, .. }));
        assert!(matches!(records[1], Record::Person { id: 2, .. }));

        db.update("Mike", "Micheal").unwrap();
        assert_eq!(db.select("Micheal").unwrap().values().len(), 2);

        db.delete("Micheal").unwrap();
        assert!(db.select("Micheal").unwrap().is_empty());
        assert_eq!(db.select("Anna").unwrap().values(), vec!["Anna"]);
    }

    #[test]
    fn missing_name_is_a_no_op() {
        let mut db = adapter();
        db.update("nobody", "someone").unwrap();
        db.delete("nobody").unwrap();
        assert!(db.select("someone").unwrap().is_empty());
    }

    #[test]
    fn identities_are_not_reused_after_delete() {
        let mut db = adapter();
        db.insert("", "Mike").unwrap();
        db.delete("Mike").unwrap();
        db.insert("", "Mike").unwrap();

        let selection = db.select("Mike").unwrap();
        assert!(matches!(
            selection.records().unwrap(),
            [Record::Person { id: 2, .. }]
        ));
    }

    #[test]
    fn names_are_bound_not_interpolated() {
        let mut db = adapter();
        let hostile = "x'); DROP TABLE persons; --";
        db.insert("", hostile).unwrap();
        assert_eq!(db.select(hostile).unwrap().values(), vec![hostile]);
    }

    #[test]
    fn operations_fail_after_close() {
        let mut db = adapter();
        db.close().unwrap();
        db.close().unwrap();

        assert!(matches!(
            db.insert("", "Mike"),
            Err(Error::Closed {
                backend: BackendKind::Sqlite
            })
        ));
        assert!(matches!(db.select("Mike"), Err(Error::Closed { .. })));
    }

    #[test]
    fn in_memory_state_does_not_outlive_the_adapter() {
        let mut first = adapter();
        first.insert("", "Mike").unwrap();
        first.close().unwrap();

        let mut second = adapter();
        assert!(second.select("Mike").unwrap().is_empty());
    }

    #[test]
    fn file_database_persists_across_adapters() {
        let dir = tempfile::tempdir().unwrap();
        let config = SqliteConfig {
            database: dir.path().join("persons.db").to_string_lossy().into_owned(),
        };

        let mut first = SqliteAdapter::connect(&config).unwrap();
        first.insert("", "Mike").unwrap();
        first.close().unwrap();

        let mut second = SqliteAdapter::connect(&config).unwrap();
        assert_eq!(second.select("Mike").unwrap().values(), vec!["Mike"]);
    }
}
