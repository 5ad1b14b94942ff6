//! Relational adapters using Diesel ORM.
//!
//! Both dialects share the `persons` table and its row types. Records are
//! identified by a store-assigned integer, but callers look them up by the
//! non-unique `name` column, so update, delete and select act on every
//! matching row. Each mutating statement runs in its own transaction and is
//! committed before the call returns.

/// Implements [`Adapter`](crate::port::Adapter) over the `persons` table for
/// an adapter holding `conn: Option<Connection>` and `database: String`.
macro_rules! name_keyed_adapter {
    ($adapter:ty, $kind:expr, $tag:literal) => {
        impl $crate::port::Adapter for $adapter {
            fn kind(&self) -> $crate::domain::BackendKind {
                $kind
            }

            fn insert(&mut self, _key: &str, value: &str) -> $crate::error::Result<()> {
                use $crate::adapter::outbound::relational::model::NewPersonRow;
                use $crate::adapter::outbound::relational::schema::persons;

                let conn = self.conn.as_mut().ok_or($crate::error::Error::Closed {
                    backend: $kind,
                })?;
                let inserted = conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    diesel::insert_into(persons::table)
                        .values(&NewPersonRow { name: value })
                        .execute(conn)
                })?;
                tracing::debug!(backend = $tag, name = value, rows = inserted, "insert");
                Ok(())
            }

            fn update(&mut self, key: &str, value: &str) -> $crate::error::Result<()> {
                use $crate::adapter::outbound::relational::schema::persons;

                let conn = self.conn.as_mut().ok_or($crate::error::Error::Closed {
                    backend: $kind,
                })?;
                let updated = conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    diesel::update(persons::table.filter(persons::name.eq(key)))
                        .set(persons::name.eq(value))
                        .execute(conn)
                })?;
                tracing::debug!(backend = $tag, name = key, rows = updated, "update");
                Ok(())
            }

            fn delete(&mut self, key: &str) -> $crate::error::Result<()> {
                use $crate::adapter::outbound::relational::schema::persons;

                let conn = self.conn.as_mut().ok_or($crate::error::Error::Closed {
                    backend: $kind,
                })?;
                let deleted = conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    diesel::delete(persons::table.filter(persons::name.eq(key))).execute(conn)
                })?;
                tracing::debug!(backend = $tag, name = key, rows = deleted, "delete");
                Ok(())
            }

            fn select(&mut self, key: &str) -> $crate::error::Result<$crate::domain::Selection> {
                use $crate::adapter::outbound::relational::model::PersonRow;
                use $crate::adapter::outbound::relational::schema::persons;

                let conn = self.conn.as_mut().ok_or($crate::error::Error::Closed {
                    backend: $kind,
                })?;
                let rows: Vec<PersonRow> = persons::table
                    .filter(persons::name.eq(key))
                    .order(persons::id.asc())
                    .select(PersonRow::as_select())
                    .load(conn)?;
                tracing::debug!(backend = $tag, name = key, rows = rows.len(), "select");
                Ok($crate::adapter::outbound::relational::to_selection(rows))
            }

            fn close(&mut self) -> $crate::error::Result<()> {
                if self.conn.take().is_some() {
                    tracing::info!(backend = $tag, database = %self.database, "adapter closed");
                }
                Ok(())
            }
        }
    };
}

pub mod model;
pub mod schema;
pub mod sqlite;

#[cfg(feature = "mysql")]
pub mod mysql;

use diesel::backend::Backend;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};

use self::model::PersonRow;
use crate::domain::{Record, Selection};
use crate::error::{Error, Result};

pub use sqlite::SqliteAdapter;

#[cfg(feature = "mysql")]
pub use mysql::MysqlAdapter;

/// Provision the `persons` table if it does not exist yet.
///
/// # Errors
/// Returns an error if a migration fails to apply.
pub(crate) fn run_migrations<DB: Backend>(
    conn: &mut impl MigrationHarness<DB>,
    migrations: EmbeddedMigrations,
) -> Result<()> {
    conn.run_pending_migrations(migrations)
        .map_err(|e| Error::Migration(e.to_string()))?;
    Ok(())
}

pub(crate) fn to_selection(rows: Vec<PersonRow>) -> Selection {
    Selection::Records(rows.into_iter().map(Record::from).collect())
}
