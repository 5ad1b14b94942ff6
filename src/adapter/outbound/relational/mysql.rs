//! Networked relational adapter (MySQL).

use diesel::prelude::*;
use diesel::MysqlConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use tracing::info;

use super::run_migrations;
use crate::domain::BackendKind;
use crate::error::Result;
use crate::infrastructure::config::backend::MysqlConfig;

/// Embedded migrations for the MySQL dialect.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/mysql");

/// MySQL-backed adapter owning a single connection.
pub struct MysqlAdapter {
    /// `None` once the adapter has been closed.
    conn: Option<MysqlConnection>,
    database: String,
}

impl MysqlAdapter {
    /// Create the database if needed, connect to it and provision `persons`.
    ///
    /// # Errors
    /// Returns an error if the server is unreachable, the credentials are
    /// rejected, or provisioning fails.
    pub fn connect(config: &MysqlConfig) -> Result<Self> {
        create_database_if_missing(config)?;

        let mut conn = MysqlConnection::establish(config.database_url()?.as_str())?;
        run_migrations(&mut conn, MIGRATIONS)?;
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "mysql adapter connected"
        );

        Ok(Self {
            conn: Some(conn),
            database: config.database.clone(),
        })
    }
}

/// Uses a short-lived server-level connection, released before returning.
fn create_database_if_missing(config: &MysqlConfig) -> Result<()> {
    let mut conn = MysqlConnection::establish(config.server_url()?.as_str())?;
    // Identifiers cannot be bound; the name is validated as [A-Za-z0-9_]+ on load.
    diesel::sql_query(format!(
        "CREATE DATABASE IF NOT EXISTS `{}`",
        config.database
    ))
    .execute(&mut conn)?;
    Ok(())
}

name_keyed_adapter!(MysqlAdapter, BackendKind::Mysql, "mysql");
