//! Document-store adapter (MongoDB, blocking driver).
//!
//! Documents carry an explicit caller-supplied `key` next to the `name`.
//! The store does not enforce uniqueness on `key`: update and delete touch
//! the first matching document, select returns every match.

use mongodb::bson::doc;
use mongodb::sync::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{BackendKind, Record, Selection};
use crate::error::{Error, Result};
use crate::infrastructure::config::backend::MongoConfig;
use crate::port::Adapter;

/// Stored document shape. The server-assigned `_id` is ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersonDocument {
    key: String,
    name: String,
}

impl From<PersonDocument> for Record {
    fn from(document: PersonDocument) -> Self {
        Record::Document {
            key: document.key,
            name: document.name,
        }
    }
}

/// MongoDB-backed adapter bound to one collection.
pub struct MongoAdapter {
    /// The collection holds its own client handle, so both are dropped
    /// together on close. `None` once closed.
    handle: Option<(Client, Collection<PersonDocument>)>,
}

impl MongoAdapter {
    /// Connect, verify the server answers, and bind the configured collection.
    ///
    /// When `clear_on_connect` is set every document already in the
    /// collection is deleted.
    ///
    /// # Errors
    /// Returns an error if the server is unreachable or a command fails.
    pub fn connect(config: &MongoConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri)?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).run()?;

        let collection = database.collection::<PersonDocument>(&config.collection);
        if config.clear_on_connect {
            let cleared = collection.delete_many(doc! {}).run()?;
            warn!(
                database = %config.database,
                collection = %config.collection,
                deleted = cleared.deleted_count,
                "cleared collection on connect"
            );
        }
        info!(
            database = %config.database,
            collection = %config.collection,
            "mongo adapter connected"
        );

        Ok(Self::from_parts(client, collection))
    }

    fn from_parts(client: Client, collection: Collection<PersonDocument>) -> Self {
        Self {
            handle: Some((client, collection)),
        }
    }

    fn collection(&self) -> Result<&Collection<PersonDocument>> {
        self.handle
            .as_ref()
            .map(|(_, collection)| collection)
            .ok_or(Error::Closed {
                backend: BackendKind::Mongo,
            })
    }
}

impl Adapter for MongoAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::Mongo
    }

    fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        let document = PersonDocument {
            key: key.to_string(),
            name: value.to_string(),
        };
        self.collection()?.insert_one(&document).run()?;
        debug!(backend = "mongo", key, "insert");
        Ok(())
    }

    fn update(&mut self, key: &str, value: &str) -> Result<()> {
        let result = self
            .collection()?
            .update_one(doc! { "key": key }, doc! { "$set": { "name": value } })
            .run()?;
        debug!(
            backend = "mongo",
            key,
            matched = result.matched_count,
            "update"
        );
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let result = self.collection()?.delete_one(doc! { "key": key }).run()?;
        debug!(
            backend = "mongo",
            key,
            deleted = result.deleted_count,
            "delete"
        );
        Ok(())
    }

    fn select(&mut self, key: &str) -> Result<Selection> {
        let cursor = self.collection()?.find(doc! { "key": key }).run()?;
        let records = cursor
            .map(|document| document.map(Record::from))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(backend = "mongo", key, documents = records.len(), "select");
        Ok(Selection::Records(records))
    }

    fn close(&mut self) -> Result<()> {
        if let Some((client, collection)) = self.handle.take() {
            drop(collection);
            // Stops the monitors and closes pooled connections.
            client.shutdown().run();
            info!("mongo adapter closed");
        }
        Ok(())
    }
}
