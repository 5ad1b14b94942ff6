//! Expiring-cache adapter (Memcached).
//!
//! Every write carries the configured time-to-live and resets it. A select
//! that finds nothing cannot tell whether the key was never set, expired, or
//! was evicted by the server; all three read as absent.

use memcache::Client;
use tracing::{debug, info};

use crate::domain::{BackendKind, Selection};
use crate::error::{Error, Result};
use crate::infrastructure::config::backend::MemcachedConfig;
use crate::port::Adapter;

/// Memcached-backed adapter.
pub struct MemcachedAdapter {
    /// `None` once the adapter has been closed.
    client: Option<Client>,
    ttl_secs: u32,
}

impl MemcachedAdapter {
    /// Connect to every configured endpoint and check that the servers answer.
    ///
    /// # Errors
    /// Returns an error if any endpoint is unreachable.
    pub fn connect(config: &MemcachedConfig) -> Result<Self> {
        let client = Client::connect(config.urls())?;
        let versions = client.version()?;
        info!(
            servers = versions.len(),
            ttl_secs = config.ttl_secs,
            "memcached adapter connected"
        );

        Ok(Self {
            client: Some(client),
            ttl_secs: config.ttl_secs,
        })
    }

    fn client(&self) -> Result<&Client> {
        self.client.as_ref().ok_or(Error::Closed {
            backend: BackendKind::Memcached,
        })
    }
}

impl Adapter for MemcachedAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::Memcached
    }

    fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        self.client()?.set(key, value, self.ttl_secs)?;
        debug!(backend = "memcached", key, ttl_secs = self.ttl_secs, "set");
        Ok(())
    }

    fn update(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let existed = self.client()?.delete(key)?;
        debug!(backend = "memcached", key, existed, "delete");
        Ok(())
    }

    fn select(&mut self, key: &str) -> Result<Selection> {
        let value: Option<String> = self.client()?.get(key)?;
        debug!(backend = "memcached", key, found = value.is_some(), "get");
        Ok(Selection::Value(value))
    }

    fn close(&mut self) -> Result<()> {
        if self.client.take().is_some() {
            info!("memcached adapter closed");
        }
        Ok(())
    }
}
