//! Handlers for the single-operation commands: `insert`, `update`,
//! `delete` and `select`.
//!
//! Each call builds the adapter, runs one operation and closes it again.

use tracing::warn;

use crate::adapter::inbound::cli::command::{KeyArgs, WriteArgs};
use crate::adapter::inbound::cli::output;
use crate::domain::BackendKind;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory;
use crate::port::Adapter;

/// Build the adapter, run `op`, and close the adapter whatever `op` returned.
fn with_adapter<T>(
    kind: BackendKind,
    config: &Config,
    op: impl FnOnce(&mut dyn Adapter) -> Result<T>,
) -> Result<T> {
    let mut adapter = factory::build_adapter(kind, config)?;
    let result = op(adapter.as_mut());
    if let Err(e) = adapter.close() {
        warn!(backend = %kind, error = %e, "close failed");
    }
    result
}

fn hint_if_ephemeral(kind: BackendKind, config: &Config) {
    if kind == BackendKind::Sqlite && config.sqlite.is_in_memory() {
        output::hint("sqlite is in-memory; set [sqlite] database to keep data between runs");
    }
}

/// Execute `insert <backend> <key> <value>`.
pub fn execute_insert(config: &Config, args: &WriteArgs) -> Result<()> {
    with_adapter(args.backend, config, |adapter| {
        adapter.insert(&args.key, &args.value)
    })?;
    output::done(args.backend, "insert", &[&args.key, &args.value]);
    hint_if_ephemeral(args.backend, config);
    Ok(())
}

/// Execute `update <backend> <key> <value>`.
pub fn execute_update(config: &Config, args: &WriteArgs) -> Result<()> {
    with_adapter(args.backend, config, |adapter| {
        adapter.update(&args.key, &args.value)
    })?;
    output::done(args.backend, "update", &[&args.key, &args.value]);
    hint_if_ephemeral(args.backend, config);
    Ok(())
}

/// Execute `delete <backend> <key>`.
pub fn execute_delete(config: &Config, args: &KeyArgs) -> Result<()> {
    with_adapter(args.backend, config, |adapter| adapter.delete(&args.key))?;
    output::done(args.backend, "delete", &[&args.key]);
    Ok(())
}

/// Execute `select <backend> <key>`.
pub fn execute_select(config: &Config, args: &KeyArgs) -> Result<()> {
    let selection = with_adapter(args.backend, config, |adapter| adapter.select(&args.key))?;
    output::step(args.backend, "select", &[&args.key], &selection);
    Ok(())
}
