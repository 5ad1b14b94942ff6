//! Handler for `demo`: the scripted run across every backend.
//!
//! Name-keyed backends store `Mike` and rename it to `Micheal`; key-keyed
//! backends do the same under the key `user1`. Every select result is
//! printed. A backend that fails to connect or errors mid-run is reported
//! and the run moves on to the next one.

use tracing::{info, warn};

use crate::adapter::inbound::cli::command::DemoArgs;
use crate::adapter::inbound::cli::{banner, output};
use crate::domain::{BackendKind, Keying};
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;
use crate::infrastructure::factory;
use crate::port::Adapter;

const NAME: &str = "Mike";
const RENAMED: &str = "Micheal";
const USER_KEY: &str = "user1";

/// Backends to run: the explicit list, or every compiled backend.
pub(crate) fn selected(backends: &[BackendKind]) -> Vec<BackendKind> {
    if backends.is_empty() {
        BackendKind::ALL
            .into_iter()
            .filter(|kind| factory::is_compiled(*kind))
            .collect()
    } else {
        backends.to_vec()
    }
}

/// Execute `demo`. `color` is false when colors were turned off.
pub fn execute(config: &Config, args: &DemoArgs, color: bool) -> Result<()> {
    let mut config = config.clone();
    // The scripted run expects an empty collection.
    config.mongo.clear_on_connect = true;

    if !args.no_banner && !output::is_json() && !output::is_quiet() {
        banner::print_banner(color);
    } else {
        output::header(env!("CARGO_PKG_VERSION"));
    }

    let backends = selected(&args.backends);
    if backends.contains(&BackendKind::Mongo) {
        output::warning(&format!(
            "mongo collection '{}' is cleared before the run",
            config.mongo.collection
        ));
    }
    let mut failed = 0;
    for kind in &backends {
        output::section(kind.as_str());
        if let Err(e) = run_backend(*kind, &config) {
            warn!(backend = %kind, error = %e, "demo step failed");
            output::error(&format!("{kind}: {e}"));
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(Error::BackendsFailed {
            failed,
            total: backends.len(),
        });
    }
    output::section("Done");
    output::success(&format!("{} backends completed", backends.len()));
    if backends.iter().any(|kind| kind.is_expiring()) {
        output::note(&format!(
            "memcached values expire after {}s even without a delete",
            config.memcached.ttl_secs
        ));
    }
    Ok(())
}

fn run_backend(kind: BackendKind, config: &Config) -> Result<()> {
    let mut adapter = factory::build_adapter(kind, config)?;
    let result = run_scenario(adapter.as_mut());
    let closed = adapter.close();
    result?;
    closed?;
    info!(backend = %kind, "demo completed");
    Ok(())
}

/// insert, select, update, select, delete, select.
pub(crate) fn run_scenario(adapter: &mut dyn Adapter) -> Result<()> {
    let kind = adapter.kind();
    let key = match kind.keying() {
        Keying::ByName => NAME,
        Keying::ByKey => USER_KEY,
    };

    adapter.insert(key, NAME)?;
    output::done(kind, "insert", &[key, NAME]);

    let lookup = kind.lookup_key(key, NAME);
    let selection = adapter.select(lookup)?;
    output::step(kind, "select", &[lookup], &selection);

    adapter.update(lookup, RENAMED)?;
    output::done(kind, "update", &[lookup, RENAMED]);

    let lookup = kind.lookup_key(key, RENAMED);
    let selection = adapter.select(lookup)?;
    output::step(kind, "select", &[lookup], &selection);

    adapter.delete(lookup)?;
    output::done(kind, "delete", &[lookup]);

    let selection = adapter.select(lookup)?;
    output::step(kind, "select", &[lookup], &selection);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_selects_compiled_backends() {
        let backends = selected(&[]);
        assert!(backends.contains(&BackendKind::Sqlite));
        assert!(backends.contains(&BackendKind::ByteStore));
        assert!(backends.contains(&BackendKind::ObjectFile));
        assert!(backends.iter().all(|kind| factory::is_compiled(*kind)));
    }

    #[test]
    fn explicit_list_is_kept_in_order() {
        let backends = selected(&[BackendKind::ObjectFile, BackendKind::Sqlite]);
        assert_eq!(backends, vec![BackendKind::ObjectFile, BackendKind::Sqlite]);
    }

    #[test]
    fn scenario_leaves_local_backends_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.bytestore.path = dir.path().join("cache.redb");
        config.object_file.path = dir.path().join("data.bin");

        for kind in [
            BackendKind::Sqlite,
            BackendKind::ByteStore,
            BackendKind::ObjectFile,
        ] {
            let mut adapter = factory::build_adapter(kind, &config).unwrap();
            run_scenario(adapter.as_mut()).unwrap();
            let lookup = kind.lookup_key(USER_KEY, RENAMED);
            assert!(adapter.select(lookup).unwrap().is_empty(), "{kind}");
            adapter.close().unwrap();
        }
    }
}
