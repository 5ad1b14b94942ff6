//! Handler for `check requirements`: list the servers networked backends expect.

use crate::adapter::inbound::cli::output;
use crate::domain::BackendKind;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory;

fn server_label(kind: BackendKind) -> &'static str {
    match kind {
        BackendKind::Mysql => "MySQL",
        BackendKind::Mongo => "MongoDB",
        BackendKind::Memcached => "Memcached",
        other => other.as_str(),
    }
}

fn endpoint(kind: BackendKind, config: &Config) -> String {
    match kind {
        BackendKind::Mysql => format!("{}:{}", config.mysql.host, config.mysql.port),
        BackendKind::Mongo => config.mongo.uri.clone(),
        BackendKind::Memcached => config.memcached.endpoints.join(", "),
        BackendKind::Sqlite => config.sqlite.database.clone(),
        BackendKind::ByteStore => config.bytestore.path.display().to_string(),
        BackendKind::ObjectFile => config.object_file.path.display().to_string(),
    }
}

/// List the servers the networked backends expect to find running.
pub fn execute_requirements(config: &Config) -> Result<()> {
    output::section("External Servers");
    output::note("Start these before using the networked backends:");

    let (networked, local): (Vec<_>, Vec<_>) = BackendKind::ALL
        .into_iter()
        .partition(|kind| kind.is_networked());

    for kind in networked {
        let endpoint = endpoint(kind, config);
        if factory::is_compiled(kind) {
            output::field(server_label(kind), endpoint);
        } else {
            output::field(
                server_label(kind),
                format!("{endpoint} {}", output::muted("(not compiled in)")),
            );
        }
    }

    output::section("Local Stores");
    for kind in local {
        output::field(kind.as_str(), endpoint(kind, config));
    }
    output::hint("local stores need no server");
    Ok(())
}
