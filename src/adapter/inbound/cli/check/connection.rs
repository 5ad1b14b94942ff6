//! Handler for `check connection`: connect to each backend and report failures.

use serde_json::json;
use tabled::{Table, Tabled};
use tracing::warn;

use crate::adapter::inbound::cli::{demo, output};
use crate::domain::BackendKind;
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;
use crate::infrastructure::factory;

#[derive(Tabled)]
struct ConnectionRow {
    #[tabled(rename = "Backend")]
    backend: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Detail")]
    detail: String,
}

/// Connect to each backend, close it again, and report the outcome.
pub fn execute_connection(config: &Config, backends: &[BackendKind]) -> Result<()> {
    let backends = demo::selected(backends);

    output::section("Connection Check");
    let mut rows = Vec::with_capacity(backends.len());
    for kind in &backends {
        let pb = output::spinner(&format!("Connecting to {kind}..."));
        let row = match factory::build_adapter(*kind, config) {
            Ok(mut adapter) => {
                if let Err(e) = adapter.close() {
                    warn!(backend = %kind, error = %e, "close failed");
                }
                output::spinner_success(&pb, &format!("{kind} connected"));
                ConnectionRow {
                    backend: kind.as_str(),
                    status: "ok",
                    detail: String::new(),
                }
            }
            Err(e) => {
                output::spinner_fail(&pb, &format!("{kind} failed"));
                ConnectionRow {
                    backend: kind.as_str(),
                    status: "failed",
                    detail: e.to_string(),
                }
            }
        };
        rows.push(row);
    }

    let failed = rows.iter().filter(|row| row.status != "ok").count();
    if output::is_json() {
        let results: Vec<_> = rows
            .iter()
            .map(|row| {
                json!({
                    "backend": row.backend,
                    "status": row.status,
                    "detail": row.detail,
                })
            })
            .collect();
        output::json_output(json!({ "type": "connections", "payload": results }));
    } else if failed > 0 {
        output::section("Failures");
        let failures: Vec<_> = rows.into_iter().filter(|row| row.status != "ok").collect();
        output::lines(&Table::new(failures).to_string());
    }

    if failed > 0 {
        return Err(Error::BackendsFailed {
            failed,
            total: backends.len(),
        });
    }
    output::success("All backends reachable");
    Ok(())
}
