//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::MYSQL_PASSWORD_ENV;
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../unistore.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your endpoints", path.display()));
    output::note(&format!("2. Set {MYSQL_PASSWORD_ENV} if MySQL needs a password"));
    output::note(&format!(
        "3. Run: unistore --config {} check connection",
        path.display()
    ));
    Ok(())
}

fn password_status(config: &Config) -> &'static str {
    if config.mysql.password.is_empty() {
        "(not set)"
    } else {
        "********"
    }
}

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    if output::is_json() {
        let mut payload = serde_json::to_value(config)?;
        payload["mysql"]["password_set"] = json!(!config.mysql.password.is_empty());
        output::json_output(json!({ "type": "config", "payload": payload }));
        return Ok(());
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("SQLite");
    output::field("Database", &config.sqlite.database);

    output::section("MySQL");
    output::field("Host", &config.mysql.host);
    output::field("Port", config.mysql.port);
    output::field("User", &config.mysql.user);
    output::field("Password", password_status(config));
    output::field("Database", &config.mysql.database);

    output::section("MongoDB");
    output::field("URI", &config.mongo.uri);
    output::field("Database", &config.mongo.database);
    output::field("Collection", &config.mongo.collection);
    output::field("Clear on open", config.mongo.clear_on_connect);

    output::section("Byte Store");
    output::field("Path", config.bytestore.path.display());

    output::section("Object File");
    output::field("Path", config.object_file.path.display());

    output::section("Memcached");
    output::field("Endpoints", config.memcached.endpoints.join(", "));
    output::field("TTL", format!("{}s", config.memcached.ttl_secs));
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(config: &Config, path: Option<&Path>) -> Result<()> {
    config.validate()?;
    output::section("Configuration Check");
    match path {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "(built-in defaults)"),
    }
    output::success("Configuration is valid");
    Ok(())
}
