use clap::Parser;
use tracing::info;

use unistore::adapter::inbound::cli::command::{Cli, ColorChoice};
use unistore::adapter::inbound::cli::{dispatch, output};
use unistore::error::Result;
use unistore::infrastructure::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));
    let color = apply_color(&cli.color);

    if let Err(e) = run(&cli, color) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, color: bool) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    if let Some(level) = level_override(cli.quiet, cli.verbose) {
        config.logging.level = level.to_string();
    }
    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "unistore starting");

    dispatch(cli, &config, color)
}

/// Force or disable colors. Returns whether colors may be used.
///
/// In `auto` mode owo-colors decides per stream (terminal, `NO_COLOR`).
fn apply_color(choice: &ColorChoice) -> bool {
    match choice {
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none(),
        ColorChoice::Always => {
            owo_colors::set_override(true);
            true
        }
        ColorChoice::Never => {
            owo_colors::set_override(false);
            false
        }
    }
}

/// `-q` and `-v` take precedence over the configured log level.
///
/// `RUST_LOG` still wins over both.
fn level_override(quiet: bool, verbose: u8) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    }
}
