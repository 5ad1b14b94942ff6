//! Command-line interface definitions.
//!
//! Defines the `unistore` CLI with `clap`: one subcommand per contract
//! operation, the scripted demo run, diagnostic checks and configuration
//! management.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::BackendKind;

/// One create/read/update/delete facade over six storage backends
#[derive(Parser, Debug)]
#[command(name = "unistore")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML); defaults apply when omitted
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the unistore CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a value under a key
    Insert(WriteArgs),

    /// Replace the value stored under a key
    Update(WriteArgs),

    /// Remove the value stored under a key
    Delete(KeyArgs),

    /// Look up the value stored under a key
    Select(KeyArgs),

    /// Run the scripted insert/select/update/delete sequence on each backend
    Demo(DemoArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `insert` and `update`.
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Backend to operate on
    pub backend: BackendKind,
    /// Key (the name itself on relational backends)
    pub key: String,
    /// Value to store
    pub value: String,
}

/// Arguments for `delete` and `select`.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Backend to operate on
    pub backend: BackendKind,
    /// Key (the name itself on relational backends)
    pub key: String,
}

/// Arguments for `demo`.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Comma-separated backends to run (default: every compiled backend)
    #[arg(long, value_delimiter = ',')]
    pub backends: Vec<BackendKind>,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Subcommands for `unistore check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// List the external servers the networked backends expect.
    Requirements,
    /// Connect to each backend and report whether it answered.
    Connection(BackendsArg),
}

/// Backend selection shared by checks.
#[derive(Args, Debug)]
pub struct BackendsArg {
    /// Comma-separated backends to check (default: every compiled backend)
    #[arg(long, value_delimiter = ',')]
    pub backends: Vec<BackendKind>,
}

/// Subcommands for `unistore config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration.
    Validate,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the template
    #[arg(default_value = "unistore.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
