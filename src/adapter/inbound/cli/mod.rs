//! CLI module graph and command dispatch.

pub mod banner;
pub mod check;
pub mod command;
pub mod config;
pub mod crud;
pub mod demo;
pub mod output;

use crate::error::Result;
use crate::infrastructure::config::Config;
use command::{CheckCommand, Cli, Commands, ConfigCommand};

/// Run the parsed command against the loaded configuration.
///
/// `color` is false when `--color never` was given or colors are
/// otherwise disabled.
pub fn dispatch(cli: &Cli, config: &Config, color: bool) -> Result<()> {
    match &cli.command {
        Commands::Insert(args) => crud::execute_insert(config, args),
        Commands::Update(args) => crud::execute_update(config, args),
        Commands::Delete(args) => crud::execute_delete(config, args),
        Commands::Select(args) => crud::execute_select(config, args),
        Commands::Demo(args) => demo::execute(config, args, color),
        Commands::Check(CheckCommand::Requirements) => {
            check::requirements::execute_requirements(config)
        }
        Commands::Check(CheckCommand::Connection(args)) => {
            check::connection::execute_connection(config, &args.backends)
        }
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show) => config::execute_show(config),
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(config, cli.config.as_deref())
        }
    }
}
