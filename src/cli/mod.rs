//! Command-line interface
//!
//! - Argument parsing with clap
//! - Merging CLI overrides over file configuration
//! - `serve` and `migrate` command handlers

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, LogLevel};

use anyhow::Context;

use crate::config::Settings;
use crate::logger::init_logger;

/// Loads configuration, applies CLI overrides and validates the result.
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let merger = ConfigurationMerger::from_cli(cli).context("Configuration error")?;
    merger
        .merge_cli_args(cli)
        .context("Configuration merge error")
}

/// Installs the global tracing subscriber described by `settings`.
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    init_logger(settings.logger.clone()).context("Logger initialization error")
}

/// Entry point behind `main`.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;
    execute_command(&cli, settings).await
}
