//! CLI argument parsing with clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Environment;

/// Paginated listing API server
#[derive(Parser, Debug)]
#[command(name = "pager-rs")]
#[command(about = "Paginated listing API server")]
#[command(long_about = "
pager-rs serves paginated listings over HTTP, backed by PostgreSQL.
Every listing runs a count query followed by a windowed fetch and answers
with a stable pagination envelope.

EXAMPLES:
    # Start the server with default configuration
    pager-rs serve

    # Start server on custom host and port
    pager-rs serve --host 0.0.0.0 --port 8080

    # Use a single configuration file
    pager-rs --config /etc/pager/pager.toml serve

    # Check configuration without starting the server
    pager-rs serve --dry-run

    # Preview pending migrations
    pager-rs migrate --dry-run

    # Rollback the last 2 migrations
    pager-rs migrate --rollback 2
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute, `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Replaces the layered `config/` directory with a single TOML file.
    /// `PAGER_*` environment variables still apply on top.
    #[arg(
        short,
        long,
        value_name = "FILE",
        value_parser = super::validation::validate_config_file_path
    )]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `config/{environment}.toml` layer is loaded.
    #[arg(short, long, value_enum, ignore_case = true)]
    pub env: Option<Environment>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   pager-rs serve                            # Start with defaults
    ///   pager-rs serve --host 0.0.0.0 --port 80   # Bind to all interfaces on port 80
    ///   pager-rs serve --dry-run                  # Validate config without starting
    Serve {
        /// Host address to bind to
        #[arg(
            long,
            value_name = "ADDRESS",
            value_parser = super::validation::validate_host_address
        )]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override, wins over --verbose and --quiet
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Database migration operations
    ///
    /// Examples:
    ///   pager-rs migrate                    # Apply all pending migrations
    ///   pager-rs migrate --dry-run          # Show pending migrations without applying
    ///   pager-rs migrate --rollback 3       # Rollback the last 3 migrations
    Migrate {
        /// Show pending migrations without applying
        #[arg(long, conflicts_with = "rollback")]
        dry_run: bool,

        /// Number of migrations to rollback (1 to 100)
        #[arg(
            long,
            value_name = "STEPS",
            value_parser = super::validation::validate_rollback_steps
        )]
        rollback: Option<u32>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: None,
            port: None,
            log_level: None,
            dry_run: false,
        }
    }
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// The subcommand to run, defaulting to `serve`.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}
