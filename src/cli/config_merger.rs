//! Merges CLI overrides over file-based configuration.
//!
//! Precedence, highest first: subcommand flags, global flags, environment
//! variables, configuration files.

use std::path::Path;

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

/// Holds the file configuration that CLI arguments are applied to.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base configuration the way `cli` asks for.
    ///
    /// `--config` selects a single file, otherwise the layered loader reads
    /// `PAGER_CONFIG_DIR`/`PAGER_CONFIG_FILE`. `--env` overrides
    /// `PAGER_APP_ENV` in both cases.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config.as_deref() {
            Some(path) => Self::file_loader(path)?,
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.with_environment(env),
            None => loader,
        };

        tracing::debug!(
            environment = loader.environment().as_str(),
            config_dir = ?loader.config_dir(),
            config_file = ?loader.config_file(),
            "Loading configuration"
        );
        Ok(Self::new(loader.load()?))
    }

    fn file_loader(path: &Path) -> Result<ConfigLoader, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::validation(
                "config_file",
                format!("Configuration file does not exist: '{}'", path.display()),
            ));
        }
        Ok(ConfigLoader::from_file(path))
    }

    /// Applies `cli` over the base configuration and validates the result.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Commands::Serve {
            host,
            port,
            log_level,
            ..
        } = cli.command()
        {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn base() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/pager".to_string();
        config
    }

    fn merger() -> ConfigurationMerger {
        ConfigurationMerger::new(base())
    }

    fn merge(args: &[&str]) -> Settings {
        let cli = Cli::try_parse_from(args).unwrap();
        merger().merge_cli_args(&cli).unwrap()
    }

    #[test]
    fn test_no_flags_keeps_base() {
        let merged = merge(&["pager-rs"]);
        assert_eq!(merged, base());
    }

    #[test]
    fn test_verbose_and_quiet() {
        assert_eq!(merge(&["pager-rs", "--verbose"]).logger.level, "debug");
        assert_eq!(merge(&["pager-rs", "--quiet"]).logger.level, "error");
    }

    #[test]
    fn test_serve_overrides() {
        let merged = merge(&["pager-rs", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        assert_eq!(merged.server.host, "0.0.0.0");
        assert_eq!(merged.server.port, 8080);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merged = merge(&["pager-rs", "--verbose", "serve", "--log-level", "warn"]);
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_merge_validates_result() {
        let cli = Cli::try_parse_from(["pager-rs"]).unwrap();
        let result = ConfigurationMerger::new(Settings::default()).merge_cli_args(&cli);
        match result {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "database.url"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_cli_reads_config_file() {
        let _lock = crate::config::ENV_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pager.toml");
        std::fs::write(
            &path,
            "[database]\nurl = \"postgres://localhost/pager\"\n\n[pagination]\nmax_size = 30\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from(["pager-rs", "--config", path.to_str().unwrap()]).unwrap();
        let merged = ConfigurationMerger::from_cli(&cli)
            .and_then(|merger| merger.merge_cli_args(&cli))
            .unwrap();
        assert_eq!(merged.pagination.max_size, 30);
    }
}
