//! Layered configuration loading
//!
//! Sources, lowest priority first:
//! 1. `default.toml` (required)
//! 2. `{environment}.toml`
//! 3. `local.toml`
//! 4. `PAGER_*` environment variables
//!
//! `PAGER_CONFIG_FILE` replaces the three file layers with a single file.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable selecting the configuration directory
pub const CONFIG_DIR_ENV: &str = "PAGER_CONFIG_DIR";

/// Environment variable selecting a single configuration file
pub const CONFIG_FILE_ENV: &str = "PAGER_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

const ENV_PREFIX: &str = "PAGER";

/// `PAGER_PAGINATION__MAX_SIZE` -> `pagination.max_size`
const ENV_SEPARATOR: &str = "__";

type Builder = ConfigBuilder<DefaultState>;

/// Where configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    /// `default.toml`, `{environment}.toml` and `local.toml` in a directory
    Layered(PathBuf),
    /// One explicit file
    Single(PathBuf),
}

/// Loads [`Settings`] from files and environment variables.
#[derive(Debug)]
pub struct ConfigLoader {
    source: Source,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `PAGER_CONFIG_DIR`, `PAGER_CONFIG_FILE` and
    /// `PAGER_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MutualExclusivityError`] when both
    /// `PAGER_CONFIG_DIR` and `PAGER_CONFIG_FILE` are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok();

        let source = match (config_dir, config_file) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::mutual_exclusivity(format!(
                    "{CONFIG_DIR_ENV} and {CONFIG_FILE_ENV} cannot both be set. \
                     Use {CONFIG_DIR_ENV} for layered configuration or \
                     {CONFIG_FILE_ENV} for a single configuration file."
                )));
            }
            (_, Some(file)) => Source::Single(PathBuf::from(file)),
            (Some(dir), None) => Source::Layered(PathBuf::from(dir)),
            (None, None) => Source::Layered(PathBuf::from(DEFAULT_CONFIG_DIR)),
        };

        Ok(Self {
            source,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Loader reading one explicit file, as selected by `--config`.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Single(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Overrides the environment picked up from `PAGER_APP_ENV`.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Configuration directory, if loading in layered mode
    pub fn config_dir(&self) -> Option<&Path> {
        match &self.source {
            Source::Layered(dir) => Some(dir),
            Source::Single(_) => None,
        }
    }

    /// Single configuration file, if one was selected
    pub fn config_file(&self) -> Option<&Path> {
        match &self.source {
            Source::Single(file) => Some(file),
            Source::Layered(_) => None,
        }
    }

    /// Load and validate settings from every source.
    ///
    /// # Errors
    ///
    /// Fails when a required file is missing, parsing fails or the merged
    /// settings do not validate.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings: Settings = self.build_config()?.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = match &self.source {
            Source::Single(file) => add_file(Config::builder(), file, true)?,
            Source::Layered(dir) => {
                let builder = add_file(Config::builder(), &dir.join("default.toml"), true)?;
                let env_file = dir.join(format!("{}.toml", self.environment.as_str()));
                let builder = add_file(builder, &env_file, false)?;
                add_file(builder, &dir.join("local.toml"), false)?
            }
        };

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()
            .map_err(ConfigError::from)
    }
}

fn add_file(builder: Builder, path: &Path, required: bool) -> Result<Builder, ConfigError> {
    if required && !path.exists() {
        return Err(ConfigError::file_not_found(format!(
            "Required configuration file not found: {}",
            path.display()
        )));
    }

    let Some(name) = path.to_str() else {
        return Err(ConfigError::file_not_found(format!(
            "Configuration path is not valid UTF-8: {}",
            path.display()
        )));
    };

    Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
}
