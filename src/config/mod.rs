//! Configuration management
//!
//! Settings are merged from TOML files and `PAGER_*` environment variables,
//! lowest priority first:
//! 1. `default.toml`
//! 2. `{environment}.toml`, selected by `PAGER_APP_ENV`
//! 3. `local.toml` (not committed to version control)
//! 4. `PAGER_*` environment variables, `__` separating nested keys

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ApplicationConfig, DatabaseConfig, ServerConfig, Settings};

/// Serializes tests that read or write `PAGER_*` process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
