//! Deployment environment selecting the `{environment}.toml` layer

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::config::error::ConfigError;

/// Shared by `--env` and `PAGER_APP_ENV`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    #[default]
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl Environment {
    pub const ENV_VAR: &'static str = "PAGER_APP_ENV";

    /// `Development` when `PAGER_APP_ENV` is unset or unrecognized.
    pub fn from_env() -> Self {
        let Ok(raw) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };
        raw.parse().unwrap_or_else(|e: ConfigError| {
            tracing::warn!(error = %e, "Falling back to development environment");
            Self::default()
        })
    }

    /// Name of the environment file layer, without `.toml`
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true).map_err(|_| {
            ConfigError::EnvVarError(format!(
                "Invalid environment '{s}'. \
                 Valid values are: development, test, staging, production"
            ))
        })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_aliases() {
        for (input, expected) in [
            ("dev", Environment::Development),
            ("Stage", Environment::Staging),
            (" PROD ", Environment::Production),
            ("test", Environment::Test),
        ] {
            assert_eq!(input.parse::<Environment>().unwrap(), expected);
        }
        for env in Environment::value_variants() {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), *env);
        }
    }

    #[test]
    fn test_rejects_unknown_names() {
        let err = "qa".parse::<Environment>().unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarError(msg) if msg.contains("'qa'")));
    }

    #[test]
    fn test_from_env_falls_back_to_development() {
        let _guard = crate::config::ENV_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let previous = std::env::var(Environment::ENV_VAR).ok();

        unsafe { std::env::set_var(Environment::ENV_VAR, "stage") };
        assert_eq!(Environment::from_env(), Environment::Staging);
        unsafe { std::env::set_var(Environment::ENV_VAR, "nowhere") };
        assert_eq!(Environment::from_env(), Environment::Development);

        match previous {
            Some(value) => unsafe { std::env::set_var(Environment::ENV_VAR, value) },
            None => unsafe { std::env::remove_var(Environment::ENV_VAR) },
        }
    }
}
