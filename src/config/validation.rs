//! Range and format checks run after the settings are loaded

use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, ServerConfig, Settings};
use crate::logger::LoggerConfig;
use crate::pagination::PaginationConfig;

fn ensure(
    ok: bool,
    field: &'static str,
    message: impl FnOnce() -> String,
) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::validation(field, message()))
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(self.port != 0, "server.port", || {
            "Port must be between 1 and 65535.".to_string()
        })?;
        ensure(self.request_timeout > 0, "server.request_timeout", || {
            "Request timeout must be greater than 0 seconds.".to_string()
        })
    }
}

impl DatabaseConfig {
    /// Only PostgreSQL URLs are accepted; the pool is built on `AsyncPgConnection`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(!self.url.trim().is_empty(), "database.url", || {
            "Database URL is required.".to_string()
        })?;
        ensure(
            ["postgres://", "postgresql://"]
                .iter()
                .any(|scheme| self.url.starts_with(scheme)),
            "database.url",
            || "Expected postgres://[user[:password]@]host[:port]/database".to_string(),
        )?;
        ensure(self.max_connections > 0, "database.max_connections", || {
            "Max connections must be greater than 0.".to_string()
        })?;
        ensure(
            (1..=self.max_connections).contains(&self.min_connections),
            "database.min_connections",
            || {
                format!(
                    "Min connections ({}) must be between 1 and max connections ({}).",
                    self.min_connections, self.max_connections
                )
            },
        )
    }
}

fn validate_logger(logger: &LoggerConfig) -> Result<(), ConfigError> {
    if let Err(e) = logger.parse_level() {
        return Err(ConfigError::validation("logger.level", e.to_string()));
    }
    logger
        .validate()
        .map_err(|e| ConfigError::validation("logger", format!("{e:#}")))
}

impl PaginationConfig {
    /// `max_size` of 0 selects the default maximum. A maximum below the
    /// minimum is accepted with a warning and wins at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(self.min_size >= 1, "pagination.min_size", || {
            "Min size must be at least 1.".to_string()
        })?;
        ensure(self.max_size >= 0, "pagination.max_size", || {
            "Max size must be 0 (default maximum) or a positive number.".to_string()
        })?;

        if self.effective_max_size() < self.min_size {
            tracing::warn!(
                min_size = self.min_size,
                max_size = self.effective_max_size(),
                "Pagination max size is below min size; page sizes will be capped at max size"
            );
        }

        Ok(())
    }
}

impl Settings {
    /// Returns the first failing section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        validate_logger(&self.logger)?;
        self.pagination.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://pager@localhost/pager".to_string();
        settings
    }

    #[track_caller]
    fn assert_rejected(field: &str, tweak: impl FnOnce(&mut Settings)) {
        let mut settings = valid();
        tweak(&mut settings);
        match settings.validate() {
            Err(err) => assert_eq!(err.key(), field, "{err}"),
            Ok(()) => panic!("expected {field} to be rejected"),
        }
    }

    #[test]
    fn test_defaults_with_url_are_valid() {
        assert!(valid().validate().is_ok());
        assert_rejected("database.url", |s| s.database.url.clear());
    }

    #[test]
    fn test_server_rules() {
        assert_rejected("server.port", |s| s.server.port = 0);
        assert_rejected("server.request_timeout", |s| s.server.request_timeout = 0);

        let mut settings = valid();
        settings.server.port = u16::MAX;
        settings.server.request_timeout = 1;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_database_rules() {
        assert_rejected("database.url", |s| s.database.url = "  ".to_string());
        assert_rejected("database.url", |s| {
            s.database.url = "mysql://root@localhost/pager".to_string()
        });
        assert_rejected("database.max_connections", |s| s.database.max_connections = 0);
        assert_rejected("database.min_connections", |s| s.database.min_connections = 0);
        assert_rejected("database.min_connections", |s| {
            s.database.min_connections = 11;
            s.database.max_connections = 10;
        });

        let mut settings = valid();
        settings.database.url = "postgresql://pager@db:5432/pager".to_string();
        settings.database.min_connections = 10;
        assert!(settings.database.validate().is_ok());
    }

    #[test]
    fn test_logger_rules() {
        assert_rejected("logger.level", |s| s.logger.level = "loud".to_string());
        assert_rejected("logger", |s| s.logger.console.enabled = false);
        assert_rejected("logger", |s| {
            s.logger.file.enabled = true;
            s.logger.file.path = Default::default();
        });

        let mut settings = valid();
        settings.logger.level = "WARN".to_string();
        settings.logger.console.enabled = false;
        settings.logger.file.enabled = true;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_pagination_rules() {
        assert_rejected("pagination.min_size", |s| s.pagination.min_size = 0);
        assert_rejected("pagination.max_size", |s| s.pagination.max_size = -1);

        // max below min only warns
        let mut settings = valid();
        settings.pagination = PaginationConfig::new(20, 5);
        assert!(settings.validate().is_ok());
        settings.pagination = PaginationConfig::new(1, 0);
        assert!(settings.validate().is_ok());
    }
}
