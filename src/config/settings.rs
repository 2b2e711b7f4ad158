//! Settings tree deserialized from the layered configuration sources.
//!
//! Every section falls back to its `Default`, so an empty file is a valid
//! configuration apart from `database.url`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logger::LoggerConfig;
use crate::pagination::PaginationConfig;

/// Application name and version reported in logs and `/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "pager-rs".to_string(),
            version: crate::pkg_version().to_string(),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a single request, in seconds
    pub request_timeout: u64,
}

impl ServerConfig {
    /// `host:port` for the listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout: 30,
        }
    }
}

/// PostgreSQL pool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection
    pub connection_timeout: u64,
    /// Run pending migrations before the server starts listening
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connection_timeout: 30,
            auto_migrate: false,
        }
    }
}

/// Complete application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logger: LoggerConfig,
    /// Listing page size limits
    pub pagination: PaginationConfig,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use proptest::prelude::*;

    use super::*;
    use crate::logger::{ConsoleConfig, FileConfig, LogFormat};

    fn arb_logger() -> impl Strategy<Value = LoggerConfig> {
        (
            "(trace|debug|info|warn|error)",
            any::<(bool, bool, bool, bool)>(),
            "logs/[a-z]{1,8}\\.log",
            prop_oneof![
                Just(LogFormat::Full),
                Just(LogFormat::Compact),
                Just(LogFormat::Json)
            ],
        )
            .prop_map(
                |(level, (console, colored, file, append), path, format)| LoggerConfig {
                    level,
                    console: ConsoleConfig {
                        enabled: console,
                        colored,
                    },
                    file: FileConfig {
                        enabled: file,
                        path: PathBuf::from(path),
                        append,
                        format,
                    },
                },
            )
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            ("(127\\.0\\.0\\.1|0\\.0\\.0\\.0|localhost)", 1u16..=65535, 1u64..3600),
            ("postgres://[a-z]{1,8}@localhost/[a-z]{1,8}", 1u32..10, any::<bool>()),
            arb_logger(),
            (1i64..50, 0i64..500, any::<bool>()),
        )
            .prop_map(
                |((host, port, request_timeout), (url, min, auto_migrate), logger, page)| {
                    Settings {
                        application: ApplicationConfig::default(),
                        server: ServerConfig {
                            host,
                            port,
                            request_timeout,
                        },
                        database: DatabaseConfig {
                            url,
                            max_connections: min * 2,
                            min_connections: min,
                            connection_timeout: 5,
                            auto_migrate,
                        },
                        logger,
                        pagination: PaginationConfig {
                            min_size: page.0,
                            max_size: page.1,
                            debug: page.2,
                        },
                    }
                },
            )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_settings_survive_toml(settings in arb_settings()) {
            let text = toml::to_string(&settings).unwrap();
            let parsed: Settings = toml::from_str(&text).unwrap();
            prop_assert_eq!(settings, parsed);
        }
    }

    #[test]
    fn test_empty_document_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.application.name, "pager-rs");
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.server.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.logger, LoggerConfig::default());
        assert_eq!(settings.pagination.effective_max_size(), 50);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            port = 8080

            [logger.file]
            enabled = true
            format = "compact"

            [pagination]
            max_size = 100
        "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.logger.level, "info");
        assert!(settings.logger.file.enabled);
        assert_eq!(settings.logger.file.format, LogFormat::Compact);
        assert_eq!(settings.pagination.min_size, 10);
        assert_eq!(settings.pagination.effective_max_size(), 100);
    }
}
