use axum::extract::rejection::QueryRejection;
use serde::Serialize;
use thiserror::Error;

use crate::config::error::ConfigError;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Application-wide error type that represents all possible errors in the system.
///
/// Storage and infrastructure variants keep their cause as an `anyhow::Error`
/// source so it can be logged, while the HTTP layer only exposes a sanitized
/// message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Validation errors collected from a `validator` run
    #[error("Validation failed for {} field(s)", .errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Wraps a storage error with the operation that produced it.
    pub fn database<E>(operation: impl Into<String>, error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        AppError::Database {
            operation: operation.into(),
            source: error.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => AppError::NotFound {
                entity: "record".to_string(),
                field: "query".to_string(),
                value: "no matching row".to_string(),
            },
            other => AppError::database("database operation", other),
        }
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Configuration {
            key: error.key().to_string(),
            source: anyhow::Error::from(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut errors: Vec<ValidationFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationFieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationErrors { errors }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Filter {
        #[validate(length(min = 1, max = 5, message = "too long"))]
        search: String,
    }

    #[test]
    fn test_diesel_not_found_maps_to_not_found() {
        let error = AppError::from(diesel::result::Error::NotFound);
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_diesel_error_maps_to_database() {
        let error = AppError::from(diesel::result::Error::RollbackTransaction);
        match error {
            AppError::Database { operation, .. } => assert_eq!(operation, "database operation"),
            other => panic!("Expected Database error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_errors_conversion() {
        let filter = Filter {
            search: "far too long".to_string(),
        };
        let error = AppError::from(filter.validate().unwrap_err());
        match error {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "search");
                assert_eq!(errors[0].message, "too long");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_keeps_field() {
        let error = AppError::from(ConfigError::validation("pagination.min_size", "bad"));
        match error {
            AppError::Configuration { key, .. } => assert_eq!(key, "pagination.min_size"),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_hides_source() {
        let error = AppError::database("count users", anyhow::anyhow!("password=hunter2"));
        assert_eq!(error.to_string(), "Database operation failed: count users");
    }
}
