//! Error response DTOs.

use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::error::ValidationFieldError;

/// Standard error response format.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine readable error code
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,
    /// Human readable message
    pub message: String,
    /// Structured details, shape depends on `code`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
    /// Correlates the response with server logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new("NOT_FOUND", &format!("{} not found", entity)).with_details(json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new("VALIDATION_ERROR", &format!("Validation failed for {}", field)).with_details(
            json!({
                "field": field,
                "reason": reason,
            }),
        )
    }

    pub fn validation_errors(errors: &[ValidationFieldError]) -> Self {
        Self::new("VALIDATION_ERROR", "Request validation failed")
            .with_details(json!({ "errors": errors }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let value = serde_json::to_value(ErrorResponse::new("BAD_REQUEST", "nope")).unwrap();
        assert_eq!(value, json!({"code": "BAD_REQUEST", "message": "nope"}));
    }

    #[test]
    fn test_validation_errors_details() {
        let errors = vec![ValidationFieldError {
            field: "search".to_string(),
            message: "too long".to_string(),
        }];
        let value = serde_json::to_value(
            ErrorResponse::validation_errors(&errors).with_request_id("req-1"),
        )
        .unwrap();

        assert_eq!(value["code"], "VALIDATION_ERROR");
        assert_eq!(value["details"]["errors"][0]["field"], "search");
        assert_eq!(value["request_id"], "req-1");
    }
}
