//! HTTP envelope for listing results.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::result::PaginationResult;

impl<T> PaginationResult<T> {
    /// `200 OK` for a successful listing, `500` for any failed one.
    pub fn status_code(&self) -> StatusCode {
        if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl<T: Serialize> IntoResponse for PaginationResult<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
