//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user` - user listing filter and response rows
//! - `error` - common error response
//! - `health` - health check responses
//! - `pagination` - page/size query parameters

mod error;
mod health;
mod pagination;
mod user;

pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use pagination::PaginationQuery;
pub use user::{UserFilter, UserResponse};
