//! User listing DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::User;

/// Optional filter for the user listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    /// Case-insensitive substring of the username or email
    #[validate(length(min = 1, max = 100, message = "Search must be between 1 and 100 characters"))]
    #[param(min_length = 1, max_length = 100, example = "alice")]
    pub search: Option<String>,
}

/// One user row in a listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: String,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: jiff::civil::DateTime::from(user.created_at).to_string(),
            updated_at: jiff::civil::DateTime::from(user.updated_at).to_string(),
        }
    }
}
