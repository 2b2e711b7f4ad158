//! Page selection query parameters.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use utoipa::IntoParams;

use crate::pagination::PageRequest;

/// `page` and `size` as sent by the client.
///
/// Kept as raw strings so that malformed values fall back to defaults
/// instead of rejecting the request. Extraction never fails: repeated keys
/// keep their first occurrence, and `limit` stands in for `size`.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number, 1-based; pages past the end serve the last page
    #[param(value_type = Option<i64>, example = 1)]
    pub page: Option<String>,

    /// Rows per page, clamped into the configured bounds (alias: `limit`)
    #[param(value_type = Option<i64>, example = 10)]
    pub size: Option<String>,
}

impl PaginationQuery {
    /// Picks `page` and `size` out of decoded query pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "size" | "limit" => &mut query.size,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn page(&self) -> Option<i64> {
        parse_raw(self.page.as_deref())
    }

    pub fn size(&self) -> Option<i64> {
        parse_raw(self.size.as_deref())
    }
}

impl<S> FromRequestParts<S> for PaginationQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Undecodable query string, using default page");
                Vec::new()
            }
        };
        Ok(Self::from_pairs(pairs))
    }
}

impl From<&PaginationQuery> for PageRequest {
    fn from(query: &PaginationQuery) -> Self {
        PageRequest::new(query.page(), query.size())
    }
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        PageRequest::from(&query)
    }
}

/// Unset, empty, non-numeric and out-of-range values all read as "not given".
fn parse_raw(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
}
