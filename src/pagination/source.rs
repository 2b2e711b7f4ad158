//! Query collaborator consumed by the paginator.

use async_trait::async_trait;

use crate::error::AppResult;

/// A filtered, ordered row set that can be counted and sliced.
///
/// Filters and ordering are bound by whoever constructs the source; the
/// paginator only ever asks for the total and for one `limit`/`offset`
/// window, in that order.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Row type produced by [`fetch`](DataSource::fetch).
    type Row: Send;

    /// Counts all rows matching the bound filters.
    async fn count(&self) -> AppResult<i64>;

    /// Loads at most `limit` rows starting at `offset`.
    async fn fetch(&self, limit: i64, offset: i64) -> AppResult<Vec<Self::Row>>;

    /// Turns verbose query logging on or off. Sources without query logging
    /// ignore it.
    fn set_debug(&mut self, _enabled: bool) {}
}
