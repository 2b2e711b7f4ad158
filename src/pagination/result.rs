//! Listing payload returned to API clients.

use serde::Serialize;
use utoipa::ToSchema;

/// Message placed in [`PaginationResult::error`] when the fetch query fails.
pub const FETCH_ERROR_MESSAGE: &str = "unable to load data from the database";

/// One page of rows plus its pagination metadata.
///
/// Only produced by finishing a [`PageLayout`](super::PageLayout) (or by a
/// failed count), never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PaginationResult<T> {
    /// Whether both the count and fetch queries succeeded
    #[schema(example = true)]
    pub(crate) success: bool,

    /// Generic failure message, only present when the fetch query failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,

    /// Total number of matching rows
    #[schema(example = 95)]
    pub(crate) records: i64,

    /// Page served, 1-based
    #[schema(example = 1)]
    pub(crate) current_page: i64,

    /// Total number of pages, at least 1
    #[schema(example = 10)]
    pub(crate) pages: i64,

    /// Rows per page
    #[schema(example = 10)]
    pub(crate) size: i64,

    /// Largest page size accepted for this listing
    #[schema(example = 50)]
    pub(crate) max_size: i64,

    /// Zero-based index of the first row on this page
    #[schema(example = 0)]
    pub(crate) first: i64,

    /// Index one past the last row on this page, capped at `records`
    #[schema(example = 10)]
    pub(crate) last: i64,

    /// Rows on this page, in data source order
    pub(crate) data: Vec<T>,
}

impl<T> PaginationResult<T> {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn records(&self) -> i64 {
        self.records
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn max_size(&self) -> i64 {
        self.max_size
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn last(&self) -> i64 {
        self.last
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Converts every row, keeping the metadata untouched.
    pub fn map<U, F>(self, f: F) -> PaginationResult<U>
    where
        F: FnMut(T) -> U,
    {
        PaginationResult {
            success: self.success,
            error: self.error,
            records: self.records,
            current_page: self.current_page,
            pages: self.pages,
            size: self.size,
            max_size: self.max_size,
            first: self.first,
            last: self.last,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
