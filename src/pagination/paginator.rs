//! Count-then-fetch orchestration.
//!
//! One call walks the phases in order and never goes back:
//!
//! 1. init: apply the normalized [`PageWindow`], enable source debugging
//! 2. count: total matching rows (failure stops here, no fetch)
//! 3. layout: page count, page clamp, offset and last index
//! 4. fetch: one `limit`/`offset` query
//! 5. done: a successful [`PaginationResult`]

use std::fmt;

use super::config::PaginationConfig;
use super::normalizer::{Normalizer, PageOptions, PageRequest, PageWindow};
use super::result::PaginationResult;
use super::source::DataSource;
use crate::error::AppError;

/// Phase in which a listing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStage {
    Count,
    Fetch,
}

impl PaginationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaginationStage::Count => "count",
            PaginationStage::Fetch => "fetch",
        }
    }
}

impl fmt::Display for PaginationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed listing.
///
/// Carries both error channels: `result` is the payload safe to send to the
/// client (with the generic message on fetch failures, nothing on count
/// failures) and `source` is the underlying storage error for logs.
#[derive(Debug)]
pub struct PaginationFailure<T> {
    stage: PaginationStage,
    result: PaginationResult<T>,
    source: AppError,
}

impl<T> PaginationFailure<T> {
    pub fn stage(&self) -> PaginationStage {
        self.stage
    }

    pub fn result(&self) -> &PaginationResult<T> {
        &self.result
    }

    /// The underlying count or fetch error.
    pub fn cause(&self) -> &AppError {
        &self.source
    }

    pub fn into_result(self) -> PaginationResult<T> {
        self.result
    }

    pub fn into_parts(self) -> (PaginationResult<T>, AppError) {
        (self.result, self.source)
    }
}

impl<T> fmt::Display for PaginationFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} query failed: {}", self.stage, self.source)
    }
}

impl<T: fmt::Debug> std::error::Error for PaginationFailure<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl<T> From<PaginationFailure<T>> for AppError {
    fn from(failure: PaginationFailure<T>) -> Self {
        failure.source
    }
}

/// Normalizes page requests and runs listings against a [`DataSource`].
///
/// Holds only immutable configuration, so one instance is shared by all
/// requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    normalizer: Normalizer,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    pub fn normalize(&self, request: &PageRequest, options: &PageOptions) -> PageWindow {
        self.normalizer.normalize(request, options)
    }

    /// Normalizes `request` and runs the listing.
    pub async fn list<S>(
        &self,
        request: &PageRequest,
        options: &PageOptions,
        source: &mut S,
    ) -> Result<PaginationResult<S::Row>, PaginationFailure<S::Row>>
    where
        S: DataSource,
    {
        let window = self.normalize(request, options);
        self.paginate(window, source).await
    }

    /// Runs count then fetch for an already normalized window.
    pub async fn paginate<S>(
        &self,
        window: PageWindow,
        source: &mut S,
    ) -> Result<PaginationResult<S::Row>, PaginationFailure<S::Row>>
    where
        S: DataSource,
    {
        if window.debug() {
            source.set_debug(true);
            tracing::debug!(
                page = window.page(),
                size = window.size(),
                max_size = window.max_size(),
                "Pagination window normalized"
            );
        }

        let records = match source.count().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(stage = "count", error = %e, "Pagination count failed");
                return Err(PaginationFailure {
                    stage: PaginationStage::Count,
                    result: window.count_failed(),
                    source: e,
                });
            }
        };

        let layout = window.layout(records);
        tracing::debug!(
            records = layout.records(),
            pages = layout.pages(),
            current_page = layout.current_page(),
            offset = layout.offset(),
            "Pagination layout computed"
        );

        match source.fetch(layout.limit(), layout.offset()).await {
            Ok(rows) => Ok(layout.complete(rows)),
            Err(e) => {
                tracing::warn!(stage = "fetch", error = %e, "Pagination fetch failed");
                Err(PaginationFailure {
                    stage: PaginationStage::Fetch,
                    result: layout.fetch_failed(),
                    source: e,
                })
            }
        }
    }
}
