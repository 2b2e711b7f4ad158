//! Turns raw page/size input into a usable page window.
//!
//! Nothing here fails: out-of-range input is coerced to the nearest valid
//! value. The page number is only bounded from below at this point, the upper
//! bound depends on the record count and is applied by
//! [`PageWindow::layout`].

use super::config::{PaginationConfig, effective_max_size};

/// Raw pagination input as read from the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub debug: bool,
}

impl PageRequest {
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page,
            size,
            debug: false,
        }
    }
}

/// Caller-supplied overrides. Any field that is set wins over the
/// request-derived value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub max_size: Option<i64>,
    pub debug: Option<bool>,
}

impl PageOptions {
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_max_size(mut self, max_size: i64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }
}

/// Normalized page request, before the record count is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub(crate) page: i64,
    pub(crate) size: i64,
    pub(crate) max_size: i64,
    pub(crate) debug: bool,
}

impl PageWindow {
    /// Requested page, 1-based.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Rows per page.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Effective maximum page size this window was clamped against.
    pub fn max_size(&self) -> i64 {
        self.max_size
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Zero-based row offset of the requested page.
    ///
    /// Saturates instead of overflowing; the page is clamped to the real page
    /// count once records are known.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }
}

/// Applies [`PaginationConfig`] limits to raw requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    config: PaginationConfig,
}

impl Normalizer {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Builds a [`PageWindow`] from the raw request and caller options.
    pub fn normalize(&self, request: &PageRequest, options: &PageOptions) -> PageWindow {
        let raw_page = options.page.or(request.page);
        let raw_size = options.size.or(request.size);
        let max_size = options.max_size.unwrap_or(self.config.max_size);
        let debug = options.debug.unwrap_or(request.debug || self.config.debug);

        let (page, size) = normalize(raw_page, raw_size, self.config.min_size(), max_size);

        PageWindow {
            page,
            size,
            max_size: effective_max_size(max_size),
            debug,
        }
    }
}

/// Normalizes a raw `(page, size)` pair.
///
/// - size absent or `<= 0` counts as 0, then is raised to `min_size`
/// - size is capped at `max_size`, or at the default maximum when `max_size <= 0`
/// - page absent or `<= 0` becomes 1
pub fn normalize(
    raw_page: Option<i64>,
    raw_size: Option<i64>,
    min_size: i64,
    max_size: i64,
) -> (i64, i64) {
    let mut size = raw_size.filter(|size| *size > 0).unwrap_or(0);
    if size < min_size {
        size = min_size;
    }

    let max_size = effective_max_size(max_size);
    if size > max_size {
        size = max_size;
    }

    let page = match raw_page {
        Some(page) if page > 0 => page,
        _ => 1,
    };

    (page, size)
}
