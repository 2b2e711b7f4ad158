//! Page metadata derived once the record count is known.

use super::normalizer::PageWindow;
use super::result::{FETCH_ERROR_MESSAGE, PaginationResult};

/// Page metadata for a known record count.
///
/// Built by [`PageWindow::layout`]; consumed by [`PageLayout::complete`] or
/// [`PageLayout::fetch_failed`] to produce the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    records: i64,
    current_page: i64,
    pages: i64,
    size: i64,
    max_size: i64,
    first: i64,
    last: i64,
}

impl PageWindow {
    /// Computes page metadata for `records` matching rows.
    ///
    /// The requested page is clamped into `[1, pages]`, so asking for a page
    /// past the end serves the last page.
    pub fn layout(self, records: i64) -> PageLayout {
        let records = records.max(0);
        let pages = page_count(records, self.size);
        let current_page = self.page.clamp(1, pages);
        let first = (current_page - 1) * self.size;
        let last = first.saturating_add(self.size).min(records);

        PageLayout {
            records,
            current_page,
            pages,
            size: self.size,
            max_size: self.max_size,
            first,
            last,
        }
    }

    /// Result for a listing whose count query failed. The error field stays
    /// unset; the cause is reported through the function-level error only.
    ///
    /// With no count there is a single empty page, so `current_page` is 1
    /// whatever page was requested.
    pub(crate) fn count_failed<T>(self) -> PaginationResult<T> {
        PaginationResult {
            success: false,
            error: None,
            records: 0,
            current_page: 1,
            pages: 1,
            size: self.size,
            max_size: self.max_size,
            first: 0,
            last: 0,
            data: Vec::new(),
        }
    }
}

impl PageLayout {
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

    /// Zero-based offset of the first row on the current page.
    pub fn offset(&self) -> i64 {
        self.first
    }

    /// Number of rows to request from the data source.
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Exclusive upper index of the rows on this page, never past `records`.
    pub fn last(&self) -> i64 {
        self.last
    }

    /// Finishes a successful listing.
    pub fn complete<T>(self, data: Vec<T>) -> PaginationResult<T> {
        self.into_result(true, None, data)
    }

    /// Finishes a listing whose fetch query failed.
    pub fn fetch_failed<T>(self) -> PaginationResult<T> {
        self.into_result(false, Some(FETCH_ERROR_MESSAGE.to_string()), Vec::new())
    }

    fn into_result<T>(
        self,
        success: bool,
        error: Option<String>,
        data: Vec<T>,
    ) -> PaginationResult<T> {
        PaginationResult {
            success,
            error,
            records: self.records,
            current_page: self.current_page,
            pages: self.pages,
            size: self.size,
            max_size: self.max_size,
            first: self.first,
            last: self.last,
            data,
        }
    }
}

/// Number of pages needed for `records` rows; an empty listing still has one.
pub fn page_count(records: i64, size: i64) -> i64 {
    if records <= 0 {
        return 1;
    }
    let size = size.max(1);
    let pages = if records % size == 0 {
        records / size
    } else {
        records / size + 1
    };
    pages.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{Normalizer, PageOptions, PageRequest, PaginationConfig};
    use proptest::prelude::*;

    fn window(page: i64, size: i64) -> PageWindow {
        let request = PageRequest::new(Some(page), Some(size));
        Normalizer::default().normalize(&request, &PageOptions::default())
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 10), 10);
        assert_eq!(page_count(100, 10), 10);
    }

    #[test]
    fn test_first_page_of_ninety_five() {
        let layout = window(1, 10).layout(95);
        assert_eq!(layout.pages(), 10);
        assert_eq!(layout.current_page(), 1);
        assert_eq!(layout.offset(), 0);
        assert_eq!(layout.last(), 10);
    }

    #[test]
    fn test_partial_last_page() {
        let layout = window(10, 10).layout(95);
        assert_eq!(layout.offset(), 90);
        assert_eq!(layout.last(), 95);
    }

    #[test]
    fn test_page_past_end_serves_last_page() {
        let layout = window(99, 10).layout(25);
        assert_eq!(layout.pages(), 3);
        assert_eq!(layout.current_page(), 3);
        assert_eq!(layout.offset(), 20);
        assert_eq!(layout.last(), 25);
    }

    #[test]
    fn test_empty_listing() {
        let layout = window(3, 10).layout(0);
        assert_eq!(layout.pages(), 1);
        assert_eq!(layout.current_page(), 1);
        assert_eq!(layout.offset(), 0);
        assert_eq!(layout.last(), 0);

        let result = layout.complete::<u32>(Vec::new());
        assert!(result.success());
        assert!(result.data().is_empty());
    }

    #[test]
    fn test_huge_page_is_clamped() {
        let layout = window(i64::MAX, 50).layout(120);
        assert_eq!(layout.current_page(), 3);
        assert_eq!(layout.offset(), 100);
        assert_eq!(layout.last(), 120);
    }

    #[test]
    fn test_fetch_failed_sets_generic_error() {
        let result = window(1, 10).layout(5).fetch_failed::<u32>();
        assert!(!result.success());
        assert_eq!(result.error(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(result.records(), 5);
    }

    #[test]
    fn test_count_failed_leaves_error_unset() {
        let result = window(2, 10).count_failed::<u32>();
        assert!(!result.success());
        assert!(result.error().is_none());
        assert_eq!(result.pages(), 1);
        assert_eq!(result.current_page(), 1);
        assert_eq!(result.size(), 10);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_layout_invariants(
            records in 0i64..100_000,
            raw_page in proptest::option::of(any::<i64>()),
            raw_size in proptest::option::of(-100i64..1_000),
            max_size in 0i64..200,
        ) {
            let normalizer = Normalizer::new(PaginationConfig::new(10, max_size));
            let request = PageRequest::new(raw_page, raw_size);
            let window = normalizer.normalize(&request, &PageOptions::default());
            let layout = window.layout(records);

            prop_assert!(layout.pages() >= 1);
            if records == 0 {
                prop_assert_eq!(layout.pages(), 1);
            } else {
                let expected = (records + layout.size() - 1) / layout.size();
                prop_assert_eq!(layout.pages(), expected);
            }
            prop_assert!(layout.current_page() >= 1);
            prop_assert!(layout.current_page() <= layout.pages());
            prop_assert_eq!(layout.offset(), (layout.current_page() - 1) * layout.size());
            prop_assert_eq!(layout.last(), (layout.offset() + layout.size()).min(records));
            prop_assert!(layout.last() <= records);
        }
    }
}
