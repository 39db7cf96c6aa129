//! Offset/limit windowing and page metadata
//!
//! Pagination is stateless: the caller resupplies `skip`/`limit` on every
//! request and the total comes from an independent count of the full
//! filtered set. A window starting past the end is an empty page, not an
//! error.

use serde::Serialize;

/// Window size applied when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound a configured or requested limit is clamped to.
pub const MAX_PAGE_SIZE: usize = 100;

/// One requested window over a filtered, sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Limit is forced to at least 1 so page arithmetic stays defined.
    pub fn new(skip: usize, limit: usize) -> Self {
        Self {
            skip,
            limit: limit.max(1),
        }
    }

    /// Translate a 1-based page number into an offset window.
    pub fn from_page(page: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            skip: page.max(1).saturating_sub(1) * limit,
            limit,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// Metadata describing one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: usize,
    pub has_more: bool,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageMeta {
    /// `total_count` is the size of the full filtered set, counted
    /// independently of the window.
    pub fn new(request: &PageRequest, window_len: usize, total_count: usize) -> Self {
        Self {
            total_count,
            has_more: request.skip + window_len < total_count,
            current_page: request.skip / request.limit + 1,
            total_pages: total_count.div_ceil(request.limit),
        }
    }
}

/// One page of records plus its metadata, serialized flat:
/// `{ records, totalCount, hasMore, currentPage, totalPages }`.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(records: Vec<T>, request: &PageRequest, total_count: usize) -> Self {
        let meta = PageMeta::new(request, records.len(), total_count);
        Self { records, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_never_zero() {
        assert_eq!(PageRequest::new(0, 0).limit, 1);
        assert_eq!(PageRequest::from_page(3, 0).limit, 1);
    }

    #[test]
    fn test_from_page_translates_to_skip() {
        assert_eq!(PageRequest::from_page(1, 20), PageRequest::new(0, 20));
        assert_eq!(PageRequest::from_page(3, 20), PageRequest::new(40, 20));
        // Page 0 is treated as page 1
        assert_eq!(PageRequest::from_page(0, 20), PageRequest::new(0, 20));
    }

    #[test]
    fn test_meta_midway_through_set() {
        let request = PageRequest::new(20, 20);
        let meta = PageMeta::new(&request, 20, 45);
        assert_eq!(meta.total_count, 45);
        assert!(meta.has_more);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn test_meta_last_partial_page() {
        let request = PageRequest::new(40, 20);
        let meta = PageMeta::new(&request, 5, 45);
        assert!(!meta.has_more);
        assert_eq!(meta.current_page, 3);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn test_meta_exact_multiple_of_limit() {
        let request = PageRequest::new(0, 20);
        let meta = PageMeta::new(&request, 20, 40);
        assert!(meta.has_more);
        assert_eq!(meta.total_pages, 2);
    }

    #[test]
    fn test_meta_empty_set() {
        let meta = PageMeta::new(&PageRequest::new(0, 20), 0, 0);
        assert_eq!(meta.total_count, 0);
        assert!(!meta.has_more);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_skip_beyond_total_is_an_empty_page() {
        let request = PageRequest::new(1000, 20);
        let meta = PageMeta::new(&request, 0, 5);
        assert!(!meta.has_more);
        assert_eq!(meta.total_count, 5);
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.current_page, 51);
    }

    #[test]
    fn test_page_serializes_flat_camel_case() {
        let page = Page::new(vec!["a", "b"], &PageRequest::new(0, 2), 5);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["records"], serde_json::json!(["a", "b"]));
        assert_eq!(value["totalCount"], serde_json::json!(5));
        assert_eq!(value["hasMore"], serde_json::json!(true));
        assert_eq!(value["currentPage"], serde_json::json!(1));
        assert_eq!(value["totalPages"], serde_json::json!(3));
    }
}
