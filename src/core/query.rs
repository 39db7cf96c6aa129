//! Query parameters and composed record queries
//!
//! [`ListParams`] is the raw wire shape of a listing request; unknown
//! parameters fail deserialization outright, so misspelled filter keys are
//! rejected instead of silently ignored. [`RecordQuery`] is the composed
//! predicate the store read path consumes: kind gate, strict filter,
//! search matcher, and sort plan in one place. Search is filter
//! augmentation, not a separate code path.

use crate::core::error::FilterError;
use crate::core::filter::RecordFilter;
use crate::core::page::PageRequest;
use crate::core::record::{Record, RecordKind};
use crate::core::search::SearchMatcher;
use crate::core::sort::SortPlan;
use serde::Deserialize;
use std::cmp::Ordering;

/// Listing request parameters as they arrive on the query string.
///
/// # Example
/// ```rust,ignore
/// GET /needs?district=Feni&priority=4&q=water&sortBy=createdAt&skip=20&limit=20
/// GET /needs?verified=all&callStatus=&page=2
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListParams {
    /// Free-text search query
    pub q: Option<String>,

    /// Sort key: `createdAt`, `name`, `priority`, `numberOfPeople`
    pub sort_by: Option<String>,

    /// Sort direction; only `asc` sorts ascending
    pub order: Option<String>,

    /// Records to skip; wins over `page` when both are supplied
    pub skip: Option<usize>,

    /// 1-based page number, an alternative to `skip`
    pub page: Option<usize>,

    /// Window size
    pub limit: Option<usize>,

    pub district: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub verified: Option<String>,
    pub call_status: Option<String>,
}

impl ListParams {
    /// Validate the filter fields into a [`RecordFilter`].
    pub fn filter(&self) -> Result<RecordFilter, FilterError> {
        RecordFilter::from_values(
            self.district.as_deref(),
            self.status.as_deref(),
            self.priority.as_deref(),
            self.verified.as_deref(),
            self.call_status.as_deref(),
        )
    }

    pub fn sort_plan(&self) -> SortPlan {
        SortPlan::from_params(self.sort_by.as_deref(), self.order.as_deref())
    }

    /// Resolve the requested window. `skip` wins over `page`; the limit is
    /// clamped into `[1, max_limit]`.
    pub fn page_request(&self, default_limit: usize, max_limit: usize) -> PageRequest {
        let limit = self.limit.unwrap_or(default_limit).clamp(1, max_limit.max(1));
        match (self.skip, self.page) {
            (Some(skip), _) => PageRequest::new(skip, limit),
            (None, Some(page)) => PageRequest::from_page(page, limit),
            (None, None) => PageRequest::new(0, limit),
        }
    }
}

/// The complete match-and-order predicate a store scan consumes.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub kind: Option<RecordKind>,
    pub filter: RecordFilter,
    pub search: SearchMatcher,
    pub sort: SortPlan,
}

impl RecordQuery {
    /// Query matching every record of one kind, newest first.
    pub fn for_kind(kind: RecordKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: RecordFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, query: &str) -> Self {
        self.search = SearchMatcher::new(query);
        self
    }

    pub fn with_sort(mut self, sort: SortPlan) -> Self {
        self.sort = sort;
        self
    }

    /// Compose kind, validated filter, search, and sort from wire params.
    pub fn from_params(kind: RecordKind, params: &ListParams) -> Result<Self, FilterError> {
        Ok(Self {
            kind: Some(kind),
            filter: params.filter()?,
            search: SearchMatcher::new(params.q.as_deref().unwrap_or_default()),
            sort: params.sort_plan(),
        })
    }

    /// The scan predicate: kind gate AND filter AND search.
    pub fn matches(&self, record: &Record) -> bool {
        self.kind.is_none_or(|k| record.kind == k)
            && self.filter.matches(record)
            && self.search.matches(record)
    }

    /// The scan comparator.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.sort.compare(a, b)
    }
}
