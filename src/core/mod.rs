//! Core module containing the record model, query pipeline, and engine

pub mod auth;
pub mod engine;
pub mod error;
pub mod filter;
pub mod page;
pub mod query;
pub mod record;
pub mod search;
pub mod sort;
pub mod stats;
pub mod timestamp;

pub use auth::{Caller, Role, ROLE_HEADER};
pub use engine::{RecordEngine, SUGGEST_FIELDS};
pub use error::{EngineError, EngineResult, ErrorResponse, FilterError, StoreError};
pub use filter::RecordFilter;
pub use page::{Page, PageMeta, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use query::{ListParams, RecordQuery};
pub use record::{CallStatus, Record, RecordKind, DEFAULT_PRIORITY};
pub use search::SearchMatcher;
pub use sort::{SortDirection, SortKey, SortPlan};
pub use stats::{CategoryBuckets, RecordStats, Rollups};
pub use timestamp::{canonical_instant, display_bucket, RawTimestamp, UNKNOWN_INSTANT};
