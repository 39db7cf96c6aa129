//! # ReliefDesk
//!
//! A filtering, search, sort, and statistics engine for relief-request
//! records, with an HTTP surface for dashboards.
//!
//! ## Features
//!
//! - **Uniform Record Model**: Relief needs and support providers flow
//!   through one `Record` shape with kind-specific defaults
//! - **Tolerant Timestamps**: Epoch millis, RFC 3339, and day-first or
//!   year-first composite strings all resolve to one canonical instant;
//!   unparseable input degrades to an "Unknown" bucket, never an error
//! - **Composable Queries**: Field filters, free-text search, and sort
//!   plans combine into a single predicate + comparator pair
//! - **Stable Windowing**: Sorting is a strict total order, so
//!   consecutive pages reconstruct the full set without gaps or overlaps
//! - **Single-Pass Statistics**: Category buckets and dashboard rollups
//!   from one scan of the scoped set
//! - **Role-Gated Contacts**: Phone numbers are masked unless the caller
//!   is an admin or operator
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reliefdesk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = InMemoryRecordStore::new();
//!     store.add(
//!         NeedSubmission {
//!             name: "Rahim Uddin".to_string(),
//!             district: "Feni".to_string(),
//!             requirements: vec!["Dry food".to_string()],
//!             timestamp: Some(RawTimestamp::from("2024-08-22 14:30:00")),
//!             ..Default::default()
//!         }
//!         .into_record(),
//!     )?;
//!
//!     let state = AppState::new(Arc::new(store), ServiceConfig::default());
//!     reliefdesk::server::serve(state).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod records;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        auth::{Caller, Role, ROLE_HEADER},
        engine::RecordEngine,
        error::{EngineError, EngineResult, FilterError, StoreError},
        filter::RecordFilter,
        page::{Page, PageMeta, PageRequest},
        query::{ListParams, RecordQuery},
        record::{CallStatus, Record, RecordKind},
        search::SearchMatcher,
        sort::{SortDirection, SortKey, SortPlan},
        stats::RecordStats,
        timestamp::{canonical_instant, display_bucket, RawTimestamp},
    };

    // === Submissions ===
    pub use crate::records::{NeedSubmission, ProviderSubmission};

    // === Storage ===
    pub use crate::storage::{InMemoryRecordStore, RecordStore};

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === Server ===
    pub use crate::server::{build_router, AppState};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
