//! Record storage backends

use crate::core::error::StoreError;
use crate::core::query::RecordQuery;
use crate::core::record::Record;
use async_trait::async_trait;

pub mod in_memory;

pub use in_memory::InMemoryRecordStore;

/// Backend-agnostic record access.
///
/// Implementations return matches already sorted by the query's plan, so
/// windowing with `skip` and `limit` is stable across calls while the
/// underlying set is unchanged.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// One window of matching records in sorted order.
    async fn scan(
        &self,
        query: &RecordQuery,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Record>, StoreError>;

    /// Number of records matching the query.
    async fn count(&self, query: &RecordQuery) -> Result<usize, StoreError>;

    /// Every matching record in sorted order.
    async fn scan_all(&self, query: &RecordQuery) -> Result<Vec<Record>, StoreError>;
}
