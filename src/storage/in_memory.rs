//! In-memory implementation of RecordStore for testing and development

use crate::core::error::StoreError;
use crate::core::query::RecordQuery;
use crate::core::record::Record;
use crate::storage::RecordStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory record store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Scans materialize the full matching set before sorting, so windows are
/// consistent with counts taken against the same state.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<Uuid, Record>>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record, replacing any record with the same id
    pub fn add(&self, record: Record) -> Result<Record, StoreError> {
        let mut records = self.records.write().map_err(|e| StoreError::Unavailable {
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        records.insert(record.id, record.clone());

        Ok(record)
    }

    pub fn get(&self, id: &Uuid) -> Result<Option<Record>, StoreError> {
        let records = self.records.read().map_err(|e| StoreError::Unavailable {
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        Ok(records.get(id).cloned())
    }

    /// Replace an existing record. Returns the stored value, or `None`
    /// when no record with that id exists.
    pub fn update(&self, id: &Uuid, record: Record) -> Result<Option<Record>, StoreError> {
        let mut records = self.records.write().map_err(|e| StoreError::Unavailable {
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        if !records.contains_key(id) {
            return Ok(None);
        }

        records.insert(*id, record.clone());

        Ok(Some(record))
    }

    /// Remove a record. Returns whether anything was removed.
    pub fn delete(&self, id: &Uuid) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|e| StoreError::Unavailable {
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        Ok(records.remove(id).is_some())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|e| StoreError::Unavailable {
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        records.clear();

        Ok(())
    }

    /// Full matching set in the query's sort order.
    fn matching(&self, query: &RecordQuery) -> Result<Vec<Record>, StoreError> {
        let records = self.records.read().map_err(|e| StoreError::Scan {
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        let mut matches: Vec<Record> = records
            .values()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();

        matches.sort_by(|a, b| query.compare(a, b));

        Ok(matches)
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn scan(
        &self,
        query: &RecordQuery,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Record>, StoreError> {
        let matches = self.matching(query)?;

        Ok(matches.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, query: &RecordQuery) -> Result<usize, StoreError> {
        let records = self.records.read().map_err(|e| StoreError::Count {
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        Ok(records.values().filter(|record| query.matches(record)).count())
    }

    async fn scan_all(&self, query: &RecordQuery) -> Result<Vec<Record>, StoreError> {
        self.matching(query)
    }
}
