//! Query engine
//!
//! [`RecordEngine`] is the one place that composes store access with
//! presentation: every record leaving through [`RecordEngine::list`] or
//! [`RecordEngine::export_all`] has passed through role-based contact
//! masking, and every aggregate comes from a full scan of the scoped set.

use crate::core::auth::Caller;
use crate::core::error::{EngineResult, FilterError};
use crate::core::filter::RecordFilter;
use crate::core::page::{Page, PageRequest};
use crate::core::query::RecordQuery;
use crate::core::record::{Record, RecordKind};
use crate::core::stats::RecordStats;
use crate::storage::RecordStore;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Fields the suggestion endpoint accepts.
pub const SUGGEST_FIELDS: [&str; 3] = ["district", "status", "tag"];

/// Store-backed query engine, cheap to clone and share across handlers.
pub struct RecordEngine<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for RecordEngine<S> {
    fn clone(&self) -> Self {
        RecordEngine {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RecordStore + ?Sized> RecordEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        RecordEngine { store }
    }

    /// List one page of matching records, presented for the caller.
    ///
    /// The total count and the page window come from two store calls; a
    /// write landing between them can make `totalCount` drift from the
    /// window by a record, which readers tolerate.
    pub async fn list(
        &self,
        query: &RecordQuery,
        page: PageRequest,
        caller: &Caller,
    ) -> EngineResult<Page<Record>> {
        let total_count = self.store.count(query).await?;
        let records = self.store.scan(query, page.skip, page.limit).await?;
        let records: Vec<Record> = records
            .into_iter()
            .map(|record| record.presented_for(caller))
            .collect();

        tracing::debug!(
            kind = ?query.kind,
            total_count,
            skip = page.skip,
            limit = page.limit,
            returned = records.len(),
            "listed records"
        );

        Ok(Page::new(records, &page, total_count))
    }

    /// Aggregate statistics over every record of `kind` matching `scope`.
    pub async fn stats(
        &self,
        kind: RecordKind,
        scope: RecordFilter,
    ) -> EngineResult<RecordStats> {
        let query = RecordQuery::for_kind(kind).with_filter(scope);
        let records = self.store.scan_all(&query).await?;
        Ok(RecordStats::collect(records.iter()))
    }

    /// Every matching record in sorted order, unwindowed, presented for
    /// the caller.
    pub async fn export_all(
        &self,
        query: &RecordQuery,
        caller: &Caller,
    ) -> EngineResult<Vec<Record>> {
        let records = self.store.scan_all(query).await?;
        Ok(records
            .into_iter()
            .map(|record| record.presented_for(caller))
            .collect())
    }

    /// Distinct values of one suggestible field across a kind, sorted
    /// ascending. Empty values never appear.
    pub async fn suggest(&self, kind: RecordKind, field: &str) -> EngineResult<Vec<String>> {
        if !SUGGEST_FIELDS.contains(&field) {
            return Err(FilterError::UnsupportedSuggestField {
                field: field.to_string(),
            }
            .into());
        }

        let query = RecordQuery::for_kind(kind);
        let records = self.store.scan_all(&query).await?;

        let mut values = BTreeSet::new();
        for record in &records {
            match field {
                "district" => {
                    if !record.district.is_empty() {
                        values.insert(record.district.clone());
                    }
                }
                "status" => {
                    values.insert(record.normalized_status().to_string());
                }
                "tag" => {
                    for tag in &record.tags {
                        if !tag.is_empty() {
                            values.insert(tag.clone());
                        }
                    }
                }
                _ => unreachable!("field checked against SUGGEST_FIELDS"),
            }
        }

        Ok(values.into_iter().collect())
    }
}
