//! Single-pass statistics aggregation
//!
//! One full scan of the scoped record set produces every category bucket
//! and rollup at once; nothing is delegated to a store-side aggregation
//! that would skip per-record normalization. Buckets keep first-seen
//! insertion order so dashboard output is stable across calls.

use crate::core::record::{CallStatus, Record};
use indexmap::IndexMap;
use serde::Serialize;

/// Status value counted by the `completed` rollup, shared by both kinds.
pub const COMPLETED_STATUS: &str = "Complete";

/// Bucket for records with no district.
pub const UNKNOWN_DISTRICT: &str = "Unknown";

/// Value → count mappings, one per dashboard dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBuckets {
    pub status: IndexMap<String, u64>,
    pub priority: IndexMap<String, u64>,
    pub district: IndexMap<String, u64>,
    pub call_status: IndexMap<String, u64>,
}

/// Fixed dashboard rollups, all derived from the same pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rollups {
    pub total: u64,
    pub verified: u64,
    /// Records with status "Complete"
    pub completed: u64,
    /// Records with effective priority 4 or 5
    pub high_priority: u64,
    /// Records in the kind's "linked" status
    pub linked: u64,
    /// Records never called (empty call status)
    pub not_called: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordStats {
    pub buckets: CategoryBuckets,
    pub rollups: Rollups,
}

impl RecordStats {
    /// Aggregate a scoped record set in one pass.
    pub fn collect<'a, I>(records: I) -> RecordStats
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut stats = RecordStats::default();
        for record in records {
            stats.observe(record);
        }
        stats
    }

    /// Normalization happens here, per record, before counting: empty
    /// status takes the kind default, absent need-priority counts under the
    /// default, provider records are left out of priority buckets entirely,
    /// an empty district buckets under [`UNKNOWN_DISTRICT`], and call
    /// status is bucketed on its display form.
    fn observe(&mut self, record: &Record) {
        let status = record.normalized_status();
        *self
            .buckets
            .status
            .entry(status.to_string())
            .or_insert(0) += 1;

        if let Some(priority) = record.effective_priority() {
            *self
                .buckets
                .priority
                .entry(priority.to_string())
                .or_insert(0) += 1;
        }

        let district = if record.district.is_empty() {
            UNKNOWN_DISTRICT
        } else {
            record.district.as_str()
        };
        *self
            .buckets
            .district
            .entry(district.to_string())
            .or_insert(0) += 1;

        *self
            .buckets
            .call_status
            .entry(record.call_status.display().to_string())
            .or_insert(0) += 1;

        self.rollups.total += 1;
        if record.verified {
            self.rollups.verified += 1;
        }
        if status == COMPLETED_STATUS {
            self.rollups.completed += 1;
        }
        if record.is_high_priority() {
            self.rollups.high_priority += 1;
        }
        if status == record.kind.linked_status() {
            self.rollups.linked += 1;
        }
        if record.call_status == CallStatus::NotCalled {
            self.rollups.not_called += 1;
        }
    }
}
