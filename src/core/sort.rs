//! Deterministic sort planning
//!
//! A requested sort key and direction resolve into a strict total order:
//! primary field, then creation instant descending, then id. Two distinct
//! records never compare equal, so page boundaries are stable across
//! repeated calls.

use crate::core::record::{Record, DEFAULT_PRIORITY};
use std::cmp::Ordering;

/// Sortable record field. Wire names: `createdAt`, `name`, `priority`,
/// `numberOfPeople`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Name,
    Priority,
    PeopleCount,
}

impl SortKey {
    /// Unrecognized keys fall back to `CreatedAt` so a stale client never
    /// breaks a listing.
    pub fn from_param(value: &str) -> SortKey {
        match value {
            "name" => SortKey::Name,
            "priority" => SortKey::Priority,
            "numberOfPeople" => SortKey::PeopleCount,
            _ => SortKey::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Only an explicit `asc` sorts ascending; anything else is `Desc`.
    pub fn from_param(value: &str) -> SortDirection {
        if value.eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// A resolved sort order. The default plan is newest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortPlan {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortPlan {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Resolve raw request parameters; absent values take the defaults.
    pub fn from_params(sort_by: Option<&str>, order: Option<&str>) -> SortPlan {
        SortPlan {
            key: sort_by.map(SortKey::from_param).unwrap_or_default(),
            direction: order.map(SortDirection::from_param).unwrap_or_default(),
        }
    }

    /// Strict total order over records.
    ///
    /// Ties on the primary key break on creation instant descending, then
    /// id ascending. Absent priorities compare as [`DEFAULT_PRIORITY`],
    /// absent people counts as zero; names compare case-insensitively.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let primary = match self.key {
            SortKey::CreatedAt => a.created_instant.cmp(&b.created_instant),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Priority => a
                .priority
                .unwrap_or(DEFAULT_PRIORITY)
                .cmp(&b.priority.unwrap_or(DEFAULT_PRIORITY)),
            SortKey::PeopleCount => a
                .people_count
                .unwrap_or(0)
                .cmp(&b.people_count.unwrap_or(0)),
        };
        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary
            .then_with(|| b.created_instant.cmp(&a.created_instant))
            .then_with(|| a.id.cmp(&b.id))
    }
}
