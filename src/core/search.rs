//! Free-text search over record fields
//!
//! One case-insensitive substring needle, OR-combined across every
//! searchable field. Array fields match when any element contains the
//! needle. Call status is matched on its display form, so searching
//! "not called" finds records with the empty wire value.

use crate::core::record::Record;

/// A compiled search predicate. Cheap to build; the needle is lowercased
/// once at construction.
#[derive(Debug, Clone, Default)]
pub struct SearchMatcher {
    needle: String,
}

impl SearchMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// An empty or whitespace-only query is the identity predicate.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let needle = self.needle.as_str();

        record.name.to_lowercase().contains(needle)
            || record.district.to_lowercase().contains(needle)
            || record.location.to_lowercase().contains(needle)
            || record.status.to_lowercase().contains(needle)
            || record.notes.to_lowercase().contains(needle)
            || record.call_status.display().to_lowercase().contains(needle)
            || record.phone.iter().any(|p| p.to_lowercase().contains(needle))
            || record.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
