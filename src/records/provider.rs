//! Support-provider submissions

use crate::core::record::{CallStatus, Record, RecordKind};
use crate::core::timestamp::{canonical_instant, RawTimestamp};
use serde::Deserialize;
use uuid::Uuid;

/// An offer of support as the intake form submits it.
///
/// Providers have no headcount and no urgency; their record keeps
/// `priority` unset so they stay out of priority statistics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSubmission {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: Vec<String>,

    #[serde(default)]
    pub district: String,

    /// Where the support is offered from
    #[serde(default)]
    pub location: String,

    /// What is offered, e.g. "Boat rescue" or "Cooked meals"
    #[serde(default)]
    pub support_types: Vec<String>,

    #[serde(default)]
    pub verified: bool,

    /// Workflow status; empty means not yet linked
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub call_status: CallStatus,

    #[serde(default)]
    pub availability_notes: String,

    #[serde(default)]
    pub timestamp: Option<RawTimestamp>,
}

impl ProviderSubmission {
    pub fn into_record(self) -> Record {
        let status = if self.status.is_empty() {
            RecordKind::SupportProvider.default_status().to_string()
        } else {
            self.status
        };
        let created_instant = canonical_instant(self.timestamp.as_ref());

        Record {
            id: Uuid::new_v4(),
            kind: RecordKind::SupportProvider,
            name: self.name,
            phone: self.phone,
            district: self.district,
            location: self.location,
            tags: self.support_types,
            people_count: None,
            priority: None,
            verified: self.verified,
            status,
            call_status: self.call_status,
            notes: self.availability_notes,
            created_instant,
            raw_timestamp: self.timestamp,
        }
    }
}
