//! Canonical relief-request record
//!
//! Two origin kinds (donation needs and support providers) map onto one
//! shape so the filtering, search, sort, and statistics logic exists once.
//! Per-kind vocabulary (status defaults, the "linked" status) lives on
//! [`RecordKind`].

use crate::core::auth::Caller;
use crate::core::timestamp::{display_bucket, RawTimestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Priority assigned to need-records that arrive without one.
pub const DEFAULT_PRIORITY: u8 = 3;

/// Origin kind of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Need,
    SupportProvider,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Need => "need",
            RecordKind::SupportProvider => "support-provider",
        }
    }

    /// Resolve a URL path segment (`/needs`, `/providers`) to a kind.
    pub fn from_path(segment: &str) -> Option<RecordKind> {
        match segment {
            "needs" => Some(RecordKind::Need),
            "providers" => Some(RecordKind::SupportProvider),
            _ => None,
        }
    }

    /// Status vocabulary for this kind, in workflow order.
    pub fn statuses(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Need => &[
                "Not yet received",
                "Linked to supplier",
                "Received",
                "Complete",
            ],
            RecordKind::SupportProvider => &["Not yet linked", "Linked with someone", "Complete"],
        }
    }

    /// Status an empty or absent value normalizes to.
    pub fn default_status(&self) -> &'static str {
        match self {
            RecordKind::Need => "Not yet received",
            RecordKind::SupportProvider => "Not yet linked",
        }
    }

    /// Status meaning "matched with a counterpart", per kind.
    pub fn linked_status(&self) -> &'static str {
        match self {
            RecordKind::Need => "Linked to supplier",
            RecordKind::SupportProvider => "Linked with someone",
        }
    }

    /// Display fallback for records submitted without a name.
    pub fn anonymous_name(&self) -> &'static str {
        match self {
            RecordKind::Need => "Anonymous",
            RecordKind::SupportProvider => "Not mentioned",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Call follow-up state. The empty wire form is a real value ("not called"),
/// never an unset marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallStatus {
    Answered,
    NotAnswered,
    #[default]
    NotCalled,
}

impl CallStatus {
    /// Wire form as stored and filtered on.
    pub fn as_wire(&self) -> &'static str {
        match self {
            CallStatus::Answered => "Called - answered",
            CallStatus::NotAnswered => "Called - not answered",
            CallStatus::NotCalled => "",
        }
    }

    /// Display form; this is what free-text search matches against.
    pub fn display(&self) -> &'static str {
        match self {
            CallStatus::Answered => "Called - answered",
            CallStatus::NotAnswered => "Called - not answered",
            CallStatus::NotCalled => "Not called",
        }
    }

    /// Parse an exact wire value. `""` is `NotCalled`; anything
    /// unrecognized is `None` so filters can reject it.
    pub fn from_wire(value: &str) -> Option<CallStatus> {
        match value {
            "Called - answered" => Some(CallStatus::Answered),
            "Called - not answered" => Some(CallStatus::NotAnswered),
            "" => Some(CallStatus::NotCalled),
            _ => None,
        }
    }
}

impl Serialize for CallStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for CallStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Feeds occasionally carry junk here; ingest degrades it to the
        // default rather than rejecting the whole record
        let value = String::deserialize(deserializer)?;
        Ok(CallStatus::from_wire(&value).unwrap_or_default())
    }
}

/// One relief-request record in canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Uuid,
    pub kind: RecordKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Vec<String>,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub call_status: CallStatus,
    #[serde(default)]
    pub notes: String,
    pub created_instant: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_timestamp: Option<RawTimestamp>,
}

impl Record {
    /// Name for display, falling back per kind when empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.kind.anonymous_name()
        } else {
            &self.name
        }
    }

    /// Status with the kind default applied to empty values.
    pub fn normalized_status(&self) -> &str {
        if self.status.is_empty() {
            self.kind.default_status()
        } else {
            &self.status
        }
    }

    /// Priority as counted by rollups: need-records default to
    /// [`DEFAULT_PRIORITY`], provider records stay absent.
    pub fn effective_priority(&self) -> Option<u8> {
        match self.kind {
            RecordKind::Need => Some(self.priority.unwrap_or(DEFAULT_PRIORITY)),
            RecordKind::SupportProvider => self.priority,
        }
    }

    pub fn is_high_priority(&self) -> bool {
        matches!(self.effective_priority(), Some(4 | 5))
    }

    /// Human display bucket for the creation instant.
    pub fn created_bucket(&self) -> String {
        display_bucket(self.created_instant)
    }

    /// Copy of this record as the caller is allowed to see it.
    /// Viewers get phone numbers masked down to the last two characters.
    pub fn presented_for(&self, caller: &Caller) -> Record {
        let mut record = self.clone();
        if !caller.can_view_contacts() {
            record.phone = record.phone.iter().map(|p| mask_contact(p)).collect();
        }
        record
    }
}

fn mask_contact(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 2 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 2), visible)
}
