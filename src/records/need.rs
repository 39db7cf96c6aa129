//! Relief-need submissions

use crate::core::record::{CallStatus, Record, RecordKind, DEFAULT_PRIORITY};
use crate::core::timestamp::{canonical_instant, RawTimestamp};
use serde::Deserialize;
use uuid::Uuid;

/// A relief request as the intake form submits it.
///
/// Every field is optional on the wire; [`NeedSubmission::into_record`]
/// fills kind defaults, clamps priority into 1..=5, and resolves the raw
/// timestamp to a canonical instant.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedSubmission {
    #[serde(default)]
    pub name: String,

    /// Contact numbers, possibly empty
    #[serde(default)]
    pub phone: Vec<String>,

    #[serde(default)]
    pub district: String,

    /// Free-text address within the district
    #[serde(default)]
    pub address: String,

    /// What is needed, e.g. "Dry food" or "Medicine"
    #[serde(default)]
    pub requirements: Vec<String>,

    #[serde(default)]
    pub number_of_people: Option<u32>,

    /// Urgency 1..=5; absent means the default
    #[serde(default)]
    pub priority: Option<u8>,

    #[serde(default)]
    pub verified: bool,

    /// Workflow status; empty means not yet received
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub call_status: CallStatus,

    #[serde(default)]
    pub notes: String,

    /// Submission time in whatever shape the form produced
    #[serde(default)]
    pub timestamp: Option<RawTimestamp>,
}

impl NeedSubmission {
    pub fn into_record(self) -> Record {
        let status = if self.status.is_empty() {
            RecordKind::Need.default_status().to_string()
        } else {
            self.status
        };
        let priority = self.priority.unwrap_or(DEFAULT_PRIORITY).clamp(1, 5);
        let created_instant = canonical_instant(self.timestamp.as_ref());

        Record {
            id: Uuid::new_v4(),
            kind: RecordKind::Need,
            name: self.name,
            phone: self.phone,
            district: self.district,
            location: self.address,
            tags: self.requirements,
            people_count: self.number_of_people,
            priority: Some(priority),
            verified: self.verified,
            status,
            call_status: self.call_status,
            notes: self.notes,
            created_instant,
            raw_timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_takes_need_defaults() {
        let record = NeedSubmission::default().into_record();

        assert_eq!(record.kind, RecordKind::Need);
        assert_eq!(record.status, "Not yet received");
        assert_eq!(record.priority, Some(DEFAULT_PRIORITY));
        assert_eq!(record.created_instant, 0);
        assert_eq!(record.call_status, CallStatus::NotCalled);
    }

    #[test]
    fn test_priority_clamped_into_scale() {
        let record = NeedSubmission {
            priority: Some(9),
            ..Default::default()
        }
        .into_record();
        assert_eq!(record.priority, Some(5));

        let record = NeedSubmission {
            priority: Some(0),
            ..Default::default()
        }
        .into_record();
        assert_eq!(record.priority, Some(1));
    }

    #[test]
    fn test_address_and_requirements_map_onto_record() {
        let record = NeedSubmission {
            district: "Feni".to_string(),
            address: "Fulgazi upazila".to_string(),
            requirements: vec!["Dry food".to_string(), "Water".to_string()],
            ..Default::default()
        }
        .into_record();

        assert_eq!(record.location, "Fulgazi upazila");
        assert_eq!(record.tags, vec!["Dry food", "Water"]);
    }

    #[test]
    fn test_timestamp_resolved_and_raw_preserved() {
        let record = NeedSubmission {
            timestamp: Some(RawTimestamp::from("2024-08-22 14:30:00")),
            ..Default::default()
        }
        .into_record();

        assert_eq!(record.created_instant, 1_724_337_000_000);
        assert_eq!(
            record.raw_timestamp.map(|t| t.raw_string()),
            Some("2024-08-22 14:30:00".to_string())
        );
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let submission: NeedSubmission = serde_json::from_value(serde_json::json!({
            "name": "Rahim",
            "numberOfPeople": 4,
            "callStatus": "Called - answered",
            "timestamp": 1724337000000_i64
        }))
        .expect("Deserializing submission should succeed");

        assert_eq!(submission.number_of_people, Some(4));
        assert_eq!(submission.call_status, CallStatus::Answered);
        let record = submission.into_record();
        assert_eq!(record.created_instant, 1_724_337_000_000);
    }
}
