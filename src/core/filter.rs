//! Strict field filters
//!
//! Every legal filter key and its value domain is enumerated here. A `None`
//! field means bypass; the literal `"all"` is accepted on every field as an
//! explicit bypass. Values outside a field's domain are rejected with a
//! [`FilterError`], never silently ignored. Unrecognized filter *keys* are
//! already rejected at the HTTP boundary before this type is built.

use crate::core::error::FilterError;
use crate::core::record::{CallStatus, Record};
use serde::{Deserialize, Serialize};

/// The fixed filter configuration consumed by the store read path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub district: Option<String>,
    pub status: Option<String>,
    pub priority: Option<u8>,
    pub verified: Option<bool>,
    pub call_status: Option<CallStatus>,
}

impl RecordFilter {
    /// Build a filter from raw wire values, validating each domain.
    ///
    /// `district` and `status` are free-form strings (stores can hold values
    /// outside the current vocabulary); `priority` must be 1..=5; `verified`
    /// must be a boolean literal; `call_status` must be an exact wire value,
    /// where the empty string means "not called" and is a real filter.
    pub fn from_values(
        district: Option<&str>,
        status: Option<&str>,
        priority: Option<&str>,
        verified: Option<&str>,
        call_status: Option<&str>,
    ) -> Result<RecordFilter, FilterError> {
        let mut filter = RecordFilter::default();

        if let Some(value) = district.filter(|v| !is_all(v)) {
            filter.district = Some(value.to_string());
        }

        if let Some(value) = status.filter(|v| !is_all(v)) {
            filter.status = Some(value.to_string());
        }

        if let Some(value) = priority.filter(|v| !is_all(v)) {
            let parsed: u8 = value.parse().map_err(|_| invalid_priority(value))?;
            if !(1..=5).contains(&parsed) {
                return Err(invalid_priority(value));
            }
            filter.priority = Some(parsed);
        }

        if let Some(value) = verified.filter(|v| !is_all(v)) {
            filter.verified = Some(match value.to_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(FilterError::InvalidValue {
                        field: "verified".to_string(),
                        value: value.to_string(),
                        message: "expected true, false, or all".to_string(),
                    });
                }
            });
        }

        if let Some(value) = call_status.filter(|v| !is_all(v)) {
            filter.call_status =
                Some(
                    CallStatus::from_wire(value).ok_or_else(|| FilterError::InvalidValue {
                        field: "callStatus".to_string(),
                        value: value.to_string(),
                        message: "expected a call status wire value, an empty string, or all"
                            .to_string(),
                    })?,
                );
        }

        Ok(filter)
    }

    /// Whether a record passes every set field (AND semantics).
    pub fn matches(&self, record: &Record) -> bool {
        self.district
            .as_deref()
            .is_none_or(|d| record.district == d)
            && self
                .status
                .as_deref()
                .is_none_or(|s| record.normalized_status() == s)
            && self
                .priority
                .is_none_or(|p| record.effective_priority() == Some(p))
            && self.verified.is_none_or(|v| record.verified == v)
            && self.call_status.is_none_or(|c| record.call_status == c)
    }
}

fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case("all")
}

fn invalid_priority(value: &str) -> FilterError {
    FilterError::InvalidValue {
        field: "priority".to_string(),
        value: value.to_string(),
        message: "must be an integer between 1 and 5".to_string(),
    }
}
