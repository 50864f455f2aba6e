//! Activity log records and member identities.
//!
//! A [`SyntheticRecord`] is one back-dated entry in a subject's activity log.
//! Fields are private so that the only way to build a record is through the
//! constructors, which keep the record internally consistent:
//!
//! - `end_time`, when present, is strictly after `start_time`
//! - `value` and `unit` are either both present or both absent
//! - `created_at` and `updated_at` always equal `start_time`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error type for record construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Interval whose end is not after its start
    #[error("Interval end {end} is not after start {start}")]
    EmptyInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Measured record with an empty unit string
    #[error("Measured record requires a non-empty unit")]
    MissingUnit,
}

/// A synthetic activity log entry.
///
/// Serializes to a flat JSON object. Every key is always present (absent
/// optionals become `null`) because bulk inserts require all objects in a
/// request to share one key set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticRecord {
    id: Uuid,
    #[serde(rename = "child_id")]
    subject_id: String,
    #[serde(rename = "activity_type_id")]
    category_id: String,
    start_time: NaiveDateTime,
    end_time: Option<NaiveDateTime>,
    value: Option<f64>,
    unit: Option<String>,
    note: Option<String>,
    details: Option<serde_json::Value>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl SyntheticRecord {
    fn base(id: Uuid, subject_id: &str, category_id: &str, start: NaiveDateTime) -> Self {
        Self {
            id,
            subject_id: subject_id.to_string(),
            category_id: category_id.to_string(),
            start_time: start,
            end_time: None,
            value: None,
            unit: None,
            note: None,
            details: None,
            created_at: start,
            updated_at: start,
        }
    }

    /// A point-in-time event with no payload (e.g. a diaper change).
    pub fn instant(id: Uuid, subject_id: &str, category_id: &str, at: NaiveDateTime) -> Self {
        Self::base(id, subject_id, category_id, at)
    }

    /// A duration-bearing activity (e.g. sleep).
    pub fn interval(
        id: Uuid,
        subject_id: &str,
        category_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, RecordError> {
        if end <= start {
            return Err(RecordError::EmptyInterval { start, end });
        }
        let mut record = Self::base(id, subject_id, category_id, start);
        record.end_time = Some(end);
        Ok(record)
    }

    /// A measured activity (e.g. feeding volume, temperature).
    pub fn measured(
        id: Uuid,
        subject_id: &str,
        category_id: &str,
        at: NaiveDateTime,
        value: f64,
        unit: &str,
    ) -> Result<Self, RecordError> {
        if unit.is_empty() {
            return Err(RecordError::MissingUnit);
        }
        let mut record = Self::base(id, subject_id, category_id, at);
        record.value = Some(value);
        record.unit = Some(unit.to_string());
        Ok(record)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.end_time
    }

    /// The `(value, unit)` pair of a measured record.
    pub fn measurement(&self) -> Option<(f64, &str)> {
        match (self.value, self.unit.as_deref()) {
            (Some(value), Some(unit)) => Some((value, unit)),
            _ => None,
        }
    }

    /// Duration of an interval record.
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }
}

/// Profile attributes stored alongside a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileAttributes {
    pub full_name: String,
    pub role: String,
}

/// A synthetic member account submitted to the signup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub email: String,
    pub password: String,
    #[serde(rename = "data")]
    pub profile: ProfileAttributes,
}

impl MemberProfile {
    pub fn full_name(&self) -> &str {
        &self.profile.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_instant_is_backdated() {
        let record = SyntheticRecord::instant(Uuid::nil(), "child", "pee", at(8, 30));
        assert_eq!(record.created_at(), at(8, 30));
        assert_eq!(record.updated_at(), at(8, 30));
        assert!(record.end_time().is_none());
        assert!(record.measurement().is_none());
    }

    #[test]
    fn test_interval_rejects_non_positive_duration() {
        let result = SyntheticRecord::interval(Uuid::nil(), "child", "sleep", at(9, 0), at(9, 0));
        assert!(matches!(result, Err(RecordError::EmptyInterval { .. })));

        let result = SyntheticRecord::interval(Uuid::nil(), "child", "sleep", at(9, 0), at(8, 0));
        assert!(result.is_err());
    }

    #[test]
    fn test_interval_duration() {
        let record =
            SyntheticRecord::interval(Uuid::nil(), "child", "sleep", at(13, 0), at(14, 30))
                .unwrap();
        assert_eq!(record.duration(), Some(chrono::Duration::minutes(90)));
    }

    #[test]
    fn test_measured_requires_unit() {
        let result =
            SyntheticRecord::measured(Uuid::nil(), "child", "formula", at(6, 0), 120.0, "");
        assert_eq!(result.unwrap_err(), RecordError::MissingUnit);
    }

    #[test]
    fn test_serializes_flat_with_all_keys() {
        let record =
            SyntheticRecord::measured(Uuid::nil(), "child-1", "formula", at(6, 15), 120.0, "ml")
                .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 11);
        assert_eq!(obj["child_id"], "child-1");
        assert_eq!(obj["activity_type_id"], "formula");
        assert_eq!(obj["start_time"], "2026-01-05T06:15:00");
        assert_eq!(obj["created_at"], "2026-01-05T06:15:00");
        assert_eq!(obj["value"], 120.0);
        assert_eq!(obj["unit"], "ml");
        assert!(obj["end_time"].is_null());
        assert!(obj["note"].is_null());
        assert!(obj["details"].is_null());
    }

    #[test]
    fn test_member_profile_payload_shape() {
        let member = MemberProfile {
            email: "alice.johnson.123@example.com".to_string(),
            password: "Password123!".to_string(),
            profile: ProfileAttributes {
                full_name: "Alice Johnson".to_string(),
                role: "member".to_string(),
            },
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["email"], "alice.johnson.123@example.com");
        assert_eq!(json["data"]["full_name"], "Alice Johnson");
        assert_eq!(json["data"]["role"], "member");
    }
}
