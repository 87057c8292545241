//! Materialized record output shapes.
//!
//! # Responsibility
//! - Define typed attribute values produced from untyped payload entries.
//! - Define the write draft handed to the persistence boundary and the
//!   record it returns.
//!
//! # Invariants
//! - `RecordDraft` and `MaterializedRecord` always carry `tenant_id` and
//!   `protocol_id` copied verbatim from the submission.
//! - Records are never mutated by core after creation.

use crate::model::kind::EntityKind;
use crate::model::submission::{ProtocolId, TenantId};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable identifier assigned to every created record.
pub type RecordId = Uuid;

/// Normalized attribute value after coercion and format validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    /// JSON form used for persisted attribute blobs.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(value) => Value::String(value.clone()),
            Self::Integer(value) => Value::from(*value),
            Self::Number(value) => Value::from(*value),
            Self::Bool(value) => Value::Bool(*value),
            Self::Date(value) => Value::String(value.format("%Y-%m-%d").to_string()),
            Self::DateTime(value) => {
                Value::String(value.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

/// Attribute set keyed by canonical field name.
pub type Attributes = BTreeMap<String, FieldValue>;

/// Fully validated write request for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDraft {
    pub kind: EntityKind,
    pub tenant_id: TenantId,
    pub protocol_id: ProtocolId,
    pub protocol_number: Option<String>,
    pub status: String,
    pub attributes: Attributes,
}

/// Record returned by the persistence boundary after the single write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterializedRecord {
    pub id: RecordId,
    pub kind: EntityKind,
    pub tenant_id: TenantId,
    pub protocol_id: ProtocolId,
    pub protocol_number: Option<String>,
    pub status: String,
    pub attributes: Attributes,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl MaterializedRecord {
    pub fn attribute(&self, name: &str) -> Option<&FieldValue> {
        self.attributes.get(name)
    }
}

/// Minimal view of an existing record used for relation checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencedRecord {
    pub id: String,
    pub kind: EntityKind,
    pub tenant_id: TenantId,
}

#[cfg(test)]
mod tests {
    use super::FieldValue;
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn to_json_uses_iso_dates() {
        let date = FieldValue::Date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(date.to_json(), json!("2024-03-09"));

        let at = FieldValue::DateTime(Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap());
        assert_eq!(at.to_json(), json!("2024-03-09T12:30:00.000Z"));
    }

    #[test]
    fn integers_widen_to_numbers() {
        assert_eq!(FieldValue::Integer(7).as_number(), Some(7.0));
        assert_eq!(FieldValue::Number(7.5).as_integer(), None);
    }

    #[test]
    fn accessors_only_match_their_own_variant() {
        assert_eq!(FieldValue::Bool(false).as_bool(), Some(false));
        assert_eq!(FieldValue::Integer(1).as_bool(), None);
        assert_eq!(FieldValue::Text("true".to_string()).as_bool(), None);
    }
}
