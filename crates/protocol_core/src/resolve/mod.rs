//! Field resolution policy: alias lookup, defaults and scalar coercion.
//!
//! # Responsibility
//! - Find a logical field in an untyped payload through its ordered aliases.
//! - Inject declared defaults (static or computed) for absent fields.
//! - Coerce present values into typed `FieldValue`s.
//!
//! # Invariants
//! - Alias priority is the declaration order of the key list; payload key
//!   order never influences the result.
//! - `null` and blank strings count as absent.
//! - Coercion is only attempted on present values.

mod coerce;

pub use coerce::{
    coerce, parse_bool, parse_date, parse_datetime, parse_integer, parse_number, parse_text,
};

use crate::model::record::FieldValue;
use crate::model::submission::Payload;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Default applied when no alias of a field is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DefaultValue {
    /// Field stays unset.
    None,
    Text(&'static str),
    Integer(i64),
    Number(f64),
    Bool(bool),
    /// Current date (UTC) at materialization time.
    Today,
    /// Current instant at materialization time.
    Now,
}

impl DefaultValue {
    /// Produces the default for a materialization happening at `now`.
    pub fn value_at(self, now: DateTime<Utc>) -> Option<FieldValue> {
        match self {
            Self::None => None,
            Self::Text(value) => Some(FieldValue::Text(value.to_string())),
            Self::Integer(value) => Some(FieldValue::Integer(value)),
            Self::Number(value) => Some(FieldValue::Number(value)),
            Self::Bool(value) => Some(FieldValue::Bool(value)),
            Self::Today => Some(FieldValue::Date(now.date_naive())),
            Self::Now => Some(FieldValue::DateTime(now)),
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Returns whether a payload value counts as present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

/// Looks up the first present value among `keys`, in the given order.
pub fn resolve<'p, 'k>(
    payload: &'p Payload,
    keys: impl IntoIterator<Item = &'k str>,
) -> Option<&'p Value> {
    keys.into_iter()
        .filter_map(|key| payload.get(key))
        .find(|value| is_present(value))
}

/// Looks up a canonical field name first, then its aliases in order.
pub fn resolve_field<'p>(
    payload: &'p Payload,
    name: &str,
    aliases: &[&str],
) -> Option<&'p Value> {
    resolve(payload, std::iter::once(name).chain(aliases.iter().copied()))
}

/// Resolves a field and falls back to `default` when absent.
///
/// The default is only computed when no alias is present.
pub fn resolve_or_default(
    payload: &Payload,
    name: &str,
    aliases: &[&str],
    default: DefaultValue,
    now: DateTime<Utc>,
) -> Resolution {
    match resolve_field(payload, name, aliases) {
        Some(value) => Resolution::Present(value.clone()),
        None => match default.value_at(now) {
            Some(value) => Resolution::Defaulted(value),
            None => Resolution::Absent,
        },
    }
}

/// Outcome of resolving one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A payload value was found and still needs coercion.
    Present(Value),
    /// No payload value; the declared default was injected.
    Defaulted(FieldValue),
    Absent,
}

#[cfg(test)]
mod tests {
    use super::{resolve_field, resolve_or_default, DefaultValue, Resolution};
    use crate::model::record::FieldValue;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn payload(value: serde_json::Value) -> crate::model::submission::Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn alias_priority_follows_declaration_order_not_payload_order() {
        let data = payload(json!({"citizenName": "Joana", "patientName": "Maria"}));
        for _ in 0..5 {
            let value = resolve_field(&data, "patientName", &["citizenName"]);
            assert_eq!(value, Some(&json!("Maria")));
        }

        let reversed = resolve_field(&data, "citizenName", &["patientName"]);
        assert_eq!(reversed, Some(&json!("Joana")));
    }

    #[test]
    fn null_and_blank_values_fall_through_to_next_alias() {
        let data = payload(json!({"patientName": null, "citizenName": "  ", "name": "Ana"}));
        let value = resolve_field(&data, "patientName", &["citizenName", "name"]);
        assert_eq!(value, Some(&json!("Ana")));
    }

    #[test]
    fn absent_field_uses_default_without_touching_payload() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let data = payload(json!({"other": 1}));

        assert_eq!(
            resolve_or_default(&data, "status", &[], DefaultValue::Text("open"), now),
            Resolution::Defaulted(FieldValue::Text("open".to_string()))
        );
        assert_eq!(
            resolve_or_default(&data, "requestedOn", &[], DefaultValue::Today, now),
            Resolution::Defaulted(FieldValue::Date(now.date_naive()))
        );
        assert_eq!(
            resolve_or_default(&data, "notes", &[], DefaultValue::None, now),
            Resolution::Absent
        );
    }

    #[test]
    fn present_value_wins_over_default() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let data = payload(json!({"priority": "high"}));
        assert_eq!(
            resolve_or_default(&data, "priority", &[], DefaultValue::Text("normal"), now),
            Resolution::Present(json!("high"))
        );
    }
}
