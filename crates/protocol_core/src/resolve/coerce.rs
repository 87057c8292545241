//! Scalar coercion from untyped JSON payload values.

use crate::model::record::FieldValue;
use crate::schema::FieldType;
use crate::validate::FormatReason;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// `1.234` or `12.345.678`: dots group thousands.
static GROUPED_THOUSANDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d{1,3}(?:\.\d{3})+$").expect("valid thousands regex"));
/// `1.234,56` or `10,75`: comma decimal mark, optional dot grouping.
static DECIMAL_COMMA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d{1,3}(?:\.\d{3})+|\d+),\d+$").expect("valid decimal comma regex")
});

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Coerces a present payload value into the declared field type.
pub fn coerce(field_type: FieldType, value: &Value) -> Result<FieldValue, FormatReason> {
    match field_type {
        FieldType::Text => parse_text(value)
            .map(FieldValue::Text)
            .ok_or(FormatReason::NotText),
        FieldType::Integer => parse_integer(value)
            .map(FieldValue::Integer)
            .ok_or(FormatReason::NotAnInteger),
        FieldType::Number => parse_number(value)
            .map(FieldValue::Number)
            .ok_or(FormatReason::NotANumber),
        FieldType::Bool => parse_bool(value)
            .map(FieldValue::Bool)
            .ok_or(FormatReason::NotABoolean),
        FieldType::Date => parse_date(value)
            .map(FieldValue::Date)
            .ok_or(FormatReason::NotADate),
        FieldType::DateTime => parse_datetime(value)
            .map(FieldValue::DateTime)
            .ok_or(FormatReason::NotADateTime),
    }
}

/// Strings are trimmed; numbers and booleans are rendered as text.
pub fn parse_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Accepts JSON numbers and numeric strings.
///
/// A comma is always the decimal mark (`1.234,5` is 1234.5). Without a comma
/// a single dot is a decimal point (`1.234` is 1.234), while two or more
/// well-formed dot groups are thousands (`1.234.567`).
pub fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_decimal_text(text.trim()),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Accepts integral JSON numbers and integral numeric strings.
///
/// Dotted strings are read as grouped thousands only (`1.000` is 1000);
/// `1.5` or `1.0` are rejected rather than truncated.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let trimmed = text.trim();
            if let Ok(parsed) = trimmed.parse::<i64>() {
                return Some(parsed);
            }
            if GROUPED_THOUSANDS_RE.is_match(trimmed) {
                return trimmed.replace('.', "").parse::<i64>().ok();
            }
            if DECIMAL_COMMA_RE.is_match(trimmed) {
                return parse_decimal_text(trimmed).and_then(integral);
            }
            None
        }
        _ => None,
    }
}

pub fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(text) => match text.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" | "sim" | "s" => Some(true),
            "false" | "0" | "no" | "n" | "nao" | "não" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Accepts ISO dates, `dd/mm/yyyy`, `dd-mm-yyyy` and RFC 3339 timestamps
/// (date part only).
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc).date_naive())
        })
}

/// Accepts RFC 3339, naive date-times (read as UTC), plain dates (midnight
/// UTC) and integer epoch milliseconds.
pub fn parse_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        Value::String(text) => {
            let trimmed = text.trim();
            if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
                return Some(parsed.with_timezone(&Utc));
            }
            if let Some(naive) = DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            {
                return Some(naive.and_utc());
            }
            parse_date(value)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        }
        _ => None,
    }
}

fn parse_decimal_text(text: &str) -> Option<f64> {
    if DECIMAL_COMMA_RE.is_match(text) {
        return text.replace('.', "").replace(',', ".").parse::<f64>().ok();
    }
    if GROUPED_THOUSANDS_RE.is_match(text) && text.matches('.').count() > 1 {
        return text.replace('.', "").parse::<f64>().ok();
    }
    text.parse::<f64>().ok()
}

fn integral(float: f64) -> Option<i64> {
    (float.fract() == 0.0 && float.abs() < i64::MAX as f64).then_some(float as i64)
}

#[cfg(test)]
mod tests {
    use super::{coerce, parse_bool, parse_date, parse_datetime, parse_integer, parse_number};
    use crate::model::record::FieldValue;
    use crate::schema::FieldType;
    use crate::validate::FormatReason;
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn numbers_accept_strings_and_decimal_comma() {
        assert_eq!(parse_number(&json!(10)), Some(10.0));
        assert_eq!(parse_number(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(parse_number(&json!("1.234,5")), Some(1234.5));
        assert_eq!(parse_number(&json!("10,75")), Some(10.75));
        assert_eq!(parse_number(&json!("ten")), None);
        assert_eq!(parse_number(&json!("NaN")), None);
        assert_eq!(parse_number(&json!(true)), None);
    }

    #[test]
    fn integers_reject_fractions() {
        assert_eq!(parse_integer(&json!(4)), Some(4));
        assert_eq!(parse_integer(&json!(4.0)), Some(4));
        assert_eq!(parse_integer(&json!("12")), Some(12));
        assert_eq!(parse_integer(&json!(4.5)), None);
        assert_eq!(parse_integer(&json!("4,5")), None);
        assert_eq!(parse_integer(&json!("1.5")), None);
        assert_eq!(parse_integer(&json!("1.0")), None);
    }

    #[test]
    fn integers_read_dot_groups_as_thousands() {
        assert_eq!(parse_integer(&json!("1.000")), Some(1000));
        assert_eq!(parse_integer(&json!("12.345")), Some(12345));
        assert_eq!(parse_integer(&json!("1.234.567")), Some(1_234_567));
        assert_eq!(parse_integer(&json!("1.000,00")), Some(1000));
        assert_eq!(parse_integer(&json!("-2.500")), Some(-2500));
        assert_eq!(parse_integer(&json!("1.00")), None);
        assert_eq!(parse_integer(&json!("12.34.567")), None);
        assert_eq!(
            coerce(FieldType::Integer, &json!("1.5")),
            Err(FormatReason::NotAnInteger)
        );
    }

    #[test]
    fn numbers_treat_a_single_dot_as_decimal_point() {
        assert_eq!(parse_number(&json!("1.234")), Some(1.234));
        assert_eq!(parse_number(&json!("1.234.567")), Some(1_234_567.0));
        assert_eq!(parse_number(&json!("1.234,0")), Some(1234.0));
        assert_eq!(parse_number(&json!("1,2,3")), None);
        assert_eq!(parse_number(&json!("")), None);
    }

    #[test]
    fn booleans_accept_portuguese_and_english_words() {
        assert_eq!(parse_bool(&json!("Sim")), Some(true));
        assert_eq!(parse_bool(&json!("não")), Some(false));
        assert_eq!(parse_bool(&json!(0)), Some(false));
        assert_eq!(parse_bool(&json!("maybe")), None);
    }

    #[test]
    fn dates_accept_iso_and_brazilian_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_date(&json!("2024-02-29")), Some(expected));
        assert_eq!(parse_date(&json!("29/02/2024")), Some(expected));
        assert_eq!(parse_date(&json!("2024-02-29T23:00:00Z")), Some(expected));
        assert_eq!(parse_date(&json!("2023-02-29")), None);
        assert_eq!(parse_date(&json!(20240229)), None);
    }

    #[test]
    fn datetimes_accept_rfc3339_naive_and_epoch_millis() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 10, 14, 30, 0).unwrap();
        assert_eq!(parse_datetime(&json!("2024-06-10T11:30:00-03:00")), Some(expected));
        assert_eq!(parse_datetime(&json!("2024-06-10 14:30")), Some(expected));
        assert_eq!(
            parse_datetime(&json!(expected.timestamp_millis())),
            Some(expected)
        );
        assert_eq!(
            parse_datetime(&json!("2024-06-10")),
            Some(Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn coerce_reports_type_specific_reason() {
        assert_eq!(
            coerce(FieldType::Number, &json!("abc")),
            Err(FormatReason::NotANumber)
        );
        assert_eq!(
            coerce(FieldType::Text, &json!({"nested": true})),
            Err(FormatReason::NotText)
        );
        assert_eq!(
            coerce(FieldType::Integer, &json!("7")),
            Ok(FieldValue::Integer(7))
        );
    }
}
