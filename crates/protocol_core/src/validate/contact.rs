//! Email and phone shape validation.

use super::{digits_only, present_or_missing, FormatReason};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});
static PHONE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s().\-]+$").expect("valid phone charset regex"));

const COUNTRY_CODE: &str = "55";

/// Validates an email address and normalizes it to trimmed lowercase.
pub fn validate_email(value: Option<&str>, required: bool) -> Result<Option<String>, FormatReason> {
    let Some(raw) = present_or_missing(value, required)? else {
        return Ok(None);
    };
    normalize_email(raw).map(Some).ok_or(FormatReason::InvalidEmail)
}

pub fn normalize_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.contains("..") || !EMAIL_RE.is_match(trimmed) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Validates a Brazilian phone number and normalizes it to national digits
/// (area code + subscriber number).
///
/// Accepts an optional `+55` country prefix, landlines (10 digits) and
/// mobiles (11 digits, subscriber number starting with 9).
pub fn validate_phone(value: Option<&str>, required: bool) -> Result<Option<String>, FormatReason> {
    let Some(raw) = present_or_missing(value, required)? else {
        return Ok(None);
    };
    normalize_phone(raw).map(Some).ok_or(FormatReason::InvalidPhone)
}

pub fn normalize_phone(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if !PHONE_CHARS_RE.is_match(trimmed) {
        return None;
    }
    let mut digits = digits_only(trimmed);
    if (digits.len() == 12 || digits.len() == 13) && digits.starts_with(COUNTRY_CODE) {
        digits.drain(..COUNTRY_CODE.len());
    }

    let bytes = digits.as_bytes();
    let area_code_ok = bytes.len() >= 2 && bytes[0] != b'0' && bytes[1] != b'0';
    let shape_ok = match bytes.len() {
        10 => bytes[2] != b'0' && bytes[2] != b'9',
        11 => bytes[2] == b'9',
        _ => false,
    };
    if area_code_ok && shape_ok {
        Some(digits)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_phone, validate_email, validate_phone};
    use crate::validate::FormatReason;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(
            validate_email(Some("  Maria.Silva@Prefeitura.GOV.br "), true),
            Ok(Some("maria.silva@prefeitura.gov.br".to_string()))
        );
    }

    #[test]
    fn email_rejects_bad_shapes() {
        for bad in ["maria", "maria@", "@gov.br", "maria@gov", "ma ria@gov.br", "a..b@gov.br"] {
            assert_eq!(
                validate_email(Some(bad), false),
                Err(FormatReason::InvalidEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn phone_accepts_formatted_mobile_and_landline() {
        assert_eq!(
            validate_phone(Some("(11) 98765-4321"), true),
            Ok(Some("11987654321".to_string()))
        );
        assert_eq!(
            normalize_phone("+55 61 3312-4455").as_deref(),
            Some("6133124455")
        );
    }

    #[test]
    fn phone_rejects_wrong_lengths_and_letters() {
        assert_eq!(normalize_phone("98765-4321"), None);
        assert_eq!(normalize_phone("(11) 8765-432A"), None);
        assert_eq!(normalize_phone("(11) 88765-4321"), None);
        assert_eq!(normalize_phone("(01) 98765-4321"), None);
        assert_eq!(
            validate_phone(Some("123"), false),
            Err(FormatReason::InvalidPhone)
        );
    }
}
