//! Pure format validators for scalar field values.
//!
//! # Responsibility
//! - Check and normalize national-id (CPF), email and phone values.
//! - Report a stable, inspectable reason when a value is rejected.
//!
//! # Invariants
//! - Validators are pure and side-effect free.
//! - Input is accepted punctuation-agnostic; output is the normalized form.
//! - An absent value passes through unchanged unless it is required.

mod contact;
mod cpf;

pub use contact::{normalize_email, normalize_phone, validate_email, validate_phone};
pub use cpf::{is_valid_cpf, validate_cpf};

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Format validator attached to a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Cpf,
    Email,
    Phone,
}

impl Format {
    /// Applies this validator with the field's required flag.
    pub fn validate(self, value: Option<&str>, required: bool) -> Result<Option<String>, FormatReason> {
        match self {
            Self::Cpf => validate_cpf(value, required),
            Self::Email => validate_email(value, required),
            Self::Phone => validate_phone(value, required),
        }
    }
}

/// Why a present value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatReason {
    Missing,
    InvalidCpf,
    InvalidEmail,
    InvalidPhone,
    NotText,
    NotANumber,
    NotAnInteger,
    NotABoolean,
    NotADate,
    NotADateTime,
    InvalidReference,
}

impl FormatReason {
    pub fn code(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::InvalidCpf => "invalid_cpf",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPhone => "invalid_phone",
            Self::NotText => "not_text",
            Self::NotANumber => "not_a_number",
            Self::NotAnInteger => "not_an_integer",
            Self::NotABoolean => "not_a_boolean",
            Self::NotADate => "not_a_date",
            Self::NotADateTime => "not_a_datetime",
            Self::InvalidReference => "invalid_reference",
        }
    }
}

impl Display for FormatReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::Missing => "value is required",
            Self::InvalidCpf => "value is not a valid CPF",
            Self::InvalidEmail => "value is not a valid email address",
            Self::InvalidPhone => "value is not a valid phone number",
            Self::NotText => "value is not text",
            Self::NotANumber => "value is not a number",
            Self::NotAnInteger => "value is not an integer",
            Self::NotABoolean => "value is not a boolean",
            Self::NotADate => "value is not a date",
            Self::NotADateTime => "value is not a date-time",
            Self::InvalidReference => "value is not a record reference",
        };
        f.write_str(message)
    }
}

/// Shared absent/required gate for every validator.
///
/// Returns `Ok(None)` when the value is absent and optional, `Ok(Some(_))`
/// with the trimmed value when present.
fn present_or_missing(value: Option<&str>, required: bool) -> Result<Option<&str>, FormatReason> {
    match value.map(str::trim).filter(|trimmed| !trimmed.is_empty()) {
        Some(trimmed) => Ok(Some(trimmed)),
        None if required => Err(FormatReason::Missing),
        None => Ok(None),
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::{Format, FormatReason};

    #[test]
    fn absent_optional_value_passes_through() {
        for format in [Format::Cpf, Format::Email, Format::Phone] {
            assert_eq!(format.validate(None, false), Ok(None));
            assert_eq!(format.validate(Some("   "), false), Ok(None));
        }
    }

    #[test]
    fn absent_required_value_is_missing() {
        for format in [Format::Cpf, Format::Email, Format::Phone] {
            assert_eq!(format.validate(None, true), Err(FormatReason::Missing));
        }
    }

    #[test]
    fn malformed_value_fails_even_when_optional() {
        assert_eq!(
            Format::Email.validate(Some("not-an-email"), false),
            Err(FormatReason::InvalidEmail)
        );
    }
}
