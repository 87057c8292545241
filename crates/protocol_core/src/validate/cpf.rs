//! CPF (Brazilian individual taxpayer id) check-digit validation.

use super::{digits_only, present_or_missing, FormatReason};

const CPF_LENGTH: usize = 11;

/// Validates a CPF and normalizes it to its 11 digits.
///
/// Dots, dashes and spaces are ignored.
pub fn validate_cpf(value: Option<&str>, required: bool) -> Result<Option<String>, FormatReason> {
    let Some(raw) = present_or_missing(value, required)? else {
        return Ok(None);
    };
    if raw.chars().any(|c| !(c.is_ascii_digit() || matches!(c, '.' | '-' | ' ' | '/'))) {
        return Err(FormatReason::InvalidCpf);
    }
    let digits = digits_only(raw);
    if !is_valid_cpf(&digits) {
        return Err(FormatReason::InvalidCpf);
    }
    Ok(Some(digits))
}

/// Checks an already digits-only CPF.
///
/// Sequences of one repeated digit pass the mod-11 arithmetic but are not
/// issued, so they are rejected.
pub fn is_valid_cpf(digits: &str) -> bool {
    if digits.len() != CPF_LENGTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let numbers: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
    if numbers.iter().all(|n| *n == numbers[0]) {
        return false;
    }

    let first = check_digit(&numbers[..9]);
    if numbers[9] != first {
        return false;
    }
    let second = check_digit(&numbers[..10]);
    numbers[10] == second
}

fn check_digit(prefix: &[u32]) -> u32 {
    let top_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(index, digit)| digit * (top_weight - index as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_cpf, validate_cpf};
    use crate::validate::FormatReason;

    #[test]
    fn accepts_valid_cpf_with_or_without_punctuation() {
        assert_eq!(
            validate_cpf(Some("529.982.247-25"), true),
            Ok(Some("52998224725".to_string()))
        );
        assert_eq!(
            validate_cpf(Some(" 11144477735 "), false),
            Ok(Some("11144477735".to_string()))
        );
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert_eq!(
            validate_cpf(Some("529.982.247-26"), true),
            Err(FormatReason::InvalidCpf)
        );
        assert!(!is_valid_cpf("11144477734"));
    }

    #[test]
    fn rejects_repeated_digits_and_wrong_length() {
        assert!(!is_valid_cpf("00000000000"));
        assert!(!is_valid_cpf("99999999999"));
        assert!(!is_valid_cpf("5299822472"));
        assert_eq!(
            validate_cpf(Some("529982247250"), false),
            Err(FormatReason::InvalidCpf)
        );
    }

    #[test]
    fn rejects_letters() {
        assert_eq!(
            validate_cpf(Some("529a982b24725"), false),
            Err(FormatReason::InvalidCpf)
        );
    }
}
