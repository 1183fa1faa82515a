//! Common validation and formatting utilities.

use validator::ValidationError;

/// Number of digits in a CNPJ (company tax id).
const TAX_ID_DIGITS: usize = 14;

/// Allowed phone lengths once formatting is stripped (landline, mobile).
const PHONE_DIGITS: [usize; 2] = [10, 11];

lazy_static::lazy_static! {
    static ref STATE_CODE_REGEX: regex::Regex = regex::Regex::new(r"^[A-Z]{2}$").unwrap();
    static ref REFERENCE_PERIOD_REGEX: regex::Regex =
        regex::Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])$").unwrap();
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Strips every non-digit character.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Validates a two-letter uppercase state code (e.g. "SP").
pub fn validate_state_code(state: &str) -> Result<(), ValidationError> {
    if STATE_CODE_REGEX.is_match(state) {
        Ok(())
    } else {
        Err(error(
            "state_code",
            "State must be a two-letter uppercase code",
        ))
    }
}

/// Validates a company tax id. Formatting characters are ignored.
pub fn validate_tax_id(tax_id: &str) -> Result<(), ValidationError> {
    if digits_only(tax_id).len() == TAX_ID_DIGITS {
        Ok(())
    } else {
        Err(error("tax_id", "Tax id must contain 14 digits"))
    }
}

/// Validates a phone number with area code. Formatting characters are ignored.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_DIGITS.contains(&digits_only(phone).len()) {
        Ok(())
    } else {
        Err(error("phone", "Phone must contain 10 or 11 digits"))
    }
}

/// Validates a billing reference period in `YYYY-MM` form.
pub fn validate_reference_period(period: &str) -> Result<(), ValidationError> {
    if REFERENCE_PERIOD_REGEX.is_match(period) {
        Ok(())
    } else {
        Err(error(
            "reference_period",
            "Reference period must be in YYYY-MM format",
        ))
    }
}

/// Formats a 14-digit tax id as `NN.NNN.NNN/NNNN-NN`.
///
/// Anything that is not exactly 14 digits after normalization is returned as given.
pub fn format_tax_id(tax_id: &str) -> String {
    let d = digits_only(tax_id);
    if d.len() != TAX_ID_DIGITS {
        return tax_id.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[0..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    )
}

/// Formats a phone as `(NN) NNNNN-NNNN` or `(NN) NNNN-NNNN`.
///
/// Anything that is not 10 or 11 digits after normalization is returned as given.
pub fn format_phone(phone: &str) -> String {
    let d = digits_only(phone);
    match d.len() {
        11 => format!("({}) {}-{}", &d[0..2], &d[2..7], &d[7..11]),
        10 => format!("({}) {}-{}", &d[0..2], &d[2..6], &d[6..10]),
        _ => phone.to_string(),
    }
}
