//! Parameter checks run before a query touches the network.

use crate::error::KrogerError;

const ZIP_CODE_LEN: usize = 5;

/// Counts the characters in `s` that are ASCII decimal digits.
#[must_use]
pub fn count_digits(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

/// A zip code is valid when it is exactly five characters, all digits.
#[must_use]
pub fn is_valid_zip_code(zip_code: &str) -> bool {
    let digits = count_digits(zip_code);
    digits == ZIP_CODE_LEN && digits == zip_code.len()
}

/// Rejects an empty required string parameter.
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<(), KrogerError> {
    if value.is_empty() {
        return Err(KrogerError::validation(format!(
            "parameter '{name}' is required"
        )));
    }
    Ok(())
}

pub(crate) fn check_zip_code(zip_code: &str) -> Result<(), KrogerError> {
    require_non_empty("zipCode", zip_code)?;
    if !is_valid_zip_code(zip_code) {
        return Err(KrogerError::validation(format!(
            "parameter 'zipCode' value '{zip_code}' is invalid. Must be a number with {ZIP_CODE_LEN} digits (got {} characters, {} digits)",
            zip_code.chars().count(),
            count_digits(zip_code),
        )));
    }
    Ok(())
}

/// Checks that `value` lies in the inclusive range `[min, max]`.
///
/// # Errors
///
/// Returns [`KrogerError::Validation`] naming the parameter and the valid range.
pub fn check_range(name: &str, value: i32, min: i32, max: i32) -> Result<(), KrogerError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(KrogerError::validation(format!(
            "parameter '{name}' value {value} is invalid. Valid values are {min} to {max}"
        )))
    }
}
