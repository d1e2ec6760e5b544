//! Field validation for voter input.
//!
//! Only the rules that need no storage lookup live here; the voter service
//! interleaves them with its email checks to keep the error precedence.

use crate::constants::{MIN_NAME_LENGTH, MIN_NAME_PARTS};
use crate::error::{DomainError, DomainResult};

/// True if the name has a first and a last part.
pub fn has_last_name(name: &str) -> bool {
    name.split_whitespace().nth(MIN_NAME_PARTS - 1).is_some()
}

/// Keep the value only if it is not blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Check a non-blank name for a last name and the minimum length.
pub fn validate_name(name: &str) -> DomainResult<()> {
    if !has_last_name(name) {
        return Err(DomainError::MissingLastName);
    }
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(DomainError::NameTooShort);
    }
    Ok(())
}

/// Check that the confirmation repeats the password exactly.
pub fn check_password_confirmation(password: &str, confirmation: Option<&str>) -> DomainResult<()> {
    if confirmation == Some(password) {
        Ok(())
    } else {
        Err(DomainError::PasswordMismatch)
    }
}
