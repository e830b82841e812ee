//! Character name validation.
//!
//! This is the single place name rules live; profanity or charset checks
//! belong here.

use questline_core::error::DomainError;

/// Checks that `name` is acceptable as a character name.
///
/// # Errors
///
/// Returns `DomainError::InvalidArgument` if the name is blank or contains
/// control characters.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::invalid_argument(
            "character name must not be empty",
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(DomainError::invalid_argument(
            "character name must not contain control characters",
        ));
    }
    Ok(())
}
