//! Input validation shared by every insert/update payload.

use thiserror::Error;

/// Payload validation failure. The field name is the camelCase wire name so
/// error messages match what the caller actually sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Reject empty required string fields.
pub fn required_str(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

/// Like [`required_str`], but only when the field is present at all.
/// Partial updates leave absent fields unchecked.
pub fn required_str_opt(
    value: Option<&String>,
    field: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => required_str(value, field),
        None => Ok(()),
    }
}
