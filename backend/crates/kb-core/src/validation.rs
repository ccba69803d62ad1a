use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub fn sanitize_string(s: &str) -> String {
    s.trim().to_string()
}

/// Trim `value` and reject it when empty or longer than `max_length`
/// characters.
#[track_caller]
pub fn validate_required_text(value: &str, field: &str, max_length: usize) -> CoreResult<String> {
    let sanitized = sanitize_string(value);

    if sanitized.is_empty() {
        return Err(CoreError::Validation {
            message: format!("{field} is required"),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    check_length(&sanitized, field, max_length)?;

    Ok(sanitized)
}

/// Trim an optional value. Empty input stays empty so callers can use it
/// to clear the field.
#[track_caller]
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_length: usize,
) -> CoreResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => {
            let sanitized = sanitize_string(v);
            check_length(&sanitized, field, max_length)?;
            Ok(Some(sanitized))
        }
    }
}

#[track_caller]
fn check_length(value: &str, field: &str, max_length: usize) -> CoreResult<()> {
    let length = value.chars().count();
    if length > max_length {
        return Err(CoreError::Validation {
            message: format!("{field} must not exceed {max_length} characters (got {length})"),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
