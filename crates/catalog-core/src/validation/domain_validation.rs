//! Field-level validation rules
//!
//! Each helper returns `Ok(())` when the rule holds and a [`ValidationError`]
//! naming the field otherwise. Lengths are counted in characters, not bytes.

use crate::error::ValidationError;

/// Fails when the value is absent
pub fn not_null<T>(value: Option<T>, field: &str) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::Null {
            field: field.to_string(),
        }),
    }
}

/// Fails when the value is absent, empty, or whitespace only
pub fn not_null_or_empty(value: Option<&str>, field: &str) -> Result<(), ValidationError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::NullOrEmpty {
            field: field.to_string(),
        }),
    }
}

/// Fails when the value has fewer than `min` characters
pub fn min_length(value: &str, min: usize, field: &str) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }
    Ok(())
}

/// Fails when the value has more than `max` characters
pub fn max_length(value: &str, max: usize, field: &str) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}
