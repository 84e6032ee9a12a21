//! Validation errors raised when an entity invariant is violated

use thiserror::Error;

/// A single violated field rule.
///
/// The display text is part of the public contract; callers and tests match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} should not be null")]
    Null { field: String },

    #[error("{field} should not be empty or null")]
    NullOrEmpty { field: String },

    #[error("{field} should be at leasts {min} characters long")]
    TooShort { field: String, min: usize },

    #[error("{field} should be greater than {max} characters long")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            Self::Null { field }
            | Self::NullOrEmpty { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. } => field,
        }
    }
}
