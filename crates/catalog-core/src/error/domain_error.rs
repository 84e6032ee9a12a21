//! Domain errors - error types for the domain layer

use thiserror::Error;

use super::ValidationError;
use crate::value_objects::CategoryId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Category '{0}' not found")]
    CategoryNotFound(CategoryId),

    // =========================================================================
    // Infrastructure Errors (opaque, message kept verbatim)
    // =========================================================================
    #[error("{0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Wrap any collaborator failure as an infrastructure error
    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::Infrastructure(_) => "INFRASTRUCTURE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from a persistence collaborator
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Infrastructure(_))
    }
}
