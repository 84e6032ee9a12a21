//! Error helpers for the in-memory repositories

use catalog_core::{CategoryId, DomainError};

/// Create a "category not found" error
pub fn category_not_found(id: CategoryId) -> DomainError {
    DomainError::CategoryNotFound(id)
}

/// Duplicate key: reported as an infrastructure failure, like a unique violation
pub fn category_already_exists(id: CategoryId) -> DomainError {
    DomainError::infrastructure(format!("Category '{id}' already exists"))
}
