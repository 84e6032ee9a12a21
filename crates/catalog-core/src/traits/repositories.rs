//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Futures returned by these traits may be
//! dropped at any await point; that is how callers cancel them.

use async_trait::async_trait;

use crate::entities::Category;
use crate::error::DomainError;
use crate::value_objects::CategoryId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stage a new category for persistence
    async fn insert(&self, category: &Category) -> RepoResult<()>;

    /// Load a category by ID
    ///
    /// Returns `DomainError::CategoryNotFound` when no category has this ID.
    async fn get(&self, id: CategoryId) -> RepoResult<Category>;
}

// ============================================================================
// Unit of Work
// ============================================================================

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Make every write staged since the last commit durable
    async fn commit(&self) -> RepoResult<()>;
}
