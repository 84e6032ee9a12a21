//! Service context - dependency container for use cases
//!
//! Holds the repository and unit of work the use cases run against.

use std::sync::Arc;

use catalog_core::traits::{CategoryRepository, UnitOfWork};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every collaborator is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    category_repo: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            category_repo,
            unit_of_work,
        }
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the unit of work
    pub fn unit_of_work(&self) -> &dyn UnitOfWork {
        self.unit_of_work.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("category_repo", &"dyn CategoryRepository")
            .field("unit_of_work", &"dyn UnitOfWork")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    category_repo: Option<Arc<dyn CategoryRepository>>,
    unit_of_work: Option<Arc<dyn UnitOfWork>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn unit_of_work(mut self, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        self.unit_of_work = Some(unit_of_work);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Infrastructure` naming the first missing dependency
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.category_repo
                .ok_or_else(|| ServiceError::infrastructure("category_repo is required"))?,
            self.unit_of_work
                .ok_or_else(|| ServiceError::infrastructure("unit_of_work is required"))?,
        ))
    }
}
