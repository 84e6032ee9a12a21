//! Create category use case
//!
//! Validates through entity construction, stages the insert, then commits.

use async_trait::async_trait;
use catalog_core::Category;
use tracing::{info, instrument, warn};

use crate::dto::{CategoryOutput, CreateCategoryRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::UseCase;

/// Create category use case
pub struct CreateCategory<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CreateCategory<'a> {
    /// Create a new CreateCategory use case
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl UseCase for CreateCategory<'_> {
    type Input = CreateCategoryRequest;
    type Output = CategoryOutput;

    #[instrument(skip(self, input), fields(name = ?input.name))]
    async fn execute(&self, input: CreateCategoryRequest) -> ServiceResult<CategoryOutput> {
        // Invalid input stops here, before any persistence call
        let category = Category::from_input(input.name, input.description, input.is_active)?;

        self.ctx
            .category_repo()
            .insert(&category)
            .await
            .inspect_err(|e| warn!(category_id = %category.id(), error = %e, "Category insert failed"))?;

        self.ctx
            .unit_of_work()
            .commit()
            .await
            .inspect_err(|e| warn!(category_id = %category.id(), error = %e, "Commit failed"))?;

        info!(category_id = %category.id(), "Category created successfully");

        Ok(CategoryOutput::from(&category))
    }
}
