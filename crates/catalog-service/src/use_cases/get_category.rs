//! Get category use case

use async_trait::async_trait;
use tracing::instrument;

use crate::dto::{CategoryOutput, GetCategoryRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::UseCase;

/// Get category by ID use case
pub struct GetCategory<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetCategory<'a> {
    /// Create a new GetCategory use case
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl UseCase for GetCategory<'_> {
    type Input = GetCategoryRequest;
    type Output = CategoryOutput;

    #[instrument(skip(self))]
    async fn execute(&self, input: GetCategoryRequest) -> ServiceResult<CategoryOutput> {
        let category = self.ctx.category_repo().get(input.id).await?;

        Ok(CategoryOutput::from(&category))
    }
}
