//! Category use cases
//!
//! Each use case borrows a [`ServiceContext`], runs one request against the
//! injected collaborators, and returns a [`CategoryOutput`](crate::dto::CategoryOutput).
//! Dropping the future returned by `execute` cancels the collaborator call
//! in flight; no further step runs.

pub mod context;
pub mod create_category;
pub mod error;
pub mod get_category;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use create_category::CreateCategory;
pub use error::{ServiceError, ServiceResult};
pub use get_category::GetCategory;

/// A single application operation: one input in, one output or error back
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output: Send;

    async fn execute(&self, input: Self::Input) -> ServiceResult<Self::Output>;
}
