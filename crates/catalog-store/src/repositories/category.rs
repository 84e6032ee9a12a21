//! In-memory implementation of CategoryRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use catalog_core::traits::{CategoryRepository, RepoResult};
use catalog_core::{Category, CategoryId};

use crate::store::StoreState;

use super::error::{category_already_exists, category_not_found};

/// In-memory implementation of CategoryRepository
///
/// Inserts are staged until the matching unit of work commits; reads only
/// see committed categories.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    state: Arc<StoreState>,
}

impl InMemoryCategoryRepository {
    pub(crate) fn new(state: Arc<StoreState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    #[instrument(skip(self, category), fields(category_id = %category.id()))]
    async fn insert(&self, category: &Category) -> RepoResult<()> {
        let id = category.id();
        let mut pending = self.state.pending.lock();

        if self.state.committed.contains_key(&id) || pending.iter().any(|c| c.id() == id) {
            return Err(category_already_exists(id));
        }

        pending.push(category.clone());
        debug!(pending = pending.len(), "Category staged");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: CategoryId) -> RepoResult<Category> {
        self.state
            .committed
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| category_not_found(id))
    }
}
