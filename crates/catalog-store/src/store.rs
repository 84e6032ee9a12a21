//! Shared in-memory state behind the repository and unit of work

use std::sync::Arc;

use catalog_core::{Category, CategoryId};
use dashmap::DashMap;
use parking_lot::Mutex;

use crate::repositories::{InMemoryCategoryRepository, InMemoryUnitOfWork};

#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) committed: DashMap<CategoryId, Category>,
    pub(crate) pending: Mutex<Vec<Category>>,
}

/// In-memory category storage with staged writes.
///
/// Clones share the same state, so a repository and a unit of work created
/// from the same store see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that stages inserts into this store
    pub fn category_repository(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository::new(Arc::clone(&self.state))
    }

    /// Unit of work that commits this store's staged writes
    pub fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork::new(Arc::clone(&self.state))
    }

    /// Number of committed categories
    pub fn committed_len(&self) -> usize {
        self.state.committed.len()
    }

    /// Number of inserts waiting for a commit
    pub fn pending_len(&self) -> usize {
        self.state.pending.lock().len()
    }
}
