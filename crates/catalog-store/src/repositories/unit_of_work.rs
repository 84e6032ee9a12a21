//! In-memory implementation of UnitOfWork

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use catalog_core::traits::{RepoResult, UnitOfWork};

use crate::store::StoreState;

/// Commits or discards the writes staged in an [`InMemoryStore`](crate::InMemoryStore)
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork {
    state: Arc<StoreState>,
}

impl InMemoryUnitOfWork {
    pub(crate) fn new(state: Arc<StoreState>) -> Self {
        Self { state }
    }

    /// Discard every staged write, returning how many were dropped
    #[instrument(skip(self))]
    pub fn rollback(&self) -> usize {
        let discarded = std::mem::take(&mut *self.state.pending.lock()).len();
        debug!(discarded, "Staged writes rolled back");
        discarded
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    #[instrument(skip(self))]
    async fn commit(&self) -> RepoResult<()> {
        // Held for the whole commit so no insert interleaves
        let mut pending = self.state.pending.lock();
        let count = pending.len();

        for category in pending.drain(..) {
            self.state.committed.insert(category.id(), category);
        }

        debug!(count, "Staged writes committed");
        Ok(())
    }
}
