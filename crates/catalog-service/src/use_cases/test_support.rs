//! Hand-rolled collaborator stubs with call counters

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use catalog_core::traits::{CategoryRepository, RepoResult, UnitOfWork};
use catalog_core::{Category, CategoryId, DomainError};

use super::context::ServiceContext;

#[derive(Default)]
pub struct StubCategoryRepository {
    pub insert_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub inserted: Mutex<Vec<Category>>,
    pub requested_ids: Mutex<Vec<CategoryId>>,
    /// Returned by `get` when set; otherwise `get` reports not found
    pub stored: Option<Category>,
    pub insert_error: Option<String>,
    pub get_error: Option<String>,
    pub insert_delay: Option<Duration>,
}

impl StubCategoryRepository {
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategoryRepository for StubCategoryRepository {
    async fn insert(&self, category: &Category) -> RepoResult<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.insert_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(msg) = &self.insert_error {
            return Err(DomainError::infrastructure(msg.clone()));
        }
        self.inserted.lock().unwrap().push(category.clone());
        Ok(())
    }

    async fn get(&self, id: CategoryId) -> RepoResult<Category> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids.lock().unwrap().push(id);
        if let Some(msg) = &self.get_error {
            return Err(DomainError::infrastructure(msg.clone()));
        }
        self.stored
            .clone()
            .ok_or(DomainError::CategoryNotFound(id))
    }
}

#[derive(Default)]
pub struct StubUnitOfWork {
    pub commit_calls: AtomicUsize,
    pub commit_error: Option<String>,
}

impl StubUnitOfWork {
    pub fn commit_calls(&self) -> usize {
        self.commit_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UnitOfWork for StubUnitOfWork {
    async fn commit(&self) -> RepoResult<()> {
        self.commit_calls.fetch_add(1, Ordering::SeqCst);
        match &self.commit_error {
            Some(msg) => Err(DomainError::infrastructure(msg.clone())),
            None => Ok(()),
        }
    }
}

pub fn context(
    repo: &Arc<StubCategoryRepository>,
    uow: &Arc<StubUnitOfWork>,
) -> ServiceContext {
    ServiceContext::new(repo.clone(), uow.clone())
}
