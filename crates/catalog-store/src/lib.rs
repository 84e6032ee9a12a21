//! # catalog-store
//!
//! In-memory implementation of the repository ports defined in `catalog-core`.
//!
//! ## Overview
//!
//! - `InMemoryStore` owns committed categories and a buffer of staged writes
//! - `InMemoryCategoryRepository` stages inserts and reads committed state
//! - `InMemoryUnitOfWork` commits or rolls back the staged writes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use catalog_store::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! let repo = Arc::new(store.category_repository());
//! let uow = Arc::new(store.unit_of_work());
//! ```

pub mod repositories;
mod store;

pub use repositories::{InMemoryCategoryRepository, InMemoryUnitOfWork};
pub use store::InMemoryStore;
