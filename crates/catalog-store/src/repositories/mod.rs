//! Repository implementations
//!
//! In-memory implementations of the traits defined in catalog-core.

mod category;
mod error;
mod unit_of_work;

pub use category::InMemoryCategoryRepository;
pub use unit_of_work::InMemoryUnitOfWork;
