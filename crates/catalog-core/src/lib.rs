//! # catalog-core
//!
//! Domain layer containing the category aggregate, its validation rules,
//! the identifier value object, and the repository / unit-of-work ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::Category;
pub use error::{DomainError, ValidationError};
pub use traits::{CategoryRepository, RepoResult, UnitOfWork};
pub use value_objects::{CategoryId, CategoryIdParseError};
