//! # catalog-service
//!
//! Application layer containing the category use cases, their request and
//! output DTOs, and the service error type.

pub mod dto;
pub mod use_cases;

pub use dto::{CategoryOutput, CreateCategoryRequest, GetCategoryRequest};
pub use use_cases::{
    CreateCategory, GetCategory, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UseCase,
};
