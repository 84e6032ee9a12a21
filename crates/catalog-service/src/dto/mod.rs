//! Data transfer objects for use case inputs and outputs
//!
//! - Request DTOs carrying caller input (with serde defaults)
//! - The `CategoryOutput` projection returned by every use case
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateCategoryRequest, GetCategoryRequest};
pub use responses::CategoryOutput;
