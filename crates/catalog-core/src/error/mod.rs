//! Domain error types

mod domain_error;
mod validation_error;

pub use domain_error::DomainError;
pub use validation_error::ValidationError;
