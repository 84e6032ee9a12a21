//! Field validation helpers shared by domain entities

mod domain_validation;

pub use domain_validation::{max_length, min_length, not_null, not_null_or_empty};
