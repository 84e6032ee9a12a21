//! Value objects - immutable types that represent domain concepts

mod category_id;

pub use category_id::{CategoryId, CategoryIdParseError};
