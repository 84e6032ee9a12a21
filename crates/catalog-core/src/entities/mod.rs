//! Domain entities - core business objects

mod category;

pub use category::Category;
