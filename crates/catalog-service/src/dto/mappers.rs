//! Entity to DTO mappers

use catalog_core::Category;

use super::responses::CategoryOutput;

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}
