//! Request DTOs for the category use cases

use catalog_core::CategoryId;
use serde::Deserialize;

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
///
/// A missing `description` defaults to an empty string while an explicit
/// `null` is kept as `None`, so the entity can reject it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_description")]
    pub description: Option<String>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_description() -> Option<String> {
    Some(String::new())
}

fn default_is_active() -> bool {
    true
}

impl CreateCategoryRequest {
    /// Request with only a name: empty description, active
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: default_description(),
            is_active: default_is_active(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Get category request
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GetCategoryRequest {
    pub id: CategoryId,
}

impl GetCategoryRequest {
    pub fn new(id: CategoryId) -> Self {
        Self { id }
    }
}
