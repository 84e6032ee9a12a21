//! Response DTOs returned by the category use cases
//!
//! Outputs implement `Serialize` so an outer transport can emit them as JSON.

use catalog_core::CategoryId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-only snapshot of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
