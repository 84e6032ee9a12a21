//! Category entity - the aggregate root of the catalog

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::validation::{max_length, min_length, not_null, not_null_or_empty};
use crate::value_objects::CategoryId;

/// Category aggregate.
///
/// Fields are private so every change goes through a validating operation:
/// an existing `Category` always satisfies its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    pub const NAME_MIN_LENGTH: usize = 3;
    pub const NAME_MAX_LENGTH: usize = 255;
    pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

    /// Create a new active category
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_status(name, description, true)
    }

    /// Create a new category with an explicit active flag
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        Self::from_input(Some(name.into()), Some(description.into()), is_active)
    }

    /// Create a new category from boundary input where fields may be missing.
    ///
    /// Rules run in a fixed order and the first failure is returned.
    pub fn from_input(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        Self::validate(name.as_deref(), description.as_deref())?;

        Ok(Self {
            id: CategoryId::generate(),
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            is_active,
            created_at: Utc::now(),
        })
    }

    /// Rebuild a category from persisted state without re-running validation
    pub fn restore(
        id: CategoryId,
        name: String,
        description: String,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_at,
        }
    }

    #[inline]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark the category as active
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Mark the category as inactive
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Replace the name, and the description when one is given.
    ///
    /// On error the category is left untouched.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let description = description.unwrap_or_else(|| self.description.clone());

        Self::validate(Some(&name), Some(&description))?;

        self.name = name;
        self.description = description;
        Ok(())
    }

    fn validate(name: Option<&str>, description: Option<&str>) -> Result<(), ValidationError> {
        not_null_or_empty(name, "Name")?;
        if let Some(name) = name {
            min_length(name, Self::NAME_MIN_LENGTH, "Name")?;
            max_length(name, Self::NAME_MAX_LENGTH, "Name")?;
        }

        not_null(description, "Description")?;
        if let Some(description) = description {
            max_length(description, Self::DESCRIPTION_MAX_LENGTH, "Description")?;
        }

        Ok(())
    }
}
