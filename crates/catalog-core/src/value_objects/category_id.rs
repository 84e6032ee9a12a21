//! Category identifier - random UUID assigned once when a category is created

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a [`Category`](crate::entities::Category)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generate a fresh random identifier
    #[inline]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero identifier, never produced by [`CategoryId::generate`]
    #[inline]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Wrap an existing UUID (e.g. one loaded from storage)
    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Check if this is the nil identifier
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Parse from the hyphenated (or simple) string representation
    pub fn parse(s: &str) -> Result<Self, CategoryIdParseError> {
        Uuid::parse_str(s)
            .map(CategoryId)
            .map_err(|_| CategoryIdParseError::InvalidFormat(s.to_string()))
    }
}

/// Error when parsing a CategoryId from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryIdParseError {
    #[error("invalid category id: {0}")]
    InvalidFormat(String),
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for CategoryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<CategoryId> for Uuid {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl std::str::FromStr for CategoryId {
    type Err = CategoryIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::parse(s)
    }
}
