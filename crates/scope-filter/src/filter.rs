//! Saved filters
//!
//! Provides [`SavedFilter`], a named set of criteria that is either private
//! to its author or public and advertised in a [`FilterScope`].

use crate::chip::FilterChip;
use crate::error::FilterError;
use crate::scope::FilterScope;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Unique filter identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FilterId(pub Ulid);

impl FilterId {
    /// Generate new filter ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for FilterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a user (filter author, session owner)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create new user id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// String form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A named, saved set of filter criteria
///
/// Public filters always carry a non-empty scope; private filters carry
/// none. `highlight` is transient emphasis set on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFilter {
    /// Identifier
    #[serde(default)]
    pub id: FilterId,
    /// Display name (trimmed, never empty)
    pub name: String,
    /// Visible to other users
    pub is_public: bool,
    /// Where the filter is advertised (public filters only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spaces: Option<FilterScope>,
    /// Owning user
    pub author: UserId,
    /// Transient emphasis after creation
    #[serde(default)]
    pub highlight: bool,
    /// Criteria captured at save time
    #[serde(default)]
    pub chips: Vec<FilterChip>,
    /// Creation time
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl SavedFilter {
    /// Create a private filter
    ///
    /// # Errors
    /// [`FilterError::EmptyName`] if `name` is blank
    pub fn private(name: &str, author: UserId) -> Result<Self, FilterError> {
        Ok(Self::build(validate_name(name)?, false, None, author))
    }

    /// Create a public filter advertised in `spaces`
    ///
    /// # Errors
    /// - [`FilterError::EmptyName`] if `name` is blank
    /// - [`FilterError::EmptyPublicScope`] if `spaces` is empty
    pub fn public(name: &str, author: UserId, spaces: FilterScope) -> Result<Self, FilterError> {
        let name = validate_name(name)?;
        if spaces.is_empty() {
            return Err(FilterError::EmptyPublicScope { name });
        }
        Ok(Self::build(name, true, Some(spaces), author))
    }

    fn build(name: String, is_public: bool, spaces: Option<FilterScope>, author: UserId) -> Self {
        Self {
            id: FilterId::new(),
            name,
            is_public,
            spaces,
            author,
            highlight: true,
            chips: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// With criteria
    #[inline]
    #[must_use]
    pub fn with_chips(mut self, chips: Vec<FilterChip>) -> Self {
        self.chips = chips;
        self
    }

    /// Without the creation highlight
    #[inline]
    #[must_use]
    pub fn without_highlight(mut self) -> Self {
        self.highlight = false;
        self
    }

    /// Re-check the construction rules on a deserialized filter
    ///
    /// # Errors
    /// - [`FilterError::EmptyName`] if the name is blank
    /// - [`FilterError::EmptyPublicScope`] for a public filter with no space
    pub fn validate(&self) -> Result<(), FilterError> {
        validate_name(&self.name)?;
        if self.is_public && self.spaces.as_ref().map_or(true, FilterScope::is_empty) {
            return Err(FilterError::EmptyPublicScope {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// True if `user` authored this filter
    #[inline]
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.author == user
    }
}

pub(crate) fn validate_name(name: &str) -> Result<String, FilterError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FilterError::EmptyName);
    }
    Ok(trimmed.to_string())
}
