//! Saved-filter errors

use crate::filter::FilterId;

/// Errors raised while creating, editing or deleting saved filters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Name is empty after trimming
    #[error("filter name cannot be empty")]
    EmptyName,

    /// Public filter with no space selected
    #[error("public filter '{name}' must be visible in at least one space")]
    EmptyPublicScope { name: String },

    /// Current user may not publish filters
    #[error("user '{user}' is not allowed to save public filters")]
    PublicFilterForbidden { user: String },

    /// No filter with this id
    #[error("filter not found: {0}")]
    NotFound(FilterId),

    /// Current user may not modify this filter
    #[error("user '{user}' may not modify filter {id}")]
    NotPermitted { id: FilterId, user: String },
}
