//! In-memory saved-filter collection
//!
//! Provides [`FilterLibrary`], shared between the session and background
//! tasks (highlight reset), hence interior locking.

use crate::error::FilterError;
use crate::filter::{validate_name, FilterId, SavedFilter, UserId};
use crate::permissions::{can_delete, can_edit};
use indexmap::IndexMap;
use parking_lot::RwLock;
use scope_tree::SpaceForest;
use serde::Serialize;

/// Filters listed by the filter panel for one viewer and space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterListing {
    /// Private filters authored by the viewer
    pub personal: Vec<SavedFilter>,
    /// Public filters visible from the current space
    pub public: Vec<SavedFilter>,
}

impl FilterListing {
    /// Total number of listed filters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.personal.len() + self.public.len()
    }

    /// True if nothing is listed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.personal.is_empty() && self.public.is_empty()
    }
}

/// Insertion-ordered collection of saved filters
///
/// Reads hand out clones so no lock is held by callers.
#[derive(Debug, Default)]
pub struct FilterLibrary {
    filters: RwLock<IndexMap<FilterId, SavedFilter>>,
}

impl FilterLibrary {
    /// Empty library
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Library pre-populated with `filters`
    #[must_use]
    pub fn with_filters(filters: impl IntoIterator<Item = SavedFilter>) -> Self {
        let library = Self::new();
        for filter in filters {
            library.restore(filter);
        }
        library
    }

    /// Add or replace a newly saved filter; returns its id
    ///
    /// Counted in `scope_filters_saved_total`.
    pub fn insert(&self, filter: SavedFilter) -> FilterId {
        let id = filter.id;
        tracing::info!(filter_id = %id, name = %filter.name, public = filter.is_public, "saved filter");
        metrics::counter!("scope_filters_saved_total").increment(1);
        self.filters.write().insert(id, filter);
        id
    }

    /// Add or replace a filter loaded from persisted state; returns its id
    ///
    /// Not counted as a save.
    pub fn restore(&self, filter: SavedFilter) -> FilterId {
        let id = filter.id;
        tracing::debug!(filter_id = %id, name = %filter.name, "restored filter");
        self.filters.write().insert(id, filter);
        id
    }

    /// Clone of a filter
    #[must_use]
    pub fn get(&self, id: FilterId) -> Option<SavedFilter> {
        self.filters.read().get(&id).cloned()
    }

    /// Every filter in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<SavedFilter> {
        self.filters.read().values().cloned().collect()
    }

    /// Number of filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.read().len()
    }

    /// True if the library is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.read().is_empty()
    }

    /// Delete a filter on behalf of `user`
    ///
    /// Permission follows [`can_delete`]: a private filter is deleted for
    /// any caller holding its id, and [`visible_from`](Self::visible_from)
    /// only lists private filters to their author.
    ///
    /// # Errors
    /// - [`FilterError::NotFound`] for an unknown id
    /// - [`FilterError::NotPermitted`] if `user` may not delete it
    pub fn delete(&self, id: FilterId, user: &UserId) -> Result<SavedFilter, FilterError> {
        let mut filters = self.filters.write();
        let filter = filters.get(&id).ok_or(FilterError::NotFound(id))?;
        if !can_delete(filter, user) {
            tracing::warn!(filter_id = %id, user = %user, "delete refused");
            return Err(FilterError::NotPermitted {
                id,
                user: user.to_string(),
            });
        }
        let removed = filters.shift_remove(&id).ok_or(FilterError::NotFound(id))?;
        drop(filters);

        tracing::info!(filter_id = %id, "deleted filter");
        metrics::counter!("scope_filters_deleted_total").increment(1);
        Ok(removed)
    }

    /// Rename a filter on behalf of `user`
    ///
    /// # Errors
    /// - [`FilterError::EmptyName`] if `name` is blank
    /// - [`FilterError::NotFound`] for an unknown id
    /// - [`FilterError::NotPermitted`] if `user` may not edit it
    pub fn rename(&self, id: FilterId, user: &UserId, name: &str) -> Result<(), FilterError> {
        let name = validate_name(name)?;
        let mut filters = self.filters.write();
        let filter = filters.get_mut(&id).ok_or(FilterError::NotFound(id))?;
        if !can_edit(filter, user) {
            return Err(FilterError::NotPermitted {
                id,
                user: user.to_string(),
            });
        }
        filter.name = name;
        Ok(())
    }

    /// Clear the creation highlight
    ///
    /// Returns false when the filter no longer exists; that is not an error.
    pub fn clear_highlight(&self, id: FilterId) -> bool {
        match self.filters.write().get_mut(&id) {
            Some(filter) => {
                filter.highlight = false;
                true
            }
            None => {
                tracing::debug!(filter_id = %id, "highlight reset for deleted filter ignored");
                false
            }
        }
    }

    /// Filters the panel lists for `viewer` while in `current`
    ///
    /// Personal: the viewer's private filters. Public: every public filter
    /// visible from `current`. Both keep insertion order.
    #[must_use]
    pub fn visible_from(&self, forest: &SpaceForest, current: &str, viewer: &UserId) -> FilterListing {
        let filters = self.filters.read();
        let mut listing = FilterListing::default();
        for filter in filters.values() {
            if filter.is_public {
                if filter.is_visible_from(forest, current) {
                    listing.public.push(filter.clone());
                }
            } else if filter.is_owned_by(viewer) {
                listing.personal.push(filter.clone());
            }
        }
        listing
    }
}
