//! Scope session
//!
//! Ties the hierarchy, the user directory and the filter library together
//! for one acting user: sidebar pruning, filter listing, the space picker
//! and the save/delete flows.

use crate::config::{ScopeConfig, WorkspaceFile};
use crate::error::ScopeError;
use crate::users::{UserDirectory, UserProfile};
use indexmap::IndexSet;
use scope_filter::{
    can_edit, ChipSet, FilterError, FilterId, FilterLibrary, FilterListing, FilterScope,
    SavedFilter,
};
use scope_picker::ScopePicker;
use scope_tree::{SpaceForest, SpaceId};
use std::path::Path;
use std::sync::Arc;

/// Input of the save-filter flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFilterRequest {
    /// Name as typed (trimmed on save)
    pub name: String,
    /// Publish to other users
    pub is_public: bool,
    /// Spaces picked for a public filter (ignored for private ones)
    pub spaces: FilterScope,
}

impl SaveFilterRequest {
    /// Private filter request
    #[must_use]
    pub fn private(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_public: false,
            spaces: FilterScope::new(),
        }
    }

    /// Public filter request advertised in `spaces`
    #[must_use]
    pub fn public(name: impl Into<String>, spaces: FilterScope) -> Self {
        Self {
            name: name.into(),
            is_public: true,
            spaces,
        }
    }
}

/// Session state for one acting user
///
/// The hierarchy is immutable and shared. The library is shared with the
/// background tasks that clear creation highlights.
#[derive(Debug)]
pub struct ScopeSession {
    config: ScopeConfig,
    forest: Arc<SpaceForest>,
    library: Arc<FilterLibrary>,
    users: UserDirectory,
    chips: ChipSet,
}

impl ScopeSession {
    /// Create a session over a hierarchy and a user directory
    #[must_use]
    pub fn new(forest: SpaceForest, users: UserDirectory, config: ScopeConfig) -> Self {
        Self {
            config,
            forest: Arc::new(forest),
            library: Arc::new(FilterLibrary::new()),
            users,
            chips: ChipSet::new(),
        }
    }

    /// Create a session from a parsed workspace file
    ///
    /// Preloaded filters are stored without highlight.
    ///
    /// # Errors
    /// - [`ScopeError::NoUsers`] if the workspace declares no users
    /// - [`ScopeError::Filter`] if a preloaded filter breaks a save rule
    pub fn from_workspace(workspace: WorkspaceFile) -> Result<Self, ScopeError> {
        let mut users = UserDirectory::new(workspace.users)?;
        if let Some(current) = &workspace.current_user {
            users.set_current(current);
        }

        let library = FilterLibrary::new();
        for filter in workspace.filters {
            filter.validate()?;
            library.restore(filter.without_highlight());
        }

        Ok(Self::new(workspace.spaces, users, workspace.config).with_library(Arc::new(library)))
    }

    /// Load a workspace file and open a session on it
    ///
    /// # Errors
    /// Any [`WorkspaceFile::load`] error, or [`ScopeError::NoUsers`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScopeError> {
        Self::from_workspace(WorkspaceFile::load(path)?)
    }

    /// With an existing (possibly shared) filter library
    #[inline]
    #[must_use]
    pub fn with_library(mut self, library: Arc<FilterLibrary>) -> Self {
        self.library = library;
        self
    }

    /// Tunables
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    /// Full hierarchy
    #[inline]
    #[must_use]
    pub fn forest(&self) -> &Arc<SpaceForest> {
        &self.forest
    }

    /// Filter library
    #[inline]
    #[must_use]
    pub fn library(&self) -> &Arc<FilterLibrary> {
        &self.library
    }

    /// User directory
    #[inline]
    #[must_use]
    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// User directory, mutably (role changes, current user, membership)
    #[inline]
    pub fn users_mut(&mut self) -> &mut UserDirectory {
        &mut self.users
    }

    /// Acting user
    #[inline]
    #[must_use]
    pub fn current_user(&self) -> &UserProfile {
        self.users.current()
    }

    /// Hierarchy as the acting user sees it in the sidebar
    #[must_use]
    pub fn sidebar(&self) -> SpaceForest {
        self.forest
            .prune_visible(self.current_user().visible_space_ids.iter().cloned())
    }

    /// Sidebar nodes that start expanded
    #[must_use]
    pub fn sidebar_expanded(&self) -> IndexSet<SpaceId> {
        self.sidebar().initially_expanded()
    }

    /// Filters to list while the acting user is in `current_space`
    #[must_use]
    pub fn filters_for(&self, current_space: &str) -> FilterListing {
        self.library
            .visible_from(&self.forest, current_space, &self.current_user().id)
    }

    /// Fresh space picker over the full hierarchy
    #[must_use]
    pub fn open_picker(&self) -> ScopePicker {
        ScopePicker::with_options(&self.forest, &self.config.picker)
    }

    /// Active filter criteria
    #[inline]
    #[must_use]
    pub fn chips(&self) -> &ChipSet {
        &self.chips
    }

    /// Active filter criteria, mutably
    #[inline]
    pub fn chips_mut(&mut self) -> &mut ChipSet {
        &mut self.chips
    }

    /// Save the active criteria as a named filter
    ///
    /// On success the active chips move into the filter, the filter is
    /// stored highlighted, and the highlight is cleared after the configured
    /// delay when a tokio runtime is available.
    ///
    /// # Errors
    /// - [`FilterError::EmptyName`] if the trimmed name is empty
    /// - [`FilterError::EmptyPublicScope`] for a public filter with no space
    /// - [`FilterError::PublicFilterForbidden`] if the acting user is not an
    ///   administrator
    pub fn save_filter(&mut self, request: SaveFilterRequest) -> Result<SavedFilter, ScopeError> {
        let author = self.current_user().id.clone();
        let filter = if request.is_public {
            let filter = SavedFilter::public(&request.name, author, request.spaces)?;
            if !self.users.can_save_public_filter() {
                return Err(FilterError::PublicFilterForbidden {
                    user: filter.author.to_string(),
                }
                .into());
            }
            filter
        } else {
            SavedFilter::private(&request.name, author)?
        };

        let filter = filter.with_chips(self.chips.drain());
        self.library.insert(filter.clone());
        self.schedule_highlight_reset(filter.id);
        Ok(filter)
    }

    /// Delete a filter as the acting user
    ///
    /// # Errors
    /// [`FilterError::NotFound`] or [`FilterError::NotPermitted`]
    pub fn delete_filter(&self, id: FilterId) -> Result<SavedFilter, ScopeError> {
        Ok(self.library.delete(id, &self.current_user().id)?)
    }

    /// Rename a filter as the acting user
    ///
    /// # Errors
    /// [`FilterError::EmptyName`], [`FilterError::NotFound`] or
    /// [`FilterError::NotPermitted`]
    pub fn rename_filter(&self, id: FilterId, name: &str) -> Result<(), ScopeError> {
        Ok(self.library.rename(id, &self.current_user().id, name)?)
    }

    /// True if the acting user may edit or delete `filter`
    #[inline]
    #[must_use]
    pub fn can_modify(&self, filter: &SavedFilter) -> bool {
        can_edit(filter, &self.current_user().id)
    }

    fn schedule_highlight_reset(&self, id: FilterId) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(filter_id = %id, "no runtime, highlight left set");
            return;
        };
        let library = Arc::clone(&self.library);
        let delay = self.config.highlight_delay();
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            library.clear_highlight(id);
        });
    }
}
