//! User directory
//!
//! Known users, the acting (current) user and the member list of the open
//! space. Only administrators may publish filters.

use crate::error::ScopeError;
use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use scope_filter::UserId;
use scope_tree::SpaceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, may publish filters
    Administrator,
    /// May edit content
    Editor,
    /// May only comment
    Commenter,
}

impl UserRole {
    /// True if this role may save public filters
    #[inline]
    #[must_use]
    pub fn can_publish_filters(self) -> bool {
        matches!(self, Self::Administrator)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Administrator => "administrator",
            Self::Editor => "editor",
            Self::Commenter => "commenter",
        };
        f.write_str(name)
    }
}

/// A user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identifier
    pub id: UserId,
    /// Display name
    pub full_name: String,
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Contact address
    #[serde(default)]
    pub email: String,
    /// Last activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<DateTime<Utc>>,
    /// Access role
    pub role: UserRole,
    /// Spaces shown in this user's sidebar (empty = unrestricted)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visible_space_ids: Vec<SpaceId>,
}

impl UserProfile {
    /// Create a user with no visibility restriction
    #[must_use]
    pub fn new(id: impl Into<UserId>, full_name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            username: String::new(),
            email: String::new(),
            last_active: None,
            role,
            visible_space_ids: Vec::new(),
        }
    }

    /// With login name
    #[inline]
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// With contact address
    #[inline]
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// With last activity
    #[inline]
    #[must_use]
    pub fn with_last_active(mut self, at: DateTime<Utc>) -> Self {
        self.last_active = Some(at);
        self
    }

    /// Restrict the sidebar to these spaces
    #[must_use]
    pub fn with_visible_spaces<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SpaceId>,
    {
        self.visible_space_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Known users plus the acting user
///
/// Never empty, so there is always a current user.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: IndexMap<UserId, UserProfile>,
    current: usize,
    members: IndexSet<UserId>,
}

impl UserDirectory {
    /// Build a directory; the first user is current and the sole member
    ///
    /// # Errors
    /// [`ScopeError::NoUsers`] if `users` is empty
    pub fn new(users: impl IntoIterator<Item = UserProfile>) -> Result<Self, ScopeError> {
        let users: IndexMap<UserId, UserProfile> =
            users.into_iter().map(|user| (user.id.clone(), user)).collect();
        let owner = users.keys().next().cloned().ok_or(ScopeError::NoUsers)?;
        Ok(Self {
            users,
            current: 0,
            members: IndexSet::from([owner]),
        })
    }

    /// The acting user
    #[inline]
    #[must_use]
    pub fn current(&self) -> &UserProfile {
        &self.users[self.current]
    }

    /// Switch the acting user
    ///
    /// An unknown id falls back to the first user.
    pub fn set_current(&mut self, id: &UserId) -> &UserProfile {
        self.current = match self.users.get_index_of(id) {
            Some(index) => index,
            None => {
                tracing::warn!(user = %id, "unknown user, falling back to first user");
                0
            }
        };
        self.current()
    }

    /// Look up a user
    #[inline]
    #[must_use]
    pub fn get(&self, id: &UserId) -> Option<&UserProfile> {
        self.users.get(id)
    }

    /// All users in declaration order
    pub fn users(&self) -> impl Iterator<Item = &UserProfile> {
        self.users.values()
    }

    /// Number of users
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True if there are no users; never the case for a built directory
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Change a user's role
    ///
    /// # Errors
    /// [`ScopeError::UnknownUser`] if `id` is not in the directory
    pub fn update_role(&mut self, id: &UserId, role: UserRole) -> Result<(), ScopeError> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| ScopeError::UnknownUser(id.clone()))?;
        tracing::info!(user = %id, from = %user.role, to = %role, "role updated");
        user.role = role;
        Ok(())
    }

    /// True if the acting user may save public filters
    #[inline]
    #[must_use]
    pub fn can_save_public_filter(&self) -> bool {
        self.current().role.can_publish_filters()
    }

    /// Add a member to the open space; returns false if already a member
    ///
    /// # Errors
    /// [`ScopeError::UnknownUser`] if `id` is not in the directory
    pub fn add_member(&mut self, id: &UserId) -> Result<bool, ScopeError> {
        if !self.users.contains_key(id) {
            return Err(ScopeError::UnknownUser(id.clone()));
        }
        Ok(self.members.insert(id.clone()))
    }

    /// Remove a member; returns false if they were not a member
    pub fn remove_member(&mut self, id: &UserId) -> bool {
        self.members.shift_remove(id)
    }

    /// Members of the open space in the order they were added
    #[must_use]
    pub fn members(&self) -> Vec<&UserProfile> {
        self.members.iter().filter_map(|id| self.users.get(id)).collect()
    }
}
