//! Workspace configuration
//!
//! A workspace file bundles the space hierarchy, the user directory and the
//! tunables in [`ScopeConfig`]. The format follows the file extension.

use crate::error::ScopeError;
use crate::users::UserProfile;
use scope_filter::{SavedFilter, UserId};
use scope_picker::PickerOptions;
use scope_tree::{SpaceForest, SpaceNode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunables for the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Space picker exclusions and root label
    pub picker: PickerOptions,
    /// How long a newly saved filter stays highlighted, in milliseconds
    pub highlight_delay_ms: u64,
}

impl ScopeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With picker options
    #[inline]
    #[must_use]
    pub fn with_picker(mut self, picker: PickerOptions) -> Self {
        self.picker = picker;
        self
    }

    /// With highlight delay
    #[inline]
    #[must_use]
    pub fn with_highlight_delay(mut self, delay: Duration) -> Self {
        self.highlight_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Highlight delay as a duration
    #[inline]
    #[must_use]
    pub fn highlight_delay(&self) -> Duration {
        Duration::from_millis(self.highlight_delay_ms)
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            picker: PickerOptions::default(),
            highlight_delay_ms: 2500,
        }
    }
}

/// Supported workspace file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension (case-insensitive)
    ///
    /// # Errors
    /// [`ScopeError::UnsupportedFormat`] for any other extension
    pub fn from_path(path: &Path) -> Result<Self, ScopeError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ScopeError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Contents of a workspace file
///
/// # Example
/// ```
/// use scope_core::{ConfigFormat, WorkspaceFile};
///
/// let workspace = WorkspaceFile::parse(
///     r#"
/// [[spaces]]
/// id = "all"
/// name = "All"
///
/// [[spaces.children]]
/// id = "eng"
/// name = "Engineering"
/// "#,
///     ConfigFormat::Toml,
/// )
/// .unwrap();
///
/// assert_eq!(workspace.spaces.len(), 2);
/// assert_eq!(workspace.config.highlight_delay_ms, 2500);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceFile {
    /// Space hierarchy
    #[serde(default)]
    pub spaces: SpaceForest,
    /// User directory
    #[serde(default)]
    pub users: Vec<UserProfile>,
    /// Acting user (first user when absent or unknown)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<UserId>,
    /// Saved filters to preload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<SavedFilter>,
    /// Tunables
    #[serde(default)]
    pub config: ScopeConfig,
}

impl WorkspaceFile {
    /// Workspace over the given roots, validating the hierarchy
    ///
    /// # Errors
    /// [`ScopeError::Tree`] if the ids are not unique
    pub fn new(roots: Vec<SpaceNode>) -> Result<Self, ScopeError> {
        Ok(Self {
            spaces: SpaceForest::new(roots)?,
            ..Self::default()
        })
    }

    /// With users
    #[inline]
    #[must_use]
    pub fn with_users(mut self, users: Vec<UserProfile>) -> Self {
        self.users = users;
        self
    }

    /// With acting user
    #[inline]
    #[must_use]
    pub fn with_current_user(mut self, id: impl Into<UserId>) -> Self {
        self.current_user = Some(id.into());
        self
    }

    /// With preloaded filters
    #[inline]
    #[must_use]
    pub fn with_filters(mut self, filters: Vec<SavedFilter>) -> Self {
        self.filters = filters;
        self
    }

    /// With tunables
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: ScopeConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse workspace text in the given format
    ///
    /// # Errors
    /// The format's parse error; hierarchy validation failures surface
    /// through it as well.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ScopeError> {
        let workspace = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(workspace)
    }

    /// Load a workspace file, choosing the format by extension
    ///
    /// # Errors
    /// - [`ScopeError::UnsupportedFormat`] for an unknown extension
    /// - [`ScopeError::Io`] if the file cannot be read
    /// - the format's parse error
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScopeError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ScopeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let workspace = Self::parse(&content, format)?;
        tracing::info!(
            path = %path.display(),
            spaces = workspace.spaces.len(),
            users = workspace.users.len(),
            "loaded workspace"
        );
        Ok(workspace)
    }
}
