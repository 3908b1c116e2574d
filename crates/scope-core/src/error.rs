//! Error types for Scope Core
//!
//! Wraps the tree and filter errors and adds workspace loading failures.

use scope_filter::{FilterError, UserId};
use scope_tree::TreeError;
use std::path::PathBuf;

/// Main scope error type
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// Invalid space hierarchy
    #[error("space tree error: {0}")]
    Tree(#[from] TreeError),

    /// Saved-filter operation rejected
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Workspace file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML workspace
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed YAML workspace
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed JSON workspace
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is not toml, yaml/yml or json
    #[error("unsupported workspace format: {}", path.display())]
    UnsupportedFormat {
        /// Offending file
        path: PathBuf,
    },

    /// Workspace declares no users
    #[error("workspace has no users")]
    NoUsers,

    /// User id not in the directory
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
}

impl ScopeError {
    /// Check if the error came from reading or parsing a workspace file
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::Toml(_)
                | Self::Yaml(_)
                | Self::Json(_)
                | Self::UnsupportedFormat { .. }
        )
    }
}
