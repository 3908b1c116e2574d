//! Scope Core
//!
//! Workspace loading and the per-user session that drives sidebar pruning,
//! filter listing and the save-filter flow.
//!
//! # Overview
//!
//! - [`WorkspaceFile`]: hierarchy, users and [`ScopeConfig`] from TOML, YAML
//!   or JSON
//! - [`UserDirectory`]: users, roles, acting user, space membership
//! - [`ScopeSession`]: sidebar, filter listing, picker, save and delete
//! - [`telemetry`]: subscriber installation for binaries
//!
//! # Example
//!
//! ```rust
//! use scope_core::{SaveFilterRequest, ScopeConfig, ScopeSession, UserDirectory, UserProfile, UserRole};
//! use scope_tree::{SpaceForest, SpaceNode};
//!
//! let forest = SpaceForest::new(vec![
//!     SpaceNode::new("all", "All").with_child(SpaceNode::new("eng", "Engineering")),
//! ])
//! .unwrap();
//! let users = UserDirectory::new([UserProfile::new("1", "Admin", UserRole::Administrator)]).unwrap();
//!
//! let mut session = ScopeSession::new(forest, users, ScopeConfig::default());
//! let mut picker = session.open_picker();
//! picker.toggle("all");
//!
//! session
//!     .save_filter(SaveFilterRequest::public("org wide", picker.into_scope()))
//!     .unwrap();
//! assert_eq!(session.filters_for("eng").public.len(), 1);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod session;
pub mod telemetry;
mod users;

// Re-exports
pub use config::{ConfigFormat, ScopeConfig, WorkspaceFile};
pub use error::ScopeError;
pub use session::{SaveFilterRequest, ScopeSession};
pub use users::{UserDirectory, UserProfile, UserRole};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for scope sessions
    pub use crate::{
        SaveFilterRequest, ScopeConfig, ScopeError, ScopeSession, UserDirectory, UserProfile,
        UserRole, WorkspaceFile,
    };
    pub use scope_filter::prelude::*;
    pub use scope_picker::prelude::*;
    pub use scope_tree::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
