//! Scope Space Tree
//!
//! Owned hierarchy of workspaces ("spaces") with read-only traversal.
//!
//! # Overview
//!
//! - [`SpaceId`]: node identifier, with the reserved `root` sentinel
//! - [`SpaceNode`]: one node; owns its children
//! - [`SpaceForest`]: ordered roots with unique ids at every depth
//! - Traversal: [`SpaceForest::flatten`], [`SpaceForest::ancestors_of`],
//!   [`SpaceForest::descendants_of`]
//! - Derived views: [`SpaceForest::prune_visible`], [`SpaceForest::exclude`]
//!
//! Lookups never fail. Unknown ids produce empty results and are reported
//! through [`diagnostics`].
//!
//! # Example
//!
//! ```rust
//! use scope_tree::{SpaceForest, SpaceNode};
//!
//! let forest = SpaceForest::new(vec![
//!     SpaceNode::new("all", "All").with_child(
//!         SpaceNode::new("eng", "Engineering").with_child(SpaceNode::new("backend", "Backend")),
//!     ),
//! ])
//! .unwrap();
//!
//! let sidebar = forest.prune_visible(["backend"]);
//! assert_eq!(sidebar.len(), 3);
//! ```

#![warn(missing_docs)]

pub mod diagnostics;
mod error;
mod forest;
mod id;
mod node;
mod prune;

// Re-exports
pub use error::TreeError;
pub use forest::{FlatSpace, Flatten, SpaceForest};
pub use id::SpaceId;
pub use node::{SpaceIcon, SpaceNode};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for tree operations
    pub use crate::{FlatSpace, SpaceForest, SpaceIcon, SpaceId, SpaceNode, TreeError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
