//! Scope Saved Filters
//!
//! Named filter criteria that are private to their author or published to
//! a set of spaces.
//!
//! # Overview
//!
//! - [`SavedFilter`]: the filter record, with [`FilterId`] and [`UserId`]
//! - [`FilterScope`]: spaces a public filter is advertised in
//! - [`is_visible`]: hierarchical visibility from the current space
//! - [`can_edit`] / [`can_delete`]: author-only changes to public filters
//! - [`FilterLibrary`]: shared, insertion-ordered store
//! - [`FilterChip`] / [`ChipSet`]: criteria captured at save time
//!
//! # Example
//!
//! ```rust
//! use scope_filter::{FilterLibrary, SavedFilter, UserId};
//! use scope_tree::{SpaceForest, SpaceNode};
//!
//! let forest = SpaceForest::new(vec![
//!     SpaceNode::new("all", "All").with_child(SpaceNode::new("eng", "Engineering")),
//! ])
//! .unwrap();
//!
//! let library = FilterLibrary::new();
//! let author = UserId::from("1");
//! library.insert(SavedFilter::public("org wide", author.clone(), ["all"].into_iter().collect()).unwrap());
//!
//! let listing = library.visible_from(&forest, "eng", &author);
//! assert_eq!(listing.public.len(), 1);
//! ```

#![warn(missing_docs)]

mod chip;
mod error;
mod filter;
mod library;
mod permissions;
mod scope;
mod visibility;

// Re-exports
pub use chip::{ChipSet, FilterChip};
pub use error::FilterError;
pub use filter::{FilterId, SavedFilter, UserId};
pub use library::{FilterLibrary, FilterListing};
pub use permissions::{can_delete, can_edit};
pub use scope::FilterScope;
pub use visibility::{is_visible, scope_visible_from};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for saved-filter operations
    pub use crate::{
        can_delete, can_edit, is_visible, FilterError, FilterId, FilterLibrary, FilterScope,
        SavedFilter, UserId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
