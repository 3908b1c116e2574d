//! Scope Picker
//!
//! Cascading multi-select used to choose the spaces a public filter is
//! advertised in.
//!
//! # Overview
//!
//! - [`ScopePicker`]: listing, cascade toggle, derived states, search, label
//! - [`PickerEntry`]: one listed row, including the synthetic `root`
//! - [`SelectionState`]: selected / partial / unselected
//! - [`PickerOptions`]: exclusion set and root label
//!
//! # Example
//!
//! ```rust
//! use scope_picker::ScopePicker;
//! use scope_tree::{SpaceForest, SpaceNode};
//!
//! let forest = SpaceForest::new(vec![
//!     SpaceNode::new("all", "All").with_child(SpaceNode::new("eng", "Engineering")),
//! ])
//! .unwrap();
//!
//! let mut picker = ScopePicker::new(&forest);
//! picker.toggle("all");
//! assert_eq!(picker.label(), "2 spaces");
//!
//! let scope = picker.into_scope();
//! assert!(scope.contains("eng"));
//! ```

#![warn(missing_docs)]

mod options;
mod picker;

// Re-exports
pub use options::{PickerOptions, DEFAULT_EXCLUSIONS, DEFAULT_ROOT_LABEL};
pub use picker::{PickerEntry, ScopePicker, SelectionState};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for the space picker
    pub use crate::{PickerEntry, PickerOptions, ScopePicker, SelectionState};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
