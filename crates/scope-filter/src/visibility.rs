//! Filter visibility
//!
//! Decides whether a saved filter is offered from a given space. Scoping a
//! filter to a space exposes it to that space and every descendant, never
//! to siblings or ancestors.

use crate::filter::SavedFilter;
use crate::scope::FilterScope;
use scope_tree::SpaceForest;

/// True if a filter advertised in `spaces` is usable from `current`
///
/// # Rules
/// 1. No scope, or an empty one: visible nowhere
/// 2. Scope holds `root`: visible everywhere
/// 3. Scope holds `current`: visible
/// 4. Otherwise visible iff an ancestor of `current` is in scope
///
/// An unknown `current` has no ancestors and so only matches rules 2 and 3.
#[must_use]
pub fn scope_visible_from(forest: &SpaceForest, spaces: Option<&FilterScope>, current: &str) -> bool {
    let Some(spaces) = spaces.filter(|s| !s.is_empty()) else {
        return false;
    };
    if spaces.is_global() || spaces.contains(current) {
        return true;
    }
    forest
        .ancestors_of(current)
        .iter()
        .any(|ancestor| spaces.contains(ancestor.as_str()))
}

/// True if `filter` should be listed while viewing `current`
///
/// # Example
/// ```
/// use scope_filter::{is_visible, SavedFilter, UserId};
/// use scope_tree::{SpaceForest, SpaceNode};
///
/// let forest = SpaceForest::new(vec![SpaceNode::new("all", "All").with_child(
///     SpaceNode::new("eng", "Engineering").with_child(SpaceNode::new("backend", "Backend")),
/// )])
/// .unwrap();
///
/// let filter = SavedFilter::public("eng only", UserId::from("1"), ["eng"].into_iter().collect())
///     .unwrap();
///
/// assert!(is_visible(&forest, &filter, "backend"));
/// assert!(!is_visible(&forest, &filter, "all"));
/// ```
#[inline]
#[must_use]
pub fn is_visible(forest: &SpaceForest, filter: &SavedFilter, current: &str) -> bool {
    scope_visible_from(forest, filter.spaces.as_ref(), current)
}

impl SavedFilter {
    /// See [`is_visible`]
    #[inline]
    #[must_use]
    pub fn is_visible_from(&self, forest: &SpaceForest, current: &str) -> bool {
        is_visible(forest, self, current)
    }
}
