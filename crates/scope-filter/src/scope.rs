//! Filter scopes
//!
//! Provides [`FilterScope`], the ordered set of space ids a public filter is
//! advertised in.

use indexmap::IndexSet;
use scope_tree::SpaceId;
use serde::{Deserialize, Serialize};

/// Set of spaces a filter is advertised in
///
/// Insertion order is kept so the scope renders the way it was picked.
/// May contain the `root` sentinel, meaning every space.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterScope(IndexSet<SpaceId>);

impl FilterScope {
    /// Empty scope
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Scope covering the whole organization
    #[inline]
    #[must_use]
    pub fn everywhere() -> Self {
        std::iter::once(SpaceId::root()).collect()
    }

    /// Add a space; returns false if it was already present
    #[inline]
    pub fn insert(&mut self, id: impl Into<SpaceId>) -> bool {
        self.0.insert(id.into())
    }

    /// True if the exact id is part of the scope
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// True if the scope holds the `root` sentinel
    #[inline]
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.0.contains(SpaceId::ROOT)
    }

    /// Number of ids
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no space is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &SpaceId> {
        self.0.iter()
    }
}

impl<S: Into<SpaceId>> FromIterator<S> for FilterScope {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for FilterScope {
    type Item = SpaceId;
    type IntoIter = indexmap::set::IntoIter<SpaceId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterScope {
    type Item = &'a SpaceId;
    type IntoIter = indexmap::set::Iter<'a, SpaceId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_keeps_insertion_order_and_dedups() {
        let mut scope = FilterScope::new();
        assert!(scope.insert("b"));
        assert!(scope.insert("a"));
        assert!(!scope.insert("b"));

        let ids: Vec<&str> = scope.iter().map(SpaceId::as_str).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn everywhere_is_global() {
        assert!(FilterScope::everywhere().is_global());
        assert!(!FilterScope::from_iter(["eng"]).is_global());
    }

    #[test]
    fn scope_serializes_as_list() {
        let scope: FilterScope = ["eng", "root"].into_iter().collect();
        let json = serde_json::to_string(&scope).unwrap();
        assert_eq!(json, r#"["eng","root"]"#);
    }
}
