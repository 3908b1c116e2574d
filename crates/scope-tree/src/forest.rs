//! Space forest
//!
//! Provides [`SpaceForest`], the ordered set of root [`SpaceNode`]s, and its
//! read-only traversal primitives. Nothing here mutates the hierarchy:
//! flattening, pruning and exclusion always produce new values.

use crate::diagnostics;
use crate::error::TreeError;
use crate::id::SpaceId;
use crate::node::SpaceNode;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered forest of space nodes with globally unique ids
///
/// Built through [`SpaceForest::new`] (or deserialization, which runs the
/// same validation), so every id is unique, non-empty and never `root`.
///
/// # Example
/// ```
/// use scope_tree::{SpaceForest, SpaceId, SpaceNode};
///
/// let forest = SpaceForest::new(vec![
///     SpaceNode::new("all", "All").with_child(
///         SpaceNode::new("eng", "Engineering").with_child(SpaceNode::new("backend", "Backend")),
///     ),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     forest.ancestors_of("backend"),
///     vec![SpaceId::from("all"), SpaceId::from("eng")]
/// );
/// assert_eq!(forest.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SpaceNode>", into = "Vec<SpaceNode>")]
pub struct SpaceForest {
    roots: Vec<SpaceNode>,
}

/// One entry of a flattened forest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatSpace<'a> {
    /// The node
    pub node: &'a SpaceNode,
    /// Depth relative to the traversal start
    pub level: usize,
}

impl<'a> FlatSpace<'a> {
    /// Node id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &'a SpaceId {
        self.node.id()
    }

    /// Node name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.node.name()
    }
}

/// Pre-order iterator over a forest
///
/// Yields each node before its children, children in declared order.
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    stack: Vec<FlatSpace<'a>>,
}

impl<'a> Flatten<'a> {
    fn new(nodes: &'a [SpaceNode], start_level: usize) -> Self {
        let stack = nodes
            .iter()
            .rev()
            .map(|node| FlatSpace {
                node,
                level: start_level,
            })
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatSpace<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.stack
            .extend(entry.node.children().iter().rev().map(|node| FlatSpace {
                node,
                level: entry.level + 1,
            }));
        Some(entry)
    }
}

impl SpaceForest {
    /// Build a forest, validating id uniqueness
    ///
    /// # Errors
    /// - [`TreeError::DuplicateId`] if two nodes anywhere share an id
    /// - [`TreeError::ReservedId`] if a node is called `root`
    /// - [`TreeError::EmptyId`] if a node has an empty id
    pub fn new(roots: Vec<SpaceNode>) -> Result<Self, TreeError> {
        let forest = Self { roots };
        forest.validate()?;
        Ok(forest)
    }

    /// Empty forest
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap nodes known to satisfy the id invariant (derived views only)
    pub(crate) fn from_valid(roots: Vec<SpaceNode>) -> Self {
        Self { roots }
    }

    fn validate(&self) -> Result<(), TreeError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in self.iter() {
            let id = entry.id();
            if id.as_str().is_empty() {
                return Err(TreeError::EmptyId {
                    name: entry.name().to_string(),
                });
            }
            if id.is_root() {
                return Err(TreeError::ReservedId { id: id.to_string() });
            }
            if !seen.insert(id.as_str()) {
                return Err(TreeError::DuplicateId { id: id.to_string() });
            }
        }
        Ok(())
    }

    /// Root nodes in declared order
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[SpaceNode] {
        &self.roots
    }

    /// True when the forest has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order traversal starting at level 0
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Flatten<'_> {
        Flatten::new(&self.roots, 0)
    }

    /// Pre-order traversal with `(node, level)` pairs
    ///
    /// Levels start at `start_level` for the roots and grow by one per
    /// depth. Calling this again restarts the traversal.
    #[must_use]
    pub fn flatten(&self, start_level: usize) -> Vec<FlatSpace<'_>> {
        Flatten::new(&self.roots, start_level).collect()
    }

    /// Ids in pre-order
    #[must_use]
    pub fn ids(&self) -> Vec<SpaceId> {
        self.iter().map(|entry| entry.id().clone()).collect()
    }

    /// Find a node anywhere in the forest (first match in pre-order)
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&SpaceNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    /// True when a node with this id exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Ids of the ancestors of `target`, root-most first
    ///
    /// `target` itself is not included. An id that is not in the forest
    /// yields an empty list, the same as a root node.
    #[must_use]
    pub fn ancestors_of(&self, target: &str) -> Vec<SpaceId> {
        fn walk(nodes: &[SpaceNode], target: &str, path: &mut Vec<SpaceId>) -> bool {
            for node in nodes {
                if node.id() == target {
                    return true;
                }
                path.push(node.id().clone());
                if walk(node.children(), target, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        if walk(&self.roots, target, &mut path) {
            path
        } else {
            diagnostics::unknown_space("ancestors_of", target);
            Vec::new()
        }
    }

    /// Ids strictly beneath `id`, in pre-order
    ///
    /// Unknown ids yield an empty list.
    #[must_use]
    pub fn descendants_of(&self, id: &str) -> Vec<SpaceId> {
        match self.find(id) {
            Some(node) => Flatten::new(node.children(), 0)
                .map(|entry| entry.id().clone())
                .collect(),
            None => {
                diagnostics::unknown_space("descendants_of", id);
                Vec::new()
            }
        }
    }

    /// True when `ancestor` is a strict ancestor of `id`
    #[must_use]
    pub fn is_ancestor_of(&self, ancestor: &str, id: &str) -> bool {
        self.ancestors_of(id).iter().any(|a| a == ancestor)
    }

    /// Ids whose `expanded` flag is set, in pre-order
    #[must_use]
    pub fn initially_expanded(&self) -> IndexSet<SpaceId> {
        self.iter()
            .filter(|entry| entry.node.is_expanded())
            .map(|entry| entry.id().clone())
            .collect()
    }
}

impl TryFrom<Vec<SpaceNode>> for SpaceForest {
    type Error = TreeError;

    fn try_from(roots: Vec<SpaceNode>) -> Result<Self, Self::Error> {
        Self::new(roots)
    }
}

impl From<SpaceForest> for Vec<SpaceNode> {
    fn from(forest: SpaceForest) -> Self {
        forest.roots
    }
}

impl<'a> IntoIterator for &'a SpaceForest {
    type Item = FlatSpace<'a>;
    type IntoIter = Flatten<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> SpaceForest {
        SpaceForest::new(vec![
            SpaceNode::new("all", "All")
                .expanded(true)
                .with_child(
                    SpaceNode::new("eng", "Engineering")
                        .with_child(SpaceNode::new("backend", "Backend"))
                        .with_child(SpaceNode::new("frontend", "Frontend").expanded(true)),
                )
                .with_child(SpaceNode::new("sales", "Sales")),
            SpaceNode::new("ops", "Operations"),
        ])
        .unwrap()
    }

    fn ids(list: &[SpaceId]) -> Vec<&str> {
        list.iter().map(SpaceId::as_str).collect()
    }

    #[test]
    fn flatten_is_pre_order_with_levels() {
        let forest = sample();
        let flat: Vec<(&str, usize)> = forest
            .flatten(0)
            .iter()
            .map(|e| (e.id().as_str(), e.level))
            .collect();

        assert_eq!(
            flat,
            vec![
                ("all", 0),
                ("eng", 1),
                ("backend", 2),
                ("frontend", 2),
                ("sales", 1),
                ("ops", 0),
            ]
        );
    }

    #[test]
    fn flatten_honours_start_level() {
        let forest = sample();
        let levels: Vec<usize> = forest.flatten(3).iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![3, 4, 5, 5, 4, 3]);
    }

    #[test]
    fn flatten_is_restartable() {
        let forest = sample();
        assert_eq!(forest.flatten(0), forest.flatten(0));
        assert_eq!(forest.iter().count(), forest.iter().count());
    }

    #[test]
    fn len_counts_every_depth() {
        assert_eq!(sample().len(), 6);
        assert_eq!(SpaceForest::empty().len(), 0);
        assert!(SpaceForest::empty().is_empty());
    }

    #[test]
    fn ancestors_root_most_first() {
        let forest = sample();
        assert_eq!(ids(&forest.ancestors_of("backend")), vec!["all", "eng"]);
        assert_eq!(ids(&forest.ancestors_of("sales")), vec!["all"]);
    }

    #[test]
    fn ancestors_of_root_node_is_empty() {
        assert!(sample().ancestors_of("all").is_empty());
        assert!(sample().ancestors_of("ops").is_empty());
    }

    #[test]
    fn ancestors_of_unknown_id_is_empty() {
        assert!(sample().ancestors_of("nope").is_empty());
    }

    #[test]
    fn descendants_are_strict_and_pre_order() {
        let forest = sample();
        assert_eq!(
            ids(&forest.descendants_of("all")),
            vec!["eng", "backend", "frontend", "sales"]
        );
        assert!(forest.descendants_of("backend").is_empty());
        assert!(forest.descendants_of("nope").is_empty());
    }

    #[test]
    fn is_ancestor_of_is_strict() {
        let forest = sample();
        assert!(forest.is_ancestor_of("all", "backend"));
        assert!(forest.is_ancestor_of("eng", "backend"));
        assert!(!forest.is_ancestor_of("backend", "backend"));
        assert!(!forest.is_ancestor_of("sales", "backend"));
    }

    #[test]
    fn find_and_contains() {
        let forest = sample();
        assert_eq!(forest.find("frontend").map(SpaceNode::name), Some("Frontend"));
        assert!(forest.contains("ops"));
        assert!(!forest.contains("root"));
    }

    #[test]
    fn initially_expanded_walks_every_depth() {
        let expanded: Vec<SpaceId> = sample().initially_expanded().into_iter().collect();
        assert_eq!(ids(&expanded), vec!["all", "frontend"]);
    }

    #[test]
    fn rejects_duplicate_ids_at_any_depth() {
        let result = SpaceForest::new(vec![
            SpaceNode::new("a", "A").with_child(SpaceNode::new("x", "X")),
            SpaceNode::new("b", "B").with_child(SpaceNode::new("x", "X again")),
        ]);
        assert_eq!(result, Err(TreeError::DuplicateId { id: "x".into() }));
    }

    #[test]
    fn rejects_reserved_and_empty_ids() {
        let reserved = SpaceForest::new(vec![SpaceNode::new("root", "Root")]);
        assert!(matches!(reserved, Err(TreeError::ReservedId { .. })));

        let empty = SpaceForest::new(vec![SpaceNode::new("", "Nameless")]);
        assert!(matches!(empty, Err(TreeError::EmptyId { .. })));
    }

    #[test]
    fn deserialization_validates() {
        let ok: SpaceForest = serde_json::from_str(
            r#"[{"id":"a","name":"A","children":[{"id":"b","name":"B"}]}]"#,
        )
        .unwrap();
        assert_eq!(ok.len(), 2);

        let dup: Result<SpaceForest, _> =
            serde_json::from_str(r#"[{"id":"a","name":"A"},{"id":"a","name":"A2"}]"#);
        assert!(dup.is_err());
    }

    #[test]
    fn yaml_round_trip_preserves_structure() {
        let forest = sample();
        let yaml = serde_yaml::to_string(&forest).unwrap();
        let back: SpaceForest = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, forest);
    }
}
