//! Derived views of a forest
//!
//! - [`SpaceForest::prune_visible`]: per-user partial visibility
//! - [`SpaceForest::exclude`]: drop fixed ids together with their subtrees
//!
//! Both are pure: the input forest is untouched and order is preserved.

use crate::forest::SpaceForest;
use crate::id::SpaceId;
use crate::node::SpaceNode;
use std::collections::HashSet;

impl SpaceForest {
    /// Keep only what a user with `visible` ids may see
    ///
    /// An empty `visible` set means "no restriction" and returns the forest
    /// unchanged. Otherwise a node survives if its own id is visible (it is
    /// then kept with its full, unpruned subtree) or if at least one of its
    /// children survives (it is then kept with only the surviving children).
    /// A dropped node takes its whole subtree with it.
    ///
    /// # Example
    /// ```
    /// use scope_tree::{SpaceForest, SpaceNode};
    ///
    /// let forest = SpaceForest::new(vec![SpaceNode::new("all", "All").with_children(vec![
    ///     SpaceNode::new("eng", "Engineering").with_child(SpaceNode::new("backend", "Backend")),
    ///     SpaceNode::new("sales", "Sales"),
    /// ])])
    /// .unwrap();
    ///
    /// let pruned = forest.prune_visible(["backend"]);
    /// assert!(pruned.contains("eng"));
    /// assert!(!pruned.contains("sales"));
    /// ```
    #[must_use]
    pub fn prune_visible<I, S>(&self, visible: I) -> SpaceForest
    where
        I: IntoIterator<Item = S>,
        S: Into<SpaceId>,
    {
        let visible: HashSet<SpaceId> = visible.into_iter().map(Into::into).collect();
        if visible.is_empty() {
            return self.clone();
        }

        let roots = prune_nodes(self.roots(), &visible);
        tracing::debug!(
            visible = visible.len(),
            kept = roots.len(),
            "pruned forest by visibility"
        );
        SpaceForest::from_valid(roots)
    }

    /// Remove every node in `excluded` along with its subtree
    ///
    /// Exclusion is applied at every depth; an excluded node never
    /// contributes any descendant to the result.
    #[must_use]
    pub fn exclude<I, S>(&self, excluded: I) -> SpaceForest
    where
        I: IntoIterator<Item = S>,
        S: Into<SpaceId>,
    {
        let excluded: HashSet<SpaceId> = excluded.into_iter().map(Into::into).collect();
        if excluded.is_empty() {
            return self.clone();
        }
        SpaceForest::from_valid(exclude_nodes(self.roots(), &excluded))
    }
}

fn prune_nodes(nodes: &[SpaceNode], visible: &HashSet<SpaceId>) -> Vec<SpaceNode> {
    let mut kept = Vec::new();
    for node in nodes {
        if visible.contains(node.id()) {
            kept.push(node.clone());
            continue;
        }
        let children = prune_nodes(node.children(), visible);
        if !children.is_empty() {
            kept.push(node.with_replaced_children(children));
        }
    }
    kept
}

fn exclude_nodes(nodes: &[SpaceNode], excluded: &HashSet<SpaceId>) -> Vec<SpaceNode> {
    nodes
        .iter()
        .filter(|node| !excluded.contains(node.id()))
        .map(|node| node.with_replaced_children(exclude_nodes(node.children(), excluded)))
        .collect()
}
