//! Space nodes
//!
//! Provides [`SpaceNode`], one workspace/folder/board entry of the
//! navigation hierarchy. Each node exclusively owns its children.

use crate::id::SpaceId;
use serde::{Deserialize, Serialize};

/// Icon tag shown next to a space
///
/// Unknown tags deserialize as [`SpaceIcon::Folder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceIcon {
    /// Kanban board
    Board,
    /// Public knowledge space
    Globe,
    /// Community space
    Community,
    /// Workflow board
    Workflow,
    /// Automation board
    Automation,
    /// Document space
    Doc,
    /// Sales funnel
    Funnel,
    /// Plain folder (default)
    #[default]
    #[serde(other)]
    Folder,
}

/// One node of the space hierarchy
///
/// `color` and `expanded` are display state and play no part in any
/// traversal or visibility decision.
///
/// # Example
/// ```
/// use scope_tree::{SpaceIcon, SpaceNode};
///
/// let eng = SpaceNode::new("eng", "Engineering")
///     .with_icon(SpaceIcon::Folder)
///     .with_children(vec![
///         SpaceNode::new("backend", "Backend"),
///         SpaceNode::new("frontend", "Frontend"),
///     ]);
///
/// assert_eq!(eng.children().len(), 2);
/// assert!(!eng.is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceNode {
    id: SpaceId,

    name: String,

    #[serde(default)]
    icon: SpaceIcon,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    color: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SpaceNode>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    expanded: bool,
}

impl SpaceNode {
    /// Create a leaf node
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<SpaceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: SpaceIcon::default(),
            color: String::new(),
            children: Vec::new(),
            expanded: false,
        }
    }

    /// With icon
    #[inline]
    #[must_use]
    pub fn with_icon(mut self, icon: SpaceIcon) -> Self {
        self.icon = icon;
        self
    }

    /// With display color token
    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// With children (replaces existing)
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: Vec<SpaceNode>) -> Self {
        self.children = children;
        self
    }

    /// Append one child
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: SpaceNode) -> Self {
        self.children.push(child);
        self
    }

    /// Mark as initially expanded
    #[inline]
    #[must_use]
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &SpaceId {
        &self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Icon tag
    #[inline]
    #[must_use]
    pub fn icon(&self) -> SpaceIcon {
        self.icon
    }

    /// Color token
    #[inline]
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Children in declared order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SpaceNode] {
        &self.children
    }

    /// Initial expand flag
    #[inline]
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// True when the node has no children
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Copy of this node carrying `children` instead of its own
    pub(crate) fn with_replaced_children(&self, children: Vec<SpaceNode>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon,
            color: self.color.clone(),
            children,
            expanded: self.expanded,
        }
    }

    /// Pre-order search of this subtree, including the node itself
    pub(crate) fn find(&self, id: &str) -> Option<&SpaceNode> {
        if self.id == *id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}
