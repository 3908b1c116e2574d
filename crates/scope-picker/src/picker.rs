//! Cascading space picker
//!
//! Provides [`ScopePicker`], the multi-select used to choose where a public
//! filter is advertised. Selecting a space selects everything beneath it;
//! deselecting removes it and everything beneath it. Ancestors and siblings
//! are never touched, so a parent is never promoted to selected just because
//! all of its children are.

use crate::options::PickerOptions;
use indexmap::IndexSet;
use scope_filter::FilterScope;
use scope_tree::{diagnostics, FlatSpace, SpaceForest, SpaceIcon, SpaceId};
use serde::Serialize;

/// One row of the picker listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerEntry {
    id: SpaceId,
    name: String,
    level: usize,
    icon: SpaceIcon,
}

impl PickerEntry {
    fn root(label: &str) -> Self {
        Self {
            id: SpaceId::root(),
            name: label.to_string(),
            level: 0,
            icon: SpaceIcon::Folder,
        }
    }

    /// Space id (`root` for the whole-organization entry)
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

    /// Indentation depth
    #[inline]
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Icon
    #[inline]
    #[must_use]
    pub fn icon(&self) -> SpaceIcon {
        self.icon
    }

    /// True for the synthetic whole-organization entry
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.id.is_root()
    }
}

impl From<FlatSpace<'_>> for PickerEntry {
    fn from(flat: FlatSpace<'_>) -> Self {
        Self {
            id: flat.id().clone(),
            name: flat.name().to_string(),
            level: flat.level,
            icon: flat.node.icon(),
        }
    }
}

/// Derived check-box state of a listed space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// Neither the space nor anything beneath it is selected
    Unselected,
    /// The space itself is selected
    Selected,
    /// Not selected, but some descendant is
    Partial,
}

/// Multi-select over the space hierarchy with downward cascade
///
/// # Example
/// ```
/// use scope_picker::{ScopePicker, SelectionState};
/// use scope_tree::{SpaceForest, SpaceNode};
///
/// let forest = SpaceForest::new(vec![SpaceNode::new("eng", "Engineering")
///     .with_child(SpaceNode::new("backend", "Backend"))
///     .with_child(SpaceNode::new("frontend", "Frontend"))])
/// .unwrap();
///
/// let mut picker = ScopePicker::new(&forest);
/// picker.toggle("eng");
/// assert_eq!(picker.selected_len(), 3);
///
/// picker.toggle("backend");
/// assert_eq!(picker.state("eng"), SelectionState::Selected);
/// assert_eq!(picker.state("backend"), SelectionState::Unselected);
/// ```
#[derive(Debug, Clone)]
pub struct ScopePicker {
    hierarchy: SpaceForest,
    entries: Vec<PickerEntry>,
    selected: IndexSet<SpaceId>,
}

impl ScopePicker {
    /// Picker over `forest` with default options
    #[must_use]
    pub fn new(forest: &SpaceForest) -> Self {
        Self::with_options(forest, &PickerOptions::default())
    }

    /// Picker over `forest` with the given exclusions and root label
    #[must_use]
    pub fn with_options(forest: &SpaceForest, options: &PickerOptions) -> Self {
        let hierarchy = forest.exclude(options.excluded.iter().cloned());

        let mut entries = Vec::with_capacity(hierarchy.len() + 1);
        entries.push(PickerEntry::root(&options.root_label));
        entries.extend(hierarchy.iter().map(PickerEntry::from));

        tracing::debug!(
            listed = entries.len(),
            excluded = options.excluded.len(),
            "opened space picker"
        );

        Self {
            hierarchy,
            entries,
            selected: IndexSet::new(),
        }
    }

    /// Start from an existing selection
    ///
    /// Ids that are not listed are dropped. No cascade is applied.
    #[must_use]
    pub fn with_selection<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SpaceId>,
    {
        for id in ids {
            let id = id.into();
            if self.is_listed(id.as_str()) {
                self.selected.insert(id);
            } else {
                diagnostics::unknown_space("with_selection", id.as_str());
            }
        }
        self
    }

    /// Hierarchy after exclusions
    #[inline]
    #[must_use]
    pub fn hierarchy(&self) -> &SpaceForest {
        &self.hierarchy
    }

    /// Full listing: the `root` entry, then the hierarchy in pre-order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    /// Listing entry for `id`
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&PickerEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// True if `id` is `root` or part of the hierarchy
    #[must_use]
    pub fn is_listed(&self, id: &str) -> bool {
        id == SpaceId::ROOT || self.hierarchy.contains(id)
    }

    /// Ids strictly beneath `id`
    ///
    /// `root` covers every listed space. Unknown ids yield nothing.
    #[must_use]
    pub fn descendants_of(&self, id: &str) -> Vec<SpaceId> {
        if id == SpaceId::ROOT {
            return self.entries[1..].iter().map(|entry| entry.id.clone()).collect();
        }
        self.hierarchy.descendants_of(id)
    }

    /// Flip `id`, cascading to its descendants
    ///
    /// A selected space is removed along with its descendants; otherwise it
    /// is added along with its descendants. Returns whether `id` ended up
    /// selected. Unknown ids leave the selection untouched.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.is_listed(id) {
            tracing::warn!(space_id = id, "toggle of unlisted space ignored");
            diagnostics::unknown_space("toggle", id);
            return false;
        }

        if self.selected.contains(id) {
            self.deselect_cascade(id);
            false
        } else {
            let descendants = self.descendants_of(id);
            self.selected.insert(SpaceId::from(id));
            self.selected.extend(descendants);
            true
        }
    }

    /// Remove `id` and its descendants from the selection
    ///
    /// Used when a selected chip is dismissed. `root` clears everything.
    pub fn deselect_cascade(&mut self, id: &str) {
        let descendants: IndexSet<SpaceId> = self.descendants_of(id).into_iter().collect();
        self.selected
            .retain(|selected| selected != id && !descendants.contains(selected));
    }

    /// Drop the whole selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Derived state of `id`
    #[must_use]
    pub fn state(&self, id: &str) -> SelectionState {
        if self.selected.contains(id) {
            SelectionState::Selected
        } else if self
            .descendants_of(id)
            .iter()
            .any(|descendant| self.selected.contains(descendant))
        {
            SelectionState::Partial
        } else {
            SelectionState::Unselected
        }
    }

    /// True if `id` is in the selection
    #[inline]
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in the order they were added
    pub fn selected(&self) -> impl Iterator<Item = &SpaceId> {
        self.selected.iter()
    }

    /// Number of selected ids
    #[inline]
    #[must_use]
    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    /// Listing rows whose name contains `query`, ignoring case
    ///
    /// A blank query returns the whole listing. Listing order is kept.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&PickerEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Entries for the selected-chips strip, in selection order
    #[must_use]
    pub fn chips(&self) -> Vec<&PickerEntry> {
        self.selected.iter().filter_map(|id| self.entry(id.as_str())).collect()
    }

    /// Short summary of the selection
    ///
    /// The root label when `root` is selected, the space name for a single
    /// space, otherwise a count.
    #[must_use]
    pub fn label(&self) -> String {
        if self.selected.contains(SpaceId::ROOT) {
            return self.entries[0].name.clone();
        }
        match self.selected.len() {
            0 => "No spaces".to_string(),
            1 => self
                .selected
                .first()
                .and_then(|id| self.entry(id.as_str()))
                .map_or_else(|| "1 space".to_string(), |entry| entry.name.clone()),
            n => format!("{n} spaces"),
        }
    }

    /// Selection as a filter scope, keeping selection order
    #[must_use]
    pub fn to_scope(&self) -> FilterScope {
        self.selected.iter().cloned().collect()
    }

    /// Consume the picker into a filter scope
    #[must_use]
    pub fn into_scope(self) -> FilterScope {
        self.selected.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scope_tree::SpaceNode;

    fn forest() -> SpaceForest {
        SpaceForest::new(vec![
            SpaceNode::new("personal", "Personal").with_child(SpaceNode::new("mine", "Mine")),
            SpaceNode::new("all", "All").with_children(vec![
                SpaceNode::new("eng", "Engineering")
                    .with_child(SpaceNode::new("backend", "Backend"))
                    .with_child(SpaceNode::new("frontend", "Frontend")),
                SpaceNode::new("sales", "Sales"),
            ]),
        ])
        .unwrap()
    }

    fn ids(picker: &ScopePicker) -> Vec<&str> {
        picker.selected().map(SpaceId::as_str).collect()
    }

    #[test]
    fn listing_starts_with_root_and_skips_exclusions() {
        let picker = ScopePicker::new(&forest());
        let listed: Vec<(&str, usize)> = picker
            .entries()
            .iter()
            .map(|e| (e.id().as_str(), e.level()))
            .collect();

        assert_eq!(
            listed,
            vec![
                ("root", 0),
                ("all", 0),
                ("eng", 1),
                ("backend", 2),
                ("frontend", 2),
                ("sales", 1),
            ]
        );
        assert_eq!(picker.entries()[0].name(), "Entire organization");
        assert!(!picker.is_listed("mine"));
    }

    #[test]
    fn root_descends_to_every_listed_space() {
        let picker = ScopePicker::new(&forest());
        assert_eq!(picker.descendants_of("root").len(), 5);
        assert!(picker.descendants_of("sales").is_empty());
        assert!(picker.descendants_of("personal").is_empty());
    }

    #[test]
    fn toggle_cascades_down_only() {
        let mut picker = ScopePicker::new(&forest());
        assert!(picker.toggle("eng"));

        assert_eq!(ids(&picker), vec!["eng", "backend", "frontend"]);
        assert_eq!(picker.state("all"), SelectionState::Partial);
        assert_eq!(picker.state("sales"), SelectionState::Unselected);
    }

    #[test]
    fn toggling_excluded_space_is_ignored() {
        let mut picker = ScopePicker::new(&forest());
        assert!(!picker.toggle("personal"));
        assert!(!picker.toggle("ghost"));
        assert_eq!(picker.selected_len(), 0);
    }

    #[test]
    fn deselecting_root_clears_everything() {
        let mut picker = ScopePicker::new(&forest());
        picker.toggle("root");
        assert_eq!(picker.selected_len(), 6);

        picker.deselect_cascade("root");
        assert_eq!(picker.selected_len(), 0);
    }

    #[test]
    fn labels_follow_selection() {
        let mut picker = ScopePicker::new(&forest());
        assert_eq!(picker.label(), "No spaces");

        picker.toggle("sales");
        assert_eq!(picker.label(), "Sales");

        picker.toggle("eng");
        assert_eq!(picker.label(), "4 spaces");

        picker.toggle("root");
        assert_eq!(picker.label(), "Entire organization");
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let picker = ScopePicker::new(&forest());
        let hits: Vec<&str> = picker.search("END").iter().map(|e| e.id().as_str()).collect();
        assert_eq!(hits, vec!["backend", "frontend"]);
        assert_eq!(picker.search("  ").len(), picker.entries().len());
    }

    #[test]
    fn chips_and_scope_keep_selection_order() {
        let mut picker = ScopePicker::new(&forest());
        picker.toggle("sales");
        picker.toggle("backend");

        let chips: Vec<&str> = picker.chips().iter().map(|e| e.name()).collect();
        assert_eq!(chips, vec!["Sales", "Backend"]);

        let scope = picker.into_scope();
        let scoped: Vec<&str> = scope.iter().map(SpaceId::as_str).collect();
        assert_eq!(scoped, vec!["sales", "backend"]);
    }

    #[test]
    fn initial_selection_drops_unlisted_ids() {
        let picker = ScopePicker::new(&forest()).with_selection(["eng", "mine", "root"]);
        assert_eq!(ids(&picker), vec!["eng", "root"]);
        assert_eq!(picker.state("backend"), SelectionState::Unselected);
    }

    #[test]
    fn custom_options_change_listing() {
        let options = PickerOptions::new().with_excluded(["sales"]).with_root_label("Everything");
        let picker = ScopePicker::with_options(&forest(), &options);

        assert_eq!(picker.entries()[0].name(), "Everything");
        assert!(picker.is_listed("mine"));
        assert!(!picker.is_listed("sales"));
    }
}
