//! Filter chips
//!
//! A [`FilterChip`] is one unsaved criterion in the active working set
//! ([`ChipSet`]). Chips live only for the session and are drained into a
//! [`SavedFilter`](crate::SavedFilter) on save.

use serde::{Deserialize, Serialize};

/// One filter criterion (name + icon)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterChip {
    /// Criterion name
    pub name: String,
    /// Icon glyph
    pub icon: String,
}

/// Criteria offered by the filter panel, in display order
const CATALOGUE: &[(&str, &str)] = &[
    ("A", "Title"),
    ("👤", "Customer"),
    ("👥", "Service desk requester"),
    ("👤", "Member"),
    ("👥", "Responsible"),
    ("🔵", "ID"),
    ("🔥", "Urgency"),
    ("⚠️", "Block status"),
    ("🏷️", "Tag"),
    ("👆", "Parent card"),
    ("👇", "Child card"),
    ("📋", "Status"),
    ("T", "Card type"),
    ("📏", "Size"),
    ("✅", "Completed"),
    ("📅", "Created"),
    ("➡️", "Last moved"),
    ("🔄", "Updated"),
    ("▶️", "Started"),
    ("📋", "Planned start"),
    ("📋", "Planned end"),
    ("⏰", "Due date"),
];

impl FilterChip {
    /// Create a chip
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Every criterion the filter panel offers
    #[must_use]
    pub fn catalogue() -> Vec<FilterChip> {
        CATALOGUE
            .iter()
            .map(|(icon, name)| FilterChip::new(*name, *icon))
            .collect()
    }

    /// Catalogue entries whose name contains `query` (case-insensitive)
    ///
    /// An empty query returns the whole catalogue.
    #[must_use]
    pub fn search_catalogue(query: &str) -> Vec<FilterChip> {
        let needle = query.to_lowercase();
        Self::catalogue()
            .into_iter()
            .filter(|chip| chip.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Active, unsaved set of chips
///
/// Chip names are unique within a set; order is the order of addition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipSet {
    chips: Vec<FilterChip>,
}

impl ChipSet {
    /// Empty working set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chip; returns false if one with the same name exists
    pub fn add(&mut self, chip: FilterChip) -> bool {
        if self.chips.iter().any(|c| c.name == chip.name) {
            return false;
        }
        self.chips.push(chip);
        true
    }

    /// Remove by name; returns the removed chip
    pub fn remove(&mut self, name: &str) -> Option<FilterChip> {
        let idx = self.chips.iter().position(|c| c.name == name)?;
        Some(self.chips.remove(idx))
    }

    /// Drop every chip
    #[inline]
    pub fn clear(&mut self) {
        self.chips.clear();
    }

    /// Move every chip out, leaving the set empty
    #[inline]
    pub fn drain(&mut self) -> Vec<FilterChip> {
        std::mem::take(&mut self.chips)
    }

    /// Chips in order of addition
    #[inline]
    #[must_use]
    pub fn chips(&self) -> &[FilterChip] {
        &self.chips
    }

    /// Number of chips
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// True if nothing is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}
