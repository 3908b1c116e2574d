//! Picker configuration

use indexmap::IndexSet;
use scope_tree::SpaceId;
use serde::{Deserialize, Serialize};

/// Spaces hidden from the picker by default (personal areas and folders)
pub const DEFAULT_EXCLUSIONS: [&str; 4] = ["personal", "favorites", "folder-1", "folder-2"];

/// Label of the synthetic whole-organization entry
pub const DEFAULT_ROOT_LABEL: &str = "Entire organization";

/// Picker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Space ids removed, with their subtrees, before anything is listed
    pub excluded: IndexSet<SpaceId>,
    /// Display name of the `root` entry
    pub root_label: String,
}

impl PickerOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a replacement exclusion set
    #[must_use]
    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SpaceId>,
    {
        self.excluded = excluded.into_iter().map(Into::into).collect();
        self
    }

    /// With root label
    #[inline]
    #[must_use]
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            excluded: DEFAULT_EXCLUSIONS.into_iter().map(SpaceId::from).collect(),
            root_label: DEFAULT_ROOT_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hide_personal_areas() {
        let options = PickerOptions::default();
        assert_eq!(options.excluded.len(), 4);
        assert!(options.excluded.contains("favorites"));
        assert_eq!(options.root_label, "Entire organization");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let options: PickerOptions = serde_json::from_str(r#"{"root_label":"Everything"}"#).unwrap();
        assert_eq!(options.root_label, "Everything");
        assert!(options.excluded.contains("personal"));
    }

    #[test]
    fn builders_replace_fields() {
        let options = PickerOptions::new().with_excluded(["archive"]).with_root_label("All");
        assert_eq!(options.excluded.len(), 1);
        assert!(options.excluded.contains("archive"));
        assert_eq!(options.root_label, "All");
    }
}
