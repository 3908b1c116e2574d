//! Space identifiers
//!
//! Provides [`SpaceId`], the string identifier shared by every node of the
//! space hierarchy, and the reserved [`SpaceId::ROOT`] sentinel.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

/// Identifier of a space node
///
/// Unique across a whole [`SpaceForest`](crate::SpaceForest). The value
/// `"root"` is reserved: it never names a real node and stands for "every
/// space in the forest" wherever a set of ids is used as a scope.
///
/// # Example
/// ```
/// use scope_tree::SpaceId;
///
/// let id = SpaceId::from("backend");
/// assert_eq!(id.as_str(), "backend");
/// assert!(!id.is_root());
/// assert!(SpaceId::root().is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(String);

impl SpaceId {
    /// Reserved sentinel meaning "the entire organization"
    pub const ROOT: &'static str = "root";

    /// Create new identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `root` sentinel
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    /// True for the `root` sentinel
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// String form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SpaceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SpaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SpaceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SpaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&SpaceId> for SpaceId {
    fn from(id: &SpaceId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for SpaceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SpaceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn space_id_root_sentinel() {
        assert!(SpaceId::root().is_root());
        assert!(SpaceId::from("root").is_root());
        assert!(!SpaceId::from("roots").is_root());
    }

    #[test]
    fn space_id_borrows_as_str() {
        let mut set = HashSet::new();
        set.insert(SpaceId::from("eng"));

        assert!(set.contains("eng"));
        assert!(!set.contains("ops"));
    }

    #[test]
    fn space_id_compares_with_str() {
        let id = SpaceId::new("eng");
        assert_eq!(id, "eng");
        assert_eq!(id.to_string(), "eng");
    }

    #[test]
    fn space_id_serde_is_transparent() {
        let id = SpaceId::from("backend");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"backend\"");

        let back: SpaceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
