//! User-declared tag names.
//!
//! Options such as `new-inline-tags` declare element names with the
//! markup engine's tag table. The configuration layer only talks to that
//! table through [`TagRegistry`]. [`DeclaredTags`] is an in-memory registry
//! backed by [`IndexMap`] so declaration order is kept.
//!
//! ```rust
//! use tidy_config::tags::{DeclaredTags, TagKind, TagRegistry};
//!
//! let mut tags = DeclaredTags::new();
//! tags.define_tag(TagKind::Inline, "foo");
//! tags.define_tag(TagKind::Inline, "bar");
//! assert_eq!(tags.declared(TagKind::Inline), vec!["foo", "bar"]);
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a user-declared element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Inline,
    Block,
    Empty,
    Pre,
}

impl TagKind {
    pub const ALL: [TagKind; 4] = [TagKind::Inline, TagKind::Block, TagKind::Empty, TagKind::Pre];

    const fn bit(self) -> u8 {
        match self {
            TagKind::Inline => 1,
            TagKind::Block => 2,
            TagKind::Empty => 4,
            TagKind::Pre => 8,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagKind::Inline => "inline",
            TagKind::Block => "block",
            TagKind::Empty => "empty",
            TagKind::Pre => "pre",
        };
        f.write_str(name)
    }
}

/// A set of [`TagKind`]s packed into a bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct TagKinds(u8);

impl TagKinds {
    #[must_use]
    pub const fn empty() -> Self {
        TagKinds(0)
    }

    pub fn insert(&mut self, kind: TagKind) {
        self.0 |= kind.bit();
    }

    #[must_use]
    pub const fn contains(self, kind: TagKind) -> bool {
        self.0 & kind.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterates the kinds in the set in declaration order.
    pub fn iter(self) -> impl Iterator<Item = TagKind> {
        TagKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl FromIterator<TagKind> for TagKinds {
    fn from_iter<I: IntoIterator<Item = TagKind>>(iter: I) -> Self {
        let mut kinds = TagKinds::empty();
        for kind in iter {
            kinds.insert(kind);
        }
        kinds
    }
}

/// The tag table the configuration declares names into.
pub trait TagRegistry {
    /// Declares `name` as an element of `kind`.
    fn define_tag(&mut self, kind: TagKind, name: &str);

    /// Drops every name declared for `kind`.
    fn clear_tags_of_kind(&mut self, kind: TagKind);

    /// Drops every user-declared name.
    fn clear_all_tags(&mut self) {
        for kind in TagKind::ALL {
            self.clear_tags_of_kind(kind);
        }
    }
}

/// In-memory [`TagRegistry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclaredTags(IndexMap<TagKind, IndexSet<String>>);

impl DeclaredTags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names declared for `kind`, in declaration order.
    #[must_use]
    pub fn declared(&self, kind: TagKind) -> Vec<&str> {
        self.0
            .get(&kind)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, kind: TagKind, name: &str) -> bool {
        self.0.get(&kind).is_some_and(|names| names.contains(name))
    }

    /// Total number of declared names across kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(IndexSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TagRegistry for DeclaredTags {
    fn define_tag(&mut self, kind: TagKind, name: &str) {
        self.0.entry(kind).or_default().insert(name.to_string());
    }

    fn clear_tags_of_kind(&mut self, kind: TagKind) {
        if let Some(names) = self.0.get_mut(&kind) {
            names.clear();
        }
    }

    fn clear_all_tags(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_is_idempotent() {
        let mut tags = DeclaredTags::new();
        tags.define_tag(TagKind::Inline, "o:p");
        tags.define_tag(TagKind::Inline, "o:p");
        assert_eq!(tags.declared(TagKind::Inline), vec!["o:p"]);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_clear_by_kind() {
        let mut tags = DeclaredTags::new();
        tags.define_tag(TagKind::Inline, "a");
        tags.define_tag(TagKind::Pre, "b");
        tags.clear_tags_of_kind(TagKind::Inline);
        assert!(tags.declared(TagKind::Inline).is_empty());
        assert!(tags.contains(TagKind::Pre, "b"));
        tags.clear_all_tags();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_kind_mask() {
        let mut kinds = TagKinds::empty();
        assert!(kinds.is_empty());
        kinds.insert(TagKind::Block);
        kinds.insert(TagKind::Pre);
        assert!(kinds.contains(TagKind::Block));
        assert!(!kinds.contains(TagKind::Inline));
        assert_eq!(kinds.iter().collect::<Vec<_>>(), vec![TagKind::Block, TagKind::Pre]);
        kinds.clear();
        assert!(kinds.is_empty());
    }
}
