//! Context tags and the active-context set.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// ContextTag
// ---------------------------------------------------------------------------

/// A named UI condition, e.g. "a modal is open".
///
/// Shortcuts scoped to contexts only fire while at least one of them is
/// active. Tags compare by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextTag(Cow<'static, str>);

impl ContextTag {
    pub const GLOBAL: ContextTag = ContextTag(Cow::Borrowed("global"));
    pub const MODAL_OPEN: ContextTag = ContextTag(Cow::Borrowed("modal-open"));
    pub const COMMAND_PALETTE_OPEN: ContextTag = ContextTag(Cow::Borrowed("command-palette-open"));
    pub const SEARCH_OPEN: ContextTag = ContextTag(Cow::Borrowed("search-open"));
    pub const FILE_TREE_FOCUSED: ContextTag = ContextTag(Cow::Borrowed("file-tree-focused"));

    /// A custom tag.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ContextTag {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContextTag {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// ---------------------------------------------------------------------------
// ContextSet
// ---------------------------------------------------------------------------

/// The set of currently active contexts.
///
/// Ordered, so iteration and debug output are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextSet {
    active: BTreeSet<ContextTag>,
}

impl ContextSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `tag`. Returns `true` if it was not already active.
    pub fn enable(&mut self, tag: ContextTag) -> bool {
        self.active.insert(tag)
    }

    /// Deactivate `tag`. Returns `true` if it was active.
    pub fn disable(&mut self, tag: &ContextTag) -> bool {
        self.active.remove(tag)
    }

    /// Flip `tag`. Returns the new state.
    pub fn toggle(&mut self, tag: ContextTag) -> bool {
        if self.active.remove(&tag) {
            false
        } else {
            self.active.insert(tag);
            true
        }
    }

    pub fn contains(&self, tag: &ContextTag) -> bool {
        self.active.contains(tag)
    }

    /// Whether any of `tags` is active.
    pub fn contains_any<'a>(&self, tags: impl IntoIterator<Item = &'a ContextTag>) -> bool {
        tags.into_iter().any(|tag| self.active.contains(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContextTag> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl FromIterator<ContextTag> for ContextSet {
    fn from_iter<I: IntoIterator<Item = ContextTag>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}
