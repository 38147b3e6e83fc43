//! Hierarchical style resolution
//!
//! A tag's style comes from, in order of preference:
//!
//! 1. An explicit entry for the exact path
//! 2. The entry of its deepest configured ancestor (`project/task` inherits
//!    from `project`, never from `proj`)
//! 3. The default record
//!
//! A match yields that one record in full. Fields are never merged across
//! ancestors.

use std::collections::BTreeMap;

use crate::path::{self, TagPath};
use crate::StyleRecord;

/// Where a resolved style came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path has its own entry
    Exact,
    /// The style is inherited from the named ancestor
    Inherited { ancestor: &'a str },
    /// Nothing applies; the default record is used
    Default,
}

/// A raw document label resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag<'a> {
    /// Normalized namespace path
    pub path: String,
    /// Style that applies
    pub style: &'a StyleRecord,
    /// Ancestor the style was inherited from, if any
    pub inherited_from: Option<&'a str>,
}

impl ResolvedTag<'_> {
    /// Text to display: the alias, or the final segment of the path.
    pub fn label(&self) -> &str {
        self.style.display_text(&self.path, false)
    }
}

/// Read-only view over a store snapshot.
///
/// Cheap to construct and `Copy`; holds nothing but borrows.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    default: &'a StyleRecord,
    entries: &'a BTreeMap<String, StyleRecord>,
}

impl<'a> Resolver<'a> {
    pub fn new(default: &'a StyleRecord, entries: &'a BTreeMap<String, StyleRecord>) -> Self {
        Self { default, entries }
    }

    /// Style that applies to `path`. Never fails.
    pub fn resolve(&self, path: &str) -> &'a StyleRecord {
        if let Some(record) = self.entries.get(path) {
            return record;
        }
        match self.nearest_ancestor(path) {
            Some((_, record)) => record,
            None => self.default,
        }
    }

    /// Ancestor `path` inherits its style from.
    ///
    /// `None` when the path is empty, has its own entry, or falls through to
    /// the default record.
    pub fn inherited_ancestor(&self, path: &str) -> Option<&'a str> {
        if path.is_empty() || self.entries.contains_key(path) {
            return None;
        }
        self.nearest_ancestor(path).map(|(key, _)| key)
    }

    /// Classify how `path` resolves.
    pub fn resolution(&self, path: &str) -> Resolution<'a> {
        if self.entries.contains_key(path) {
            Resolution::Exact
        } else if let Some(ancestor) = self.inherited_ancestor(path) {
            Resolution::Inherited { ancestor }
        } else {
            Resolution::Default
        }
    }

    /// Resolve a document's raw label list in order.
    ///
    /// Each label is normalized (leading `#` and surrounding whitespace
    /// removed); labels that normalize to nothing are skipped.
    pub fn resolve_tags<'t, I>(&self, raw_tags: I) -> Vec<ResolvedTag<'a>>
    where
        I: IntoIterator<Item = &'t str>,
    {
        raw_tags
            .into_iter()
            .map(TagPath::normalize)
            .filter(|path| !path.is_empty())
            .map(|path| ResolvedTag {
                style: self.resolve(&path),
                inherited_from: self.inherited_ancestor(&path),
                path,
            })
            .collect()
    }

    /// The default record this resolver falls back to.
    pub fn default_record(&self) -> &'a StyleRecord {
        self.default
    }

    /// Deepest configured ancestor of `path` (longest-prefix match).
    ///
    /// Candidates are the prefixes ending right before each separator,
    /// visited deepest first, so the first hit is the longest and no two
    /// candidates share a length.
    fn nearest_ancestor(&self, path: &str) -> Option<(&'a str, &'a StyleRecord)> {
        path::ancestors(path).find_map(|candidate| {
            self.entries
                .get_key_value(candidate)
                .map(|(key, record)| (key.as_str(), record))
        })
    }
}
