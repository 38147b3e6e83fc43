//! Slash-delimited tag namespace paths

use std::fmt;

use crate::{Error, Result};

/// Separator between namespace segments.
pub const SEPARATOR: char = '/';

/// A validated tag namespace path such as `project/task`.
///
/// Construction through [`TagPath::parse`] guarantees the path is non-empty
/// and contains no whitespace. Segments are otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagPath {
    inner: String,
}

impl TagPath {
    /// Normalize raw label text without validating it.
    ///
    /// Strips leading `#` characters and surrounding whitespace, so `#project`
    /// and `  project ` both become `project`.
    pub fn normalize(raw: &str) -> String {
        raw.trim().trim_start_matches('#').trim().to_string()
    }

    /// Normalize and validate user-entered text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the normalized text is empty or contains
    /// any whitespace, including tabs and line breaks.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return Err(Error::invalid("tag name cannot be empty"));
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(Error::invalid(format!(
                "tag name '{}' cannot contain whitespace",
                normalized.escape_debug()
            )));
        }
        Ok(Self { inner: normalized })
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consume the path, returning the inner string.
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Final segment of the path (`task` for `project/task`).
    pub fn leaf(&self) -> &str {
        leaf(&self.inner)
    }

    /// Check whether this path is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &str) -> bool {
        is_ancestor(&self.inner, other)
    }
}

/// Final segment of a raw path string.
pub fn leaf(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}

/// Check whether `ancestor` is a strict, segment-aligned prefix of `path`.
///
/// `a` is an ancestor of `a/b` but not of `ab`, and never of itself.
pub fn is_ancestor(ancestor: &str, path: &str) -> bool {
    !ancestor.is_empty()
        && path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Every candidate ancestor of `path`, deepest first.
///
/// Each candidate ends right before a separator, so candidates are pairwise
/// distinct in length. For `a/b/c` this yields `a/b` then `a`.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    path.rmatch_indices(SEPARATOR)
        .map(move |(idx, _)| &path[..idx])
        .filter(|candidate| !candidate.is_empty())
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl AsRef<str> for TagPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<TagPath> for String {
    fn from(path: TagPath) -> Self {
        path.inner
    }
}
