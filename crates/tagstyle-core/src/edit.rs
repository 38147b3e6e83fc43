//! Edit workflows: add, update, rename, duplicate, copy
//!
//! These compose the store's insert/remove primitives with the naming
//! policy. Every check runs before the first mutation, and each workflow
//! persists exactly once.

use crate::backend::SettingsBackend;
use crate::{Error, Result, StyleRecord, StyleStore, TagPath};

/// Suffix appended to a duplicated tag's path.
pub const COPY_SUFFIX: &str = "-copy";

/// Result of an edit that may prune a default-equivalent record.
///
/// Carries the entry key the edit targeted. For an existing entry this is
/// the key exactly as stored, which may predate name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The record was stored at this path
    Saved(String),
    /// The record matched the default, so this path has no entry
    Cleared(String),
}

impl EditOutcome {
    /// Path the edit targeted.
    pub fn path(&self) -> &str {
        match self {
            Self::Saved(path) | Self::Cleared(path) => path,
        }
    }
}

/// First free duplicate name for `source`.
///
/// Tries `<source>-copy`, then `<source>-copy1`, `<source>-copy2`, and so on.
/// Terminates for any finite `taken` set.
pub fn copy_name(source: &str, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{source}{COPY_SUFFIX}");
    if !taken(&base) {
        return base;
    }

    let mut n: u64 = 1;
    loop {
        let candidate = format!("{base}{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

impl<B: SettingsBackend> StyleStore<B> {
    /// Create an entry for a new, user-entered tag name.
    ///
    /// The name is normalized (`#project` becomes `project`). The record is
    /// stored as given, even when it matches the default.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty name or one containing whitespace,
    /// `AlreadyExists` if the normalized path is configured.
    pub fn add(&mut self, raw_name: &str, record: &StyleRecord) -> Result<TagPath> {
        let path = TagPath::parse(raw_name)?;
        if self.contains(path.as_str()) {
            return Err(Error::AlreadyExists {
                path: path.into_string(),
            });
        }
        self.insert_entry(path.as_str(), record);
        self.persist()?;
        Ok(path)
    }

    /// Save the edited style of `path`, pruning it if it matches the default.
    ///
    /// Works for configured and unconfigured paths alike: a default-equivalent
    /// record removes any existing entry instead of storing a redundant one.
    /// A configured path is edited under its stored key as is; otherwise
    /// `path` is normalized (`#project` edits `project`).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `path` is blank.
    pub fn update(&mut self, path: &str, record: &StyleRecord) -> Result<EditOutcome> {
        let key = match self.stored_key(path) {
            Some(key) => key,
            None => {
                let normalized = TagPath::normalize(path);
                if normalized.is_empty() {
                    return Err(Error::invalid("tag path cannot be empty"));
                }
                normalized
            }
        };
        self.apply_edit(&key, &key, record)
    }

    /// Move the configuration at `old_path` to a new, user-entered name.
    ///
    /// The new path receives `record` (the edited style) and the old entry
    /// is removed. If `record` matches the default, the old entry is removed
    /// and no new entry is created. A new name that normalizes to the old
    /// key is an in-place edit and skips name validation.
    ///
    /// # Errors
    ///
    /// `NotFound` if `old_path` has no entry, `InvalidArgument` for a bad
    /// new name, `AlreadyExists` if the new name belongs to another entry.
    /// In all three cases neither entry is touched.
    pub fn rename(
        &mut self,
        old_path: &str,
        raw_new_name: &str,
        record: &StyleRecord,
    ) -> Result<EditOutcome> {
        let original = self.stored_key(old_path).ok_or_else(|| Error::NotFound {
            path: old_path.to_string(),
        })?;

        let in_place = raw_new_name == original || TagPath::normalize(raw_new_name) == original;
        let target = if in_place {
            original.clone()
        } else {
            TagPath::parse(raw_new_name)?.into_string()
        };
        self.apply_edit(&original, &target, record)
    }

    /// Copy the entry at `source` to a fresh `-copy` path.
    ///
    /// Returns the new path.
    pub fn duplicate(&mut self, source: &str) -> Result<String> {
        let record = self
            .entry(source)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                path: source.to_string(),
            })?;

        let target = copy_name(source, |candidate| self.contains(candidate));
        self.insert_entry(&target, &record);
        self.persist()?;
        Ok(target)
    }

    /// Give `target` the style that currently applies to `source`.
    ///
    /// `source` need not be configured itself; an inherited or default style
    /// is copied just the same. Goes through [`StyleStore::update`], so
    /// copying a default-equivalent style clears `target`.
    pub fn copy_style(&mut self, source: &str, target: &str) -> Result<EditOutcome> {
        let record = self.get(source).clone();
        self.update(target, &record)
    }

    /// Key of the existing entry `path` refers to, raw or normalized.
    fn stored_key(&self, path: &str) -> Option<String> {
        if self.contains(path) {
            return Some(path.to_string());
        }
        let normalized = TagPath::normalize(path);
        self.contains(&normalized).then_some(normalized)
    }

    /// The settings-form save routine shared by update and rename.
    ///
    /// `original` and `target` are entry keys; all name validation has
    /// already happened.
    fn apply_edit(
        &mut self,
        original: &str,
        target: &str,
        record: &StyleRecord,
    ) -> Result<EditOutcome> {
        let moving = target != original;

        if moving && self.contains(target) {
            return Err(Error::AlreadyExists {
                path: target.to_string(),
            });
        }

        if self.is_default_equivalent(record) {
            // Nothing stored and nothing to store means nothing to persist
            if self.remove_entry(original).is_some() {
                self.persist()?;
            }
            return Ok(EditOutcome::Cleared(target.to_string()));
        }

        self.insert_entry(target, record);
        if moving {
            self.remove_entry(original);
        }
        self.persist()?;
        Ok(EditOutcome::Saved(target.to_string()))
    }
}
