//! The style configuration store
//!
//! `StyleStore` is the only owner of the default record and the per-path
//! entries. Every public mutation validates first, applies the change in
//! memory, then writes the complete state through the backend.
//!
//! # Concurrency
//!
//! Mutations take `&mut self`, so within one process the borrow checker
//! enforces a single writer. The store holds no locks; callers sharing it
//! across threads must serialize access themselves (e.g. `Mutex<StyleStore<_>>`).

use crate::backend::SettingsBackend;
use crate::settings::{LoadReport, StyleSettings};
use crate::{Error, Resolver, Result, StyleRecord};

/// Owned, persisted tag style configuration.
#[derive(Debug)]
pub struct StyleStore<B: SettingsBackend> {
    settings: StyleSettings,
    backend: B,
}

impl<B: SettingsBackend> StyleStore<B> {
    /// Load the store from its backend.
    ///
    /// Missing state yields the compiled-in defaults. Malformed state is
    /// repaired (see [`StyleSettings::from_value`]).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backend cannot be read.
    pub fn open(backend: B) -> Result<Self> {
        Self::open_with_report(backend).map(|(store, _)| store)
    }

    /// Like [`StyleStore::open`], also returning what validation repaired.
    pub fn open_with_report(backend: B) -> Result<(Self, LoadReport)> {
        let (settings, report) = match backend.load()? {
            Some(value) => StyleSettings::from_value(value),
            None => {
                tracing::debug!("No persisted tag styles; starting from defaults");
                (StyleSettings::default(), LoadReport::default())
            }
        };

        tracing::debug!(
            entries = settings.tag_configs.len(),
            dropped = report.dropped_entries.len(),
            "Loaded tag style settings"
        );

        Ok((Self { settings, backend }, report))
    }

    /// Build a store from already validated settings without loading.
    pub fn with_settings(settings: StyleSettings, backend: B) -> Self {
        Self { settings, backend }
    }

    /// The persistence backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current snapshot of the full settings.
    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    /// The default record.
    pub fn default_record(&self) -> &StyleRecord {
        &self.settings.default_config
    }

    /// Resolver over the current snapshot.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.settings.default_config, &self.settings.tag_configs)
    }

    /// Style that applies to `path`: exact entry, nearest configured
    /// ancestor, or the default record. Never fails.
    pub fn get(&self, path: &str) -> &StyleRecord {
        self.resolver().resolve(path)
    }

    /// Ancestor whose style `path` inherits, if any.
    pub fn inherited_ancestor(&self, path: &str) -> Option<&str> {
        self.resolver().inherited_ancestor(path)
    }

    /// Explicit entry for exactly `path`.
    pub fn entry(&self, path: &str) -> Option<&StyleRecord> {
        self.settings.tag_configs.get(path)
    }

    /// Check if `path` has an explicit entry.
    pub fn contains(&self, path: &str) -> bool {
        self.settings.tag_configs.contains_key(path)
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.settings.tag_configs.len()
    }

    /// Check if there are no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.settings.tag_configs.is_empty()
    }

    /// All configured paths, sorted ascending.
    pub fn configured_paths(&self) -> Vec<&str> {
        // BTreeMap keys iterate in order already
        self.settings.tag_configs.keys().map(String::as_str).collect()
    }

    /// Check if `record` is indistinguishable from the default record.
    pub fn is_default_equivalent(&self, record: &StyleRecord) -> bool {
        record.is_equivalent_to(&self.settings.default_config)
    }

    /// Store a copy of `record` at `path`, replacing any existing entry.
    ///
    /// No default-equivalence pruning happens here; see
    /// [`StyleStore::update`] for the pruning edit workflow.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `path` is blank (store unchanged). An I/O error
    /// if persisting fails (the in-memory entry is kept).
    pub fn save(&mut self, path: &str, record: &StyleRecord) -> Result<()> {
        if path.trim().is_empty() {
            return Err(Error::invalid("tag path cannot be empty"));
        }
        self.insert_entry(path, record);
        self.persist()
    }

    /// Remove the entry at `path`.
    ///
    /// # Errors
    ///
    /// `NotFound` if `path` is empty or has no entry (store unchanged). An
    /// I/O error if persisting fails (the entry stays removed).
    pub fn delete(&mut self, path: &str) -> Result<()> {
        if !self.contains(path) {
            return Err(Error::NotFound {
                path: path.to_string(),
            });
        }
        self.remove_entry(path);
        self.persist()
    }

    /// Replace the default record in place.
    pub fn set_default(&mut self, record: &StyleRecord) -> Result<()> {
        tracing::debug!(?record, "Updating default tag style");
        self.settings.default_config = record.clone();
        self.persist()
    }

    pub(crate) fn insert_entry(&mut self, path: &str, record: &StyleRecord) {
        tracing::debug!(path, "Saving tag style");
        self.settings
            .tag_configs
            .insert(path.to_string(), record.clone());
    }

    pub(crate) fn remove_entry(&mut self, path: &str) -> Option<StyleRecord> {
        tracing::debug!(path, "Removing tag style");
        self.settings.tag_configs.remove(path)
    }

    /// Write the complete state through the backend.
    pub(crate) fn persist(&mut self) -> Result<()> {
        let value = self.settings.to_value()?;
        self.backend.persist(&value).inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to persist tag styles; in-memory state kept");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use serde_json::json;

    fn folder() -> StyleRecord {
        StyleRecord::new("folder", "#fff", "#333")
    }

    #[test]
    fn open_without_state_uses_defaults() {
        let store = StyleStore::open(MemoryBackend::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.default_record(), &StyleRecord::default());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn open_with_report_surfaces_dropped_entries() {
        let backend = MemoryBackend::with_value(json!({
            "tagConfigs": {"bad": 42}
        }));
        let (store, report) = StyleStore::open_with_report(backend).unwrap();
        assert!(store.is_empty());
        assert_eq!(report.dropped_entries, vec!["bad"]);
    }

    #[test]
    fn save_persists_complete_state() {
        let mut store = StyleStore::open(MemoryBackend::new()).unwrap();
        store.save("project", &folder()).unwrap();

        let written = store.backend().last_write().unwrap();
        assert_eq!(written["tagConfigs"]["project"]["icon"], json!("folder"));
        assert_eq!(written["defaultConfig"]["icon"], json!("hash"));
    }

    #[test]
    fn save_stores_a_copy() {
        let mut store = StyleStore::open(MemoryBackend::new()).unwrap();
        let mut record = folder();
        store.save("project", &record).unwrap();

        record.icon = "changed".into();
        assert_eq!(store.entry("project").unwrap().icon, "folder");
    }

    #[test]
    fn save_rejects_blank_path() {
        let mut store = StyleStore::open(MemoryBackend::new()).unwrap();
        for path in ["", "   "] {
            let err = store.save(path, &folder()).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument { .. }));
        }
        assert!(store.is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn delete_missing_path_is_not_found() {
        let mut store = StyleStore::open(MemoryBackend::new()).unwrap();
        for path in ["", "ghost"] {
            let err = store.delete(path).unwrap_err();
            assert!(matches!(err, Error::NotFound { .. }));
        }
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn set_default_changes_fallback() {
        let mut store = StyleStore::open(MemoryBackend::new()).unwrap();
        store.set_default(&folder()).unwrap();

        assert_eq!(store.get("anything"), &folder());
        assert!(store.is_default_equivalent(&folder()));
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn configured_paths_are_sorted() {
        let mut store = StyleStore::open(MemoryBackend::new()).unwrap();
        for path in ["zeta", "alpha/beta", "alpha", "Beta"] {
            store.save(path, &folder()).unwrap();
        }
        assert_eq!(
            store.configured_paths(),
            vec!["Beta", "alpha", "alpha/beta", "zeta"]
        );
    }
}
