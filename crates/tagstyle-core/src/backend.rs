//! Persistence collaborators
//!
//! The store never touches storage directly. Hosts hand it a
//! [`SettingsBackend`] that loads the settings blob once at startup and
//! receives the complete state after every successful mutation.

use serde_json::Value;
use tagstyle_fs::SettingsFile;

use crate::Result;

/// Host-provided load/save of the opaque settings object.
pub trait SettingsBackend {
    /// Read the persisted blob, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<Value>>;

    /// Durably write the complete settings blob.
    fn persist(&mut self, settings: &Value) -> Result<()>;
}

/// Settings kept in memory only.
///
/// Useful for hosts without storage and for tests: every persisted blob is
/// recorded so callers can inspect what would have been written.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    initial: Option<Value>,
    writes: Vec<Value>,
}

impl MemoryBackend {
    /// Backend with nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose `load` returns `value`.
    pub fn with_value(value: Value) -> Self {
        Self {
            initial: Some(value),
            writes: Vec::new(),
        }
    }

    /// Most recently persisted blob.
    pub fn last_write(&self) -> Option<&Value> {
        self.writes.last()
    }

    /// Number of times `persist` has been called.
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl SettingsBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Value>> {
        Ok(self.writes.last().or(self.initial.as_ref()).cloned())
    }

    fn persist(&mut self, settings: &Value) -> Result<()> {
        self.writes.push(settings.clone());
        Ok(())
    }
}

impl SettingsBackend for SettingsFile {
    fn load(&self) -> Result<Option<Value>> {
        Ok(SettingsFile::load(self)?)
    }

    fn persist(&mut self, settings: &Value) -> Result<()> {
        Ok(self.save(settings)?)
    }
}

impl<B: SettingsBackend + ?Sized> SettingsBackend for Box<B> {
    fn load(&self) -> Result<Option<Value>> {
        (**self).load()
    }

    fn persist(&mut self, settings: &Value) -> Result<()> {
        (**self).persist(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memory_backend_starts_empty() {
        let backend = MemoryBackend::new();
        assert!(backend.load().unwrap().is_none());
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn memory_backend_load_returns_latest_write() {
        let mut backend = MemoryBackend::with_value(json!({"a": 1}));
        assert_eq!(backend.load().unwrap(), Some(json!({"a": 1})));

        backend.persist(&json!({"a": 2})).unwrap();
        assert_eq!(backend.load().unwrap(), Some(json!({"a": 2})));
        assert_eq!(backend.last_write(), Some(&json!({"a": 2})));
    }

    #[test]
    fn settings_file_backend_round_trips() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut backend = SettingsFile::new(temp.path().join("settings.json"));

        assert!(SettingsBackend::load(&backend).unwrap().is_none());
        backend.persist(&json!({"tagConfigs": {}})).unwrap();
        assert_eq!(
            SettingsBackend::load(&backend).unwrap(),
            Some(json!({"tagConfigs": {}}))
        );
    }
}
