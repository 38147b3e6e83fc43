//! JSON settings file

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::{Error, Result, io};

/// A JSON settings document on disk.
///
/// The file holds one opaque JSON object. A missing file is not an error:
/// it simply means nothing has been persisted yet.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Create a handle for the settings file at `path`.
    ///
    /// Nothing is read or created until `load` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the settings document.
    ///
    /// Returns `Ok(None)` when the file does not exist. A file that exists
    /// but is blank is treated the same way.
    pub fn load(&self) -> Result<Option<Value>> {
        let Some(content) = io::read_text_if_exists(&self.path)? else {
            tracing::debug!(path = %self.path.display(), "No settings file found");
            return Ok(None);
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| Error::ConfigParse {
                path: self.path.clone(),
                format: "JSON".into(),
                message: e.to_string(),
            })
    }

    /// Save the settings document, pretty-printed, with an atomic write.
    pub fn save(&self, value: &Value) -> Result<()> {
        let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: self.path.clone(),
            format: "JSON".into(),
            message: e.to_string(),
        })?;
        content.push('\n');

        io::write_text(&self.path, &content)
    }
}
