//! Settings location and store opening

use std::path::{Path, PathBuf};

use tagstyle_core::StyleStore;
use tagstyle_fs::SettingsFile;

use crate::error::{CliError, Result};

/// Directory under the platform config dir holding tagstyle settings
const APP_DIR: &str = "tagstyle";

/// Settings file name inside [`APP_DIR`]
const SETTINGS_FILE: &str = "settings.json";

/// Platform-appropriate settings path.
///
/// - Linux: `~/.config/tagstyle/settings.json`
/// - macOS: `~/Library/Application Support/tagstyle/settings.json`
/// - Windows: `%APPDATA%\tagstyle\settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(SETTINGS_FILE))
}

/// Pick the settings file: the explicit path (flag or environment) wins,
/// otherwise the platform default.
pub fn resolve_settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    default_settings_path().ok_or_else(|| {
        CliError::user("Could not determine a config directory; pass --settings <FILE>")
    })
}

/// Open the style store backed by the settings file at `path`.
///
/// Anything load-time validation had to repair is logged as a warning.
pub fn open_store(path: &Path) -> Result<StyleStore<SettingsFile>> {
    tracing::debug!(path = %path.display(), "Opening tag style settings");
    let (store, report) = StyleStore::open_with_report(SettingsFile::new(path))?;

    if !report.is_clean() {
        tracing::warn!(
            dropped = ?report.dropped_entries,
            backfilled = ?report.backfilled_fields,
            invalid = ?report.invalid_sections,
            "Repaired persisted tag styles"
        );
    }
    Ok(store)
}
