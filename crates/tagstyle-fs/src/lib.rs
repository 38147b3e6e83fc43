//! Filesystem layer for tagstyle
//!
//! Provides lock-protected atomic writes and the JSON settings file that
//! hosts use as the persistence collaborator for the style store.

pub mod error;
pub mod io;
pub mod settings;

pub use error::{Error, Result};
pub use settings::SettingsFile;
