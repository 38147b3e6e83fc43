//! Hierarchical tag style resolution
//!
//! This crate resolves a display style for slash-namespaced tags such as
//! `project/task` and maintains the configuration those styles come from:
//!
//! - **Resolution**: exact entry, else the deepest configured ancestor,
//!   else the default record ([`Resolver`])
//! - **Store**: the single owner of the default record and per-path entries,
//!   persisted through a host [`SettingsBackend`] after every mutation
//!   ([`StyleStore`])
//! - **Edit workflows**: add, update, rename, duplicate and copy with
//!   collision checks and default-equivalence pruning
//!
//! # Architecture
//!
//! ```text
//!        renderer / settings UI / CLI
//!                    |
//!               StyleStore ---- Resolver (borrowed snapshot)
//!                    |
//!             SettingsBackend
//!                    |
//!     MemoryBackend | tagstyle_fs::SettingsFile
//! ```
//!
//! # Example
//!
//! ```
//! use tagstyle_core::{MemoryBackend, StyleRecord, StyleStore};
//!
//! let mut store = StyleStore::open(MemoryBackend::new())?;
//! store.save("project", &StyleRecord::new("folder", "#fff", "#333"))?;
//!
//! assert_eq!(store.get("project/task").icon, "folder");
//! assert_eq!(store.inherited_ancestor("project/task"), Some("project"));
//! assert_eq!(store.get("other"), store.default_record());
//! # Ok::<(), tagstyle_core::Error>(())
//! ```

pub mod backend;
pub mod edit;
pub mod error;
pub mod path;
pub mod record;
pub mod resolver;
pub mod settings;
pub mod store;

pub use backend::{MemoryBackend, SettingsBackend};
pub use edit::{EditOutcome, copy_name};
pub use error::{Error, Result};
pub use path::TagPath;
pub use record::StyleRecord;
pub use resolver::{Resolution, ResolvedTag, Resolver};
pub use settings::{LoadReport, StyleSettings};
pub use store::StyleStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_found_displays_path() {
        let error = Error::NotFound {
            path: "project/task".into(),
        };
        let display = error.to_string();
        assert!(
            display.contains("project/task"),
            "Error display should contain the path, got: {}",
            display
        );
    }

    #[test]
    fn io_errors_are_classified() {
        let io = Error::from(std::io::Error::other("disk full"));
        assert!(io.is_io());
        assert!(!Error::invalid("bad").is_io());
        assert!(
            !Error::AlreadyExists {
                path: "x".into()
            }
            .is_io()
        );
    }
}
