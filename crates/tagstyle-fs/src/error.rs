//! Error types for tagstyle-fs

use std::path::PathBuf;

/// Result type for tagstyle-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing settings files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} settings at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} settings for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_includes_path() {
        let err = Error::io(
            "/tmp/settings.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let display = err.to_string();
        assert!(display.contains("/tmp/settings.json"));
        assert!(display.contains("gone"));
    }

    #[test]
    fn parse_error_display_names_format() {
        let err = Error::ConfigParse {
            path: PathBuf::from("settings.json"),
            format: "JSON".into(),
            message: "expected value".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse JSON settings at settings.json: expected value"
        );
    }
}
