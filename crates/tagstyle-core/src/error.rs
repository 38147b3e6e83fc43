//! Error types for tagstyle-core

/// Result type for tagstyle-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in style store operations
///
/// Validation failures (`InvalidArgument`, `AlreadyExists`, `NotFound`) are
/// raised before any state changes. The I/O variants come from the
/// persistence backend and may be raised after an in-memory mutation has
/// already been applied.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required path or record was empty or malformed
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No configuration exists for the given path
    #[error("No tag configuration for '{path}'")]
    NotFound { path: String },

    /// A configuration already exists for the given path
    #[error("Tag configuration for '{path}' already exists")]
    AlreadyExists { path: String },

    // Transparent wrappers for persistence failures
    /// Settings file error from tagstyle-fs
    #[error(transparent)]
    Fs(#[from] tagstyle_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an `InvalidArgument` error with the given message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error came from the persistence layer
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Fs(_) | Self::Io(_) | Self::Json(_))
    }
}
