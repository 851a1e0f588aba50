//! Error types shared across skp-to-m3u crates.

use std::path::PathBuf;

/// Top-level error type for skp-to-m3u operations.
#[derive(Debug, thiserror::Error)]
pub enum SkpError {
    #[error("{} cannot be found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Logging error: {message}")]
    Logging { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using SkpError.
pub type SkpResult<T> = Result<T, SkpError>;

impl SkpError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging {
            message: msg.into(),
        }
    }

    /// Whether this error means one of the inputs could not be located.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
