use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the result store and article source.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Temporary file could not replace the target.
    #[error("failed to replace {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
