//! Storage error types.

use std::path::PathBuf;

/// Errors from the storage facility or the repository.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure reading or writing the facility file.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The facility file exists but is not a JSON object of strings.
    #[error("storage file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    /// Encoding or decoding a stored value failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
