use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`Storage`](super::Storage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is not a valid key-value document: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: u64, quota: u64 },
}
