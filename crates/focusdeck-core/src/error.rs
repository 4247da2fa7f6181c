//! Error types for focusdeck-core.
//!
//! Persistence is best-effort by design: the [`crate::store`] helpers
//! swallow these errors after logging them, so they mostly matter to
//! `Store` implementations and to tests.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::store::Store`] implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not resolve or create the per-user data directory.
    #[error("Failed to prepare data directory at {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a record failed.
    #[error("IO error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized for writing.
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for StoreError.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
