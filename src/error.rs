//! Error types for the dummy store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, reading, or wiping a dummy store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(
        "No store generation root directory configured. Set `root_dir` in the configuration \
         or DUMMY_STORE_ROOT_DIR before opening a store."
    )]
    NotConfigured,

    #[error("Store document not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for StoreError {
    fn from(err: config::ConfigError) -> Self {
        StoreError::Config(err.to_string())
    }
}

impl StoreError {
    /// Map an I/O error raised while reading `path`, keeping vanished documents distinguishable.
    pub(crate) fn from_read(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io(err)
        }
    }
}
