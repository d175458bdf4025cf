//! Error types for pyfix-config

use std::path::PathBuf;

/// Result type for pyfix-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving formatter configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem or parse error from pyfix-fs
    #[error(transparent)]
    Fs(#[from] pyfix_fs::Error),

    /// A tool section exists but is not a table
    #[error("Section [{section}] in {path} must be a table")]
    InvalidSection { path: PathBuf, section: String },
}
