//! Error types for the embedding pipeline.
//!
//! These cover the build-time half only. The runtime file system compiled
//! into generated code reports through `std::io::Error`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a directory into generated source.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading input files or writing the archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("error walking input directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The root to embed does not exist or is not a directory.
    #[error("not a directory: {0}")]
    InvalidRoot(PathBuf),

    /// A file path cannot be represented in the archive.
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    /// A walked file does not live under the embed root.
    #[error("{path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// The requested module name is not a usable Rust identifier.
    #[error("invalid module name: {0:?}")]
    InvalidModuleName(String),

    /// Build configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
