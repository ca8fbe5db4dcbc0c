//! Error types for transpose-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in transpose-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File content is not valid UTF-16 text
    #[error("unable to decode '{path}' as UTF-16 text")]
    Decode { path: PathBuf },

    /// A data row lacks the configured key or value field
    #[error("unable to process '{path}' as column `{field}` is missing")]
    MissingField { path: PathBuf, field: String },

    /// The same column key appears on more than one row of a file
    #[error("unable to process '{path}' as column `{key}` appears more than once")]
    DuplicateKey { path: PathBuf, key: String },

    /// Input directory is absent or not a directory
    #[error("input directory does not exist: {0}")]
    InputDirectory(PathBuf),

    /// Output directory is absent or not a directory
    #[error("output directory does not exist: {0}")]
    OutputDirectory(PathBuf),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error aborts the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::FileRead { .. }
                | Error::Csv { .. }
                | Error::Decode { .. }
                | Error::MissingField { .. }
                | Error::DuplicateKey { .. }
        )
    }
}
