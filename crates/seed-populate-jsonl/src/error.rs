//! Error types for the JSONL export target.

use thiserror::Error;

/// Errors that can occur while writing JSONL files.
#[derive(Error, Debug)]
pub enum JsonlWriterError {
    /// Table names become file names, so they must be plain identifiers.
    #[error("Invalid table name for a file: {0:?}")]
    InvalidTableName(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
