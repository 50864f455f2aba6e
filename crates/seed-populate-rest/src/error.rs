//! Error types for the REST populator.

use thiserror::Error;

/// Errors from a single request to the backend.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never got a response (connect, timeout, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A success response whose body was not what we expected
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl SinkError {
    /// HTTP status, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SinkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors that stop a populate command before any request is sent.
#[derive(Error, Debug)]
pub enum PopulateError {
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,

    #[error("Missing connection setting {0}")]
    MissingConnection(&'static str),

    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
