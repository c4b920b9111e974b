//! Error types for format operations

use crate::common::ReplayError;
use thiserror::Error;

/// Errors that can occur while rendering an operation batch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// The batch does not replay cleanly
    #[error("Invalid batch: {0}")]
    InvalidBatch(#[from] ReplayError),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

/// Failures reported by a [`DocumentService`](crate::publish::DocumentService)
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service refused the request
    #[error("request rejected: {0}")]
    Rejected(String),
    /// The target document does not exist
    #[error("unknown document '{0}'")]
    UnknownDocument(String),
    /// Transport or storage failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The request body could not be encoded
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors surfaced by [`publish`](crate::publish::publish)
///
/// Every variant carries enough context to retry the conversion from scratch.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The batch failed local replay; nothing was sent
    #[error("refusing to publish an invalid batch: {0}")]
    InvalidBatch(#[from] ReplayError),
    /// The document could not be created
    #[error("failed to create document '{title}': {source}")]
    Create { title: String, source: ServiceError },
    /// The batch was rejected; the document exists but is untouched
    #[error("failed to apply {operation_count} operations to document '{document_id}': {source}")]
    Apply {
        document_id: String,
        operation_count: usize,
        source: ServiceError,
    },
}
