//! Error types for catalog generation.

use thiserror::Error;

/// Main error type for all catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed before a response arrived.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog server answered with a non-success status.
    #[error("Unexpected response {status} from {url}")]
    Response {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response body was not a JSON array of piece objects.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A piece is missing a field the generator depends on.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl CatalogError {
    /// Whether the failure came from talking to the remote API.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Transport(_) | CatalogError::Response { .. }
        )
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
