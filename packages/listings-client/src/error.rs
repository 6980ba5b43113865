//! Error types for the listings client.

use thiserror::Error;

/// Result type for listings client operations.
pub type Result<T> = std::result::Result<T, ListingsError>;

/// Listings client errors.
#[derive(Debug, Error)]
pub enum ListingsError {
    /// Network error (connection failed, body could not be read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ListingsError {
    fn from(err: serde_json::Error) -> Self {
        ListingsError::Parse(err.to_string())
    }
}
