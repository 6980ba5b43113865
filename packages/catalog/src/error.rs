//! Typed errors for the catalog library.

use listings_client::ListingsError;
use thiserror::Error;

/// Message shown to the user for any failed load.
pub const LOAD_FAILED_MESSAGE: &str = "Something went wrong while loading products.";

/// Errors a [`ListingSource`](crate::traits::source::ListingSource) can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// Network failure or non-success status
    #[error("transport error: {0}")]
    Transport(String),

    /// Response could not be decoded
    #[error("parse error: {0}")]
    Parse(String),
}

impl SourceError {
    /// The message surfaced to the user. Both kinds read the same.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

impl From<ListingsError> for SourceError {
    fn from(err: ListingsError) -> Self {
        match err {
            ListingsError::Parse(msg) => SourceError::Parse(msg),
            ListingsError::Network(e) if e.is_decode() => SourceError::Parse(e.to_string()),
            other => SourceError::Transport(other.to_string()),
        }
    }
}

/// Result type alias for listing source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Invalid browse configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
}
