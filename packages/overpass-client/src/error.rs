//! Error types for the Overpass client.

use thiserror::Error;

/// Result type for Overpass client operations.
pub type Result<T> = std::result::Result<T, OverpassError>;

/// Overpass client errors.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Configuration error (bad endpoint, client build failure)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response, rate limit, query rejected)
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
