//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when invoking a hosted model.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API credential configured. Raised before any network I/O.
    #[error("inference API key is not configured (set LUMEN_INFERENCE__API_KEY)")]
    NotConfigured,

    /// The request itself is unusable (e.g. empty model id).
    #[error("invalid inference request: {0}")]
    InvalidRequest(String),

    /// HTTP transport error (DNS, connect, reset, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("inference API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// A JSON-declared response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A JSON payload could not be encoded.
    #[error("request encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Whether this is a configuration problem rather than an inference failure.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }
}
