//! Cross-cutting error types for Lumen.
//!
//! Domain-specific errors (e.g., `GatewayError`, `DatabaseError`) are defined in
//! their respective crates and converge into `anyhow` in `lumen-cli`.

use thiserror::Error;

/// Errors raised while mapping stored or serialized values onto core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored or supplied value does not name a known variant.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A skill result could not be encoded or decoded.
    #[error("Result encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
