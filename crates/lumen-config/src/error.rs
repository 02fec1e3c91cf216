//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or env var could not be parsed into the config shape.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is unusable (e.g. a non-http base URL).
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
