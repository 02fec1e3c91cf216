//! Hosted inference endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default model-hosting endpoint base; model ids are appended as path segments.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InferenceConfig {
    /// Bearer credential sent with every inference call.
    #[serde(default)]
    pub api_key: String,

    /// Endpoint base, e.g. `https://api-inference.huggingface.co/models`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl InferenceConfig {
    /// Check if a credential is present. Calls fail before any network I/O otherwise.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Build the endpoint URL for `model`.
    ///
    /// Model ids such as `openai/whisper-large-v3` keep their slash; a trailing
    /// slash on the base is tolerated.
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/{model}", self.base_url.trim_end_matches('/'))
    }

    /// Validate the base URL shape.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the base is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.starts_with("http://") || self.base_url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "inference.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            })
        }
    }
}
