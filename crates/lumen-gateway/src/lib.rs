//! # lumen-gateway
//!
//! Hosted model inference gateway for Lumen.
//!
//! Every inference call is a single `POST {base_url}/{model}` carrying a
//! bearer credential and either a JSON body (`{inputs, parameters}`) or the raw
//! bytes of an uploaded file. Responses are normalized by declared content
//! type into [`InferenceResponse`]; interpreting the JSON shape is left to the
//! caller because hosted models disagree on it (array of one object, single
//! object, bare string).
//!
//! Calls are fire-once: no retry, no timeout beyond the transport defaults,
//! no rate limiting.
//!
//! The [`InferenceGateway`] trait is the seam orchestrators depend on;
//! [`HttpGateway`] is the production implementation.

mod error;
mod http;

pub use error::GatewayError;

use std::future::Future;

use lumen_config::InferenceConfig;
use lumen_core::media::MediaAsset;
use reqwest::header::CONTENT_TYPE;

use crate::http::{check_response, normalize};

// ── Types ──────────────────────────────────────────────────────────

/// Body of an inference call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<'a> {
    /// JSON body; sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Raw upload bytes; sent with their native content type, if known.
    Binary {
        bytes: &'a [u8],
        content_type: Option<&'a str>,
    },
}

/// One inference call against one model.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest<'a> {
    /// Model identifier appended to the endpoint base (e.g. `facebook/bart-large-cnn`).
    pub model: &'a str,
    pub payload: Payload<'a>,
}

impl<'a> InferenceRequest<'a> {
    /// A JSON request.
    #[must_use]
    pub const fn json(model: &'a str, body: serde_json::Value) -> Self {
        Self {
            model,
            payload: Payload::Json(body),
        }
    }

    /// A binary request carrying an uploaded asset.
    #[must_use]
    pub fn binary(model: &'a str, asset: &'a MediaAsset) -> Self {
        Self {
            model,
            payload: Payload::Binary {
                bytes: &asset.bytes,
                content_type: asset.content_type.as_deref(),
            },
        }
    }

    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self.payload, Payload::Binary { .. })
    }
}

/// Response of an inference call, normalized by declared content type.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResponse {
    /// Parsed JSON, returned as-is.
    Json(serde_json::Value),
    /// Non-JSON body (audio or image blobs).
    Binary {
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

// ── Gateway ────────────────────────────────────────────────────────

/// Sends inference requests to a model-hosting endpoint.
pub trait InferenceGateway: Send + Sync {
    /// Invoke one model once.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] without touching the network
    /// when no credential is configured, [`GatewayError::Api`] for a
    /// non-success status, and [`GatewayError::Http`] for transport failures.
    fn invoke(
        &self,
        request: InferenceRequest<'_>,
    ) -> impl Future<Output = Result<InferenceResponse, GatewayError>> + Send;
}

/// `reqwest`-backed gateway built from an explicit [`InferenceConfig`].
pub struct HttpGateway {
    http: reqwest::Client,
    config: InferenceConfig,
}

impl HttpGateway {
    /// Create a gateway for the configured endpoint.
    ///
    /// A missing credential is not rejected here; it surfaces as
    /// [`GatewayError::NotConfigured`] on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &InferenceConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("lumen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }
}

impl InferenceGateway for HttpGateway {
    async fn invoke(
        &self,
        request: InferenceRequest<'_>,
    ) -> Result<InferenceResponse, GatewayError> {
        if !self.config.is_configured() {
            return Err(GatewayError::NotConfigured);
        }
        if request.model.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "model identifier is empty".into(),
            ));
        }

        let url = self.config.model_url(request.model);
        let binary = request.is_binary();
        let builder = self.http.post(&url).bearer_auth(&self.config.api_key);
        let builder = match request.payload {
            Payload::Json(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&body)?),
            Payload::Binary {
                bytes,
                content_type,
            } => {
                let builder = builder.body(bytes.to_vec());
                match content_type {
                    Some(ct) => builder.header(CONTENT_TYPE, ct),
                    None => builder,
                }
            }
        };

        tracing::debug!(model = request.model, binary, "invoking inference model");
        let resp = builder.send().await.inspect_err(|e| {
            tracing::debug!(model = request.model, %e, "inference transport failure");
        })?;
        tracing::debug!(model = request.model, status = resp.status().as_u16(), "inference response");

        normalize(check_response(resp).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_request_borrows_asset() {
        let asset = MediaAsset::new("clip.wav", Some("audio/wav".into()), vec![1, 2, 3]);
        let request = InferenceRequest::binary("openai/whisper-large-v3", &asset);
        assert!(request.is_binary());
        assert_eq!(
            request.payload,
            Payload::Binary {
                bytes: &[1, 2, 3],
                content_type: Some("audio/wav"),
            }
        );
    }

    #[test]
    fn json_request_is_not_binary() {
        let request = InferenceRequest::json("facebook/bart-large-cnn", serde_json::json!({}));
        assert!(!request.is_binary());
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        // Unroutable base: reaching the network would surface an Http error instead.
        let config = InferenceConfig {
            api_key: String::new(),
            base_url: "http://127.0.0.1:9/models".into(),
        };
        let gateway = HttpGateway::new(&config).unwrap();
        let err = gateway
            .invoke(InferenceRequest::json("m", serde_json::json!({})))
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn empty_model_is_invalid() {
        let config = InferenceConfig {
            api_key: "hf_test".into(),
            base_url: "http://127.0.0.1:9/models".into(),
        };
        let gateway = HttpGateway::new(&config).unwrap();
        let err = gateway
            .invoke(InferenceRequest::json(" ", serde_json::json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest(_)));
    }
}
