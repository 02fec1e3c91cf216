//! Shared HTTP response helpers for the gateway.
//!
//! Centralizes the status check (non-success → [`GatewayError::Api`]) and the
//! content-type based normalization so the client stays focused on request
//! construction.

use reqwest::header::CONTENT_TYPE;

use crate::InferenceResponse;
use crate::error::GatewayError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Every non-success status,
/// including 429 and 503 "model loading" responses, becomes
/// [`GatewayError::Api`] carrying the response body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    if !resp.status().is_success() {
        return Err(GatewayError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Turn a successful response into an [`InferenceResponse`].
///
/// JSON-declared bodies are parsed and returned as-is, whatever their shape.
/// Everything else is returned as raw bytes with the declared content type.
pub async fn normalize(resp: reqwest::Response) -> Result<InferenceResponse, GatewayError> {
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = resp.bytes().await?;

    if is_json(content_type.as_deref()) {
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| GatewayError::Parse(format!("invalid JSON body: {e}")))?;
        Ok(InferenceResponse::Json(value))
    } else {
        Ok(InferenceResponse::Binary {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

/// Whether a declared content type is JSON.
fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, content_type: Option<&str>, body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(ct) = content_type {
            builder = builder.header("Content-Type", ct);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[test]
    fn json_detection() {
        assert!(is_json(Some("application/json")));
        assert!(is_json(Some("application/json; charset=utf-8")));
        assert!(!is_json(Some("image/png")));
        assert!(!is_json(None));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(503, Some("application/json"), r#"{"error":"Model is loading"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            GatewayError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, r#"{"error":"Model is loading"}"#);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_rate_limit_is_plain_api_error() {
        let resp = mock_response(429, None, "slow down");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, GatewayError::Api { status: 429, .. }));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, None, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn normalize_array_of_one_object() {
        let resp = mock_response(
            200,
            Some("application/json"),
            r#"[{"summary_text":"A short summary."}]"#,
        );
        let normalized = normalize(resp).await.unwrap();
        assert_eq!(
            normalized,
            InferenceResponse::Json(serde_json::json!([{"summary_text": "A short summary."}]))
        );
    }

    #[tokio::test]
    async fn normalize_single_object() {
        let resp = mock_response(200, Some("application/json"), r#"{"text":"hello"}"#);
        let normalized = normalize(resp).await.unwrap();
        assert_eq!(
            normalized,
            InferenceResponse::Json(serde_json::json!({"text": "hello"}))
        );
    }

    #[tokio::test]
    async fn normalize_binary_body() {
        let resp = mock_response(200, Some("audio/flac"), "fLaC");
        let normalized = normalize(resp).await.unwrap();
        assert_eq!(
            normalized,
            InferenceResponse::Binary {
                content_type: Some("audio/flac".into()),
                bytes: b"fLaC".to_vec(),
            }
        );
    }

    #[tokio::test]
    async fn normalize_missing_content_type_is_binary() {
        let resp = mock_response(200, None, "{}");
        let normalized = normalize(resp).await.unwrap();
        assert!(matches!(normalized, InferenceResponse::Binary { content_type: None, .. }));
    }

    #[tokio::test]
    async fn normalize_malformed_json_is_parse_error() {
        let resp = mock_response(200, Some("application/json"), "{not json");
        let err = normalize(resp).await.unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }
}
