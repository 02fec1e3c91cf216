//! Recording fake gateway for orchestrator tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use lumen_config::ModelsConfig;
use lumen_gateway::{GatewayError, InferenceGateway, InferenceRequest, InferenceResponse, Payload};

use crate::Analyzer;

/// One call as seen by [`FakeGateway`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub json: Option<serde_json::Value>,
    pub bytes: Option<Vec<u8>>,
}

/// Replays queued responses in order and records every call.
pub struct FakeGateway {
    responses: Mutex<VecDeque<Result<InferenceResponse, GatewayError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeGateway {
    pub fn new(responses: impl IntoIterator<Item = Result<InferenceResponse, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl InferenceGateway for FakeGateway {
    async fn invoke(
        &self,
        request: InferenceRequest<'_>,
    ) -> Result<InferenceResponse, GatewayError> {
        let (json, bytes) = match request.payload {
            Payload::Json(value) => (Some(value), None),
            Payload::Binary { bytes, .. } => (None, Some(bytes.to_vec())),
        };
        self.calls.lock().unwrap().push(RecordedCall {
            model: request.model.to_string(),
            json,
            bytes,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected inference call")
    }
}

pub fn json(value: serde_json::Value) -> Result<InferenceResponse, GatewayError> {
    Ok(InferenceResponse::Json(value))
}

pub fn api_error(status: u16) -> Result<InferenceResponse, GatewayError> {
    Err(GatewayError::Api {
        status,
        message: "upstream failure".into(),
    })
}

pub fn analyzer(
    responses: impl IntoIterator<Item = Result<InferenceResponse, GatewayError>>,
) -> Analyzer<FakeGateway> {
    Analyzer::new(FakeGateway::new(responses), ModelsConfig::default())
}
