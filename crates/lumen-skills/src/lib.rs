//! # lumen-skills
//!
//! Skill orchestration for Lumen.
//!
//! Each skill turns one user-supplied asset into one structured result by
//! composing at most two inference calls, issued sequentially:
//! - conversation: speech-to-text, textual diarization, summarization
//! - image: captioning, tag extraction
//! - document/URL: summarization, key-point extraction
//!
//! [`Analyzer`] owns the gateway and the configured model ids; the skills are
//! implemented as `impl Analyzer` blocks in their own modules. Any gateway
//! failure aborts the skill with [`SkillError::Analysis`]; an unexpected
//! response shape does not, and is replaced by a fixed placeholder string.

pub mod conversation;
pub mod diarize;
pub mod document;
pub mod image;
pub mod output;
pub mod text;

mod error;
#[cfg(test)]
mod test_support;

pub use error::SkillError;

use lumen_config::ModelsConfig;
use lumen_core::enums::Skill;
use lumen_gateway::{InferenceGateway, InferenceRequest};
use serde_json::json;

use crate::output::ModelOutput;

/// Fallback when no transcript can be read from the speech-to-text response.
pub const NO_TRANSCRIPT: &str = "[No transcription available]";
/// Fallback when no summary can be read from the summarization response.
pub const NO_SUMMARY: &str = "No summary available";
/// Fallback when no caption can be read from the captioning response.
pub const NO_DESCRIPTION: &str = "No description available";

/// Length bounds passed to the summarization model. Decoding is always greedy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLength {
    pub max_length: u32,
    pub min_length: u32,
}

impl SummaryLength {
    /// Request body in the `{inputs, parameters}` shape the hosted summarizers expect.
    #[must_use]
    pub fn request_body(self, text: &str) -> serde_json::Value {
        json!({
            "inputs": text,
            "parameters": {
                "max_length": self.max_length,
                "min_length": self.min_length,
                "do_sample": false,
            }
        })
    }
}

/// Runs skills against an inference gateway.
pub struct Analyzer<G> {
    gateway: G,
    models: ModelsConfig,
}

impl<G: InferenceGateway> Analyzer<G> {
    #[must_use]
    pub const fn new(gateway: G, models: ModelsConfig) -> Self {
        Self { gateway, models }
    }

    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    #[must_use]
    pub const fn models(&self) -> &ModelsConfig {
        &self.models
    }

    /// Issue one inference call on behalf of `skill`.
    async fn call(
        &self,
        skill: Skill,
        request: InferenceRequest<'_>,
    ) -> Result<ModelOutput, SkillError> {
        let model = request.model;
        match self.gateway.invoke(request).await {
            Ok(response) => Ok(ModelOutput::from(response)),
            Err(source) => {
                tracing::warn!(%skill, model, error = %source, "inference call failed");
                Err(SkillError::Analysis { skill, source })
            }
        }
    }

    /// Summarize `text` with the configured summarization model.
    async fn summarize(
        &self,
        skill: Skill,
        text: &str,
        length: SummaryLength,
    ) -> Result<String, SkillError> {
        let request = InferenceRequest::json(&self.models.summarization, length.request_body(text));
        let output = self.call(skill, request).await?;
        Ok(output.text_or("summary_text", NO_SUMMARY))
    }
}
