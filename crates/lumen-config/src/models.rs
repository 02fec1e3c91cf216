//! Model identifiers used by each skill.

use serde::{Deserialize, Serialize};

fn default_transcription() -> String {
    "openai/whisper-large-v3".to_string()
}

fn default_summarization() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_captioning() -> String {
    "Salesforce/blip-image-captioning-large".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Speech-to-text model for the conversation skill.
    #[serde(default = "default_transcription")]
    pub transcription: String,

    /// Summarization model shared by the conversation and document skills.
    #[serde(default = "default_summarization")]
    pub summarization: String,

    /// Image-captioning model for the image skill.
    #[serde(default = "default_captioning")]
    pub captioning: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            transcription: default_transcription(),
            summarization: default_summarization(),
            captioning: default_captioning(),
        }
    }
}
