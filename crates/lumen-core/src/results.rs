//! Structured skill results.
//!
//! Every orchestrator produces exactly one of these records. Field names
//! serialize in camelCase (`keyPoints`, `characterLength`) so stored history
//! rows keep the shape consumers already read.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Skill, Speaker};
use crate::errors::CoreError;

/// One synthesized speaker turn.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiarizationTurn {
    pub speaker: Speaker,
    pub text: String,
    /// `"00:SS"` offset; see `lumen_skills::diarize` for the rollover caveat.
    pub timestamp: String,
}

/// Output of the conversation skill.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConversationResult {
    pub transcript: String,
    pub diarization: Vec<DiarizationTurn>,
    pub summary: String,
}

/// Output of the image skill.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImageResult {
    pub description: String,
    pub tags: Vec<String>,
    /// Fixed value; the captioning model reports no score.
    pub confidence: f64,
}

/// Output of the document/URL summarization skill.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationResult {
    pub summary: String,
    pub key_points: Vec<String>,
    /// Character count of the text that was sent for summarization.
    pub character_length: u64,
    #[serde(default)]
    pub word_count: u64,
}

/// Exactly one of the three skill results.
///
/// Serialized untagged: the owning skill travels alongside (e.g. in the
/// `skill` column of a history row) and selects the variant on decode.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum SkillResult {
    Conversation(ConversationResult),
    Image(ImageResult),
    Summarization(SummarizationResult),
}

impl SkillResult {
    /// The skill that produced this result.
    #[must_use]
    pub const fn skill(&self) -> Skill {
        match self {
            Self::Conversation(_) => Skill::Conversation,
            Self::Image(_) => Skill::Image,
            Self::Summarization(_) => Skill::Summarization,
        }
    }

    /// Encode as the JSON text stored in the history table.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Encoding` if serialization fails.
    pub fn to_json_text(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode stored JSON text using `skill` to pick the variant.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Encoding` if the text is not valid JSON for the
    /// record belonging to `skill`.
    pub fn from_json_text(skill: Skill, text: &str) -> Result<Self, CoreError> {
        Ok(match skill {
            Skill::Conversation => Self::Conversation(serde_json::from_str(text)?),
            Skill::Image => Self::Image(serde_json::from_str(text)?),
            Skill::Summarization => Self::Summarization(serde_json::from_str(text)?),
        })
    }
}

impl From<ConversationResult> for SkillResult {
    fn from(value: ConversationResult) -> Self {
        Self::Conversation(value)
    }
}

impl From<ImageResult> for SkillResult {
    fn from(value: ImageResult) -> Self {
        Self::Image(value)
    }
}

impl From<SummarizationResult> for SkillResult {
    fn from(value: SummarizationResult) -> Self {
        Self::Summarization(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summarization() -> SummarizationResult {
        SummarizationResult {
            summary: "Short.".into(),
            key_points: vec!["The first sentence is long enough".into()],
            character_length: 42,
            word_count: 7,
        }
    }

    #[test]
    fn summarization_uses_camel_case_keys() {
        let json = serde_json::to_value(summarization()).unwrap();
        assert!(json.get("keyPoints").is_some());
        assert!(json.get("characterLength").is_some());
        assert!(json.get("wordCount").is_some());
        assert!(json.get("key_points").is_none());
    }

    #[test]
    fn word_count_defaults_when_absent() {
        let parsed: SummarizationResult = serde_json::from_str(
            r#"{"summary":"s","keyPoints":[],"characterLength":3}"#,
        )
        .unwrap();
        assert_eq!(parsed.word_count, 0);
    }

    #[test]
    fn json_text_decodes_by_skill() {
        let result = SkillResult::from(summarization());
        let text = result.to_json_text().unwrap();
        let decoded = SkillResult::from_json_text(Skill::Summarization, &text).unwrap();
        assert_eq!(decoded, result);
        assert_eq!(decoded.skill(), Skill::Summarization);
    }

    #[test]
    fn json_text_rejects_mismatched_skill() {
        let text = SkillResult::from(summarization()).to_json_text().unwrap();
        let err = SkillResult::from_json_text(Skill::Image, &text).unwrap_err();
        assert!(matches!(err, CoreError::Encoding(_)));
    }

    #[test]
    fn untagged_serialization_has_no_wrapper() {
        let result = SkillResult::Image(ImageResult {
            description: "a dog".into(),
            tags: vec!["dog".into()],
            confidence: 0.91,
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["description"], "a dog");
        assert!(json.get("Image").is_none());
    }
}
