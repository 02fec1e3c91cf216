//! Conversation skill: transcript, speaker turns, summary.

use lumen_core::enums::Skill;
use lumen_core::media::MediaAsset;
use lumen_core::results::ConversationResult;
use lumen_gateway::{InferenceGateway, InferenceRequest};

use crate::diarize::diarize;
use crate::{Analyzer, NO_TRANSCRIPT, SkillError, SummaryLength};

/// Summary bounds for transcripts.
pub const CONVERSATION_SUMMARY: SummaryLength = SummaryLength {
    max_length: 150,
    min_length: 30,
};

impl<G: InferenceGateway> Analyzer<G> {
    /// Transcribe `audio`, split the transcript into speaker turns, and
    /// summarize it.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::Validation`] for an empty upload (no call is
    /// made) and [`SkillError::Analysis`] if either inference call fails.
    pub async fn analyze_conversation(
        &self,
        audio: &MediaAsset,
    ) -> Result<ConversationResult, SkillError> {
        if audio.is_empty() {
            return Err(SkillError::Validation("No audio file provided".into()));
        }

        let request = InferenceRequest::binary(&self.models().transcription, audio);
        let transcript = self
            .call(Skill::Conversation, request)
            .await?
            .text_or("text", NO_TRANSCRIPT);

        let diarization = diarize(&transcript);

        let summary = self
            .summarize(Skill::Conversation, &transcript, CONVERSATION_SUMMARY)
            .await?;

        tracing::debug!(
            asset = %audio.name,
            turns = diarization.len(),
            "conversation analysis complete"
        );
        Ok(ConversationResult {
            transcript,
            diarization,
            summary,
        })
    }
}
