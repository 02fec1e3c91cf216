//! Document and URL summarization skill.

use lumen_core::enums::{DocumentKind, Skill};
use lumen_core::results::SummarizationResult;
use lumen_gateway::InferenceGateway;

use crate::text::{key_points, word_count};
use crate::{Analyzer, SkillError, SummaryLength};

/// Summary bounds for documents and URLs.
pub const DOCUMENT_SUMMARY: SummaryLength = SummaryLength {
    max_length: 200,
    min_length: 50,
};

/// Text sent for summarization.
///
/// URLs are not fetched; the model sees a fixed placeholder sentence built
/// from the URL itself.
#[must_use]
pub fn source_text(input: &str, kind: DocumentKind) -> String {
    match kind {
        DocumentKind::File => input.to_string(),
        DocumentKind::Url => format!("Content from URL: {input}"),
    }
}

impl<G: InferenceGateway> Analyzer<G> {
    /// Summarize document text, or a URL placeholder, and extract key points.
    ///
    /// Key points and counts describe the text that was sent, not the summary.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::Validation`] for blank input and
    /// [`SkillError::Analysis`] if the summarization call fails.
    pub async fn summarize_content(
        &self,
        input: &str,
        kind: DocumentKind,
    ) -> Result<SummarizationResult, SkillError> {
        if input.trim().is_empty() {
            return Err(SkillError::Validation("No input provided".into()));
        }

        let text = source_text(input, kind);
        let summary = self
            .summarize(Skill::Summarization, &text, DOCUMENT_SUMMARY)
            .await?;

        Ok(SummarizationResult {
            summary,
            key_points: key_points(&text),
            character_length: text.chars().count() as u64,
            word_count: word_count(&text),
        })
    }
}
