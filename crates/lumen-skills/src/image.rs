//! Image skill: caption and tags.

use lumen_core::enums::Skill;
use lumen_core::media::MediaAsset;
use lumen_core::results::ImageResult;
use lumen_gateway::{InferenceGateway, InferenceRequest};

use crate::text::caption_tags;
use crate::{Analyzer, NO_DESCRIPTION, SkillError};

/// Reported for every caption; the captioning model returns no score.
pub const CAPTION_CONFIDENCE: f64 = 0.91;

impl<G: InferenceGateway> Analyzer<G> {
    /// Caption `image` and derive tags from the caption.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::Validation`] for an empty upload and
    /// [`SkillError::Analysis`] if the captioning call fails.
    pub async fn analyze_image(&self, image: &MediaAsset) -> Result<ImageResult, SkillError> {
        if image.is_empty() {
            return Err(SkillError::Validation("No image file provided".into()));
        }

        let request = InferenceRequest::binary(&self.models().captioning, image);
        let description = self
            .call(Skill::Image, request)
            .await?
            .text_or("generated_text", NO_DESCRIPTION);
        let tags = caption_tags(&description);

        Ok(ImageResult {
            description,
            tags,
            confidence: CAPTION_CONFIDENCE,
        })
    }
}
