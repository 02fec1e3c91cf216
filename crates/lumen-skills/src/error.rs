//! Skill orchestration error types.

use lumen_core::enums::Skill;
use lumen_gateway::GatewayError;
use thiserror::Error;

/// Errors returned by the skill orchestrators.
///
/// A skill either returns its complete result or one of these; there are no
/// partial results.
#[derive(Debug, Error)]
pub enum SkillError {
    /// Required input missing or blank. No network call was made.
    #[error("{0}")]
    Validation(String),

    /// An inference call failed; the whole skill invocation is aborted.
    #[error("{} failed: {source}", .skill.label())]
    Analysis {
        skill: Skill,
        #[source]
        source: GatewayError,
    },
}

impl SkillError {
    /// Whether the failure stems from missing configuration (no API key).
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        match self {
            Self::Analysis { source, .. } => source.is_configuration(),
            Self::Validation(_) => false,
        }
    }
}
