//! History records for past skill invocations.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{InputType, Skill};
use crate::results::SkillResult;

/// Maximum number of history rows returned by a read.
pub const HISTORY_LIMIT: u32 = 10;

/// A persisted skill invocation, read back newest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub user_id: Option<String>,
    pub skill: Skill,
    pub input_type: InputType,
    pub input_name: String,
    pub result: SkillResult,
    pub created_at: DateTime<Utc>,
}

/// Insert form of a [`HistoryItem`]; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryEntry {
    pub user_id: Option<String>,
    pub input_type: InputType,
    pub input_name: String,
    pub result: SkillResult,
}

impl NewHistoryEntry {
    /// Anonymous entry; the history table allows a null `user_id`.
    #[must_use]
    pub fn new(input_type: InputType, input_name: impl Into<String>, result: SkillResult) -> Self {
        Self {
            user_id: None,
            input_type,
            input_name: input_name.into(),
            result,
        }
    }

    /// The skill is always derived from the result so the two cannot disagree.
    #[must_use]
    pub const fn skill(&self) -> Skill {
        self.result.skill()
    }
}
