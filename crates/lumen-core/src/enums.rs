//! Skill, input-kind, and speaker enums for Lumen.
//!
//! Storage enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL columns. Speaker labels serialize to their
//! display form (`"Speaker 1"`) because that is what result consumers render.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Skill
// ---------------------------------------------------------------------------

/// One of the three user-selectable analysis workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Conversation,
    Image,
    Summarization,
}

impl Skill {
    pub const ALL: [Self; 3] = [Self::Conversation, Self::Image, Self::Summarization];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conversation => "conversation",
            Self::Image => "image",
            Self::Summarization => "summarization",
        }
    }

    /// Human-readable label used in log lines and error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conversation => "Audio analysis",
            Self::Image => "Image analysis",
            Self::Summarization => "Content summarization",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InputType
// ---------------------------------------------------------------------------

/// How the user supplied the content for a skill invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Audio,
    Image,
    File,
    Url,
}

impl InputType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
            Self::File => "file",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// Source of the text handed to the summarization skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Text read from an uploaded file.
    File,
    /// A URL; its content is never fetched.
    Url,
}

impl DocumentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Url => "url",
        }
    }

    /// The history input type recorded for this document source.
    #[must_use]
    pub const fn input_type(self) -> InputType {
        match self {
            Self::File => InputType::File,
            Self::Url => InputType::Url,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Speaker
// ---------------------------------------------------------------------------

/// Speaker label attached to a diarization turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Speaker {
    #[serde(rename = "Speaker 1")]
    One,
    #[serde(rename = "Speaker 2")]
    Two,
}

impl Speaker {
    /// The other of the two speakers.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "Speaker 1",
            Self::Two => "Speaker 2",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
