//! Text heuristics shared by the skills: sentence splitting, caption tags,
//! and key points.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of tags derived from a caption.
pub const MAX_TAGS: usize = 7;

/// Maximum number of key points extracted from a document.
pub const MAX_KEY_POINTS: usize = 5;

/// Fragments must be longer than this (in characters) to count as key points.
const KEY_POINT_MIN_CHARS: usize = 20;

/// Words dropped from caption tags.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are",
];

static TAG_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[a-z]{3,}(?-u:\b)").expect("tag pattern is valid"));

/// Split on runs of `.`, `!`, `?` and yield trimmed, non-empty fragments.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Derive up to [`MAX_TAGS`] tags from a caption.
///
/// Lowercases, keeps ASCII words of three or more letters, drops
/// [`STOPWORDS`], and keeps first-appearance order. Word boundaries are
/// ASCII, so accented letters split a word: "café" yields `"caf"`.
/// Repeated words are not collapsed, so "a dog and a dog" yields `["dog", "dog"]`.
#[must_use]
pub fn caption_tags(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    TAG_WORD
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !STOPWORDS.contains(word))
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}

/// The first [`MAX_KEY_POINTS`] sentences longer than 20 characters, verbatim
/// minus surrounding whitespace and terminators.
#[must_use]
pub fn key_points(text: &str) -> Vec<String> {
    sentences(text)
        .filter(|s| s.chars().count() > KEY_POINT_MIN_CHARS)
        .take(MAX_KEY_POINTS)
        .map(str::to_string)
        .collect()
}

/// Whitespace-separated word count.
#[must_use]
pub fn word_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}
