//! Textual speaker-turn heuristic.
//!
//! This is NOT acoustic speaker diarization. It fabricates turns from a
//! transcript by splitting it into sentences and alternating between two
//! fixed speakers every three sentences, so the conversation view has
//! something to show. The result is deterministic and says nothing about who
//! actually spoke.

use lumen_core::enums::Speaker;
use lumen_core::results::DiarizationTurn;

use crate::text::sentences;

/// Sentences per speaker block.
const TURN_BLOCK: usize = 3;

/// Seconds between synthesized timestamps.
const SECONDS_PER_SENTENCE: usize = 15;

/// Split `transcript` into speaker turns.
///
/// Sentences 0-2 go to Speaker 1, 3-5 to Speaker 2, 6-8 to Speaker 1, and so
/// on. An empty transcript yields no turns.
#[must_use]
pub fn diarize(transcript: &str) -> Vec<DiarizationTurn> {
    let mut speaker = Speaker::One;
    sentences(transcript)
        .enumerate()
        .map(|(index, text)| {
            if index > 0 && index % TURN_BLOCK == 0 {
                speaker = speaker.other();
            }
            DiarizationTurn {
                speaker,
                text: text.to_string(),
                timestamp: timestamp(index),
            }
        })
        .collect()
}

/// Synthesized offset for the sentence at `index`: `"00:"` followed by
/// `index * 15` seconds, zero-padded to two digits.
///
/// Seconds are not rolled over into minutes: index 4 yields `"00:60"` and
/// index 5 yields `"00:75"`. Consumers that display these must not parse them
/// as clock times.
#[must_use]
pub fn timestamp(index: usize) -> String {
    format!("00:{:02}", index * SECONDS_PER_SENTENCE)
}
