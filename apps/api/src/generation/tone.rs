//! Tone and length calibration: fixed phrasing lookups consumed by the prompt builder.
//!
//! Every request with the same tone/length gets byte-identical clauses.

use crate::generation::models::{Length, Tone};

/// Returns the tone description spliced into the system instruction.
pub fn tone_description(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "professional and authoritative",
        Tone::Casual => "casual and conversational",
        Tone::Enthusiastic => "enthusiastic and energetic",
        Tone::Friendly => "friendly and approachable",
    }
}

/// Returns the sentence appended to the user instruction for a requested length.
pub fn length_instruction(length: Length) -> &'static str {
    match length {
        Length::Short => "Keep it short (1-2 sentences).",
        Length::Medium => "Make it medium length (2-4 sentences).",
        Length::Long => "Make it long-form (multiple paragraphs).",
    }
}

/// Word-count band in which generated content earns the length-fit bonus.
///
/// Bands are disjoint: short ≤ 50 < medium ≤ 200 < long.
pub fn length_fits(length: Length, word_count: usize) -> bool {
    match length {
        Length::Short => word_count <= 50,
        Length::Medium => word_count > 50 && word_count <= 200,
        Length::Long => word_count > 200,
    }
}
