//! Confidence scoring: heuristic, deterministic quality score for generated content.
//!
//! Algorithm:
//! 1. Start at `BASE_CONFIDENCE` (0.8).
//! 2. +0.1 when the word count falls in the requested length band.
//! 3. +0.1 × fraction of keywords found (case-insensitive substring) in the content.
//! 4. Clamp to at most 1.0. No lower clamp: variation decay may push below base.

use crate::generation::models::GenerationRequest;
use crate::generation::tone::length_fits;

pub const BASE_CONFIDENCE: f64 = 0.8;
pub const LENGTH_FIT_BONUS: f64 = 0.1;
pub const KEYWORD_COVERAGE_BONUS: f64 = 0.1;
/// Per-index multiplier step applied to variation batches.
pub const VARIATION_DECAY_STEP: f64 = 0.1;

pub fn compute_confidence(content: &str, request: &GenerationRequest) -> f64 {
    let mut score = BASE_CONFIDENCE;

    if let Some(length) = request.length {
        if length_fits(length, word_count(content)) {
            score += LENGTH_FIT_BONUS;
        }
    }

    if !request.keywords.is_empty() {
        score += KEYWORD_COVERAGE_BONUS * keyword_coverage(content, &request.keywords);
    }

    score.min(1.0)
}

/// Counts words by splitting on single spaces; runs of spaces count empty words.
pub fn word_count(content: &str) -> usize {
    content.split(' ').count()
}

/// Fraction of `keywords` present in `content`, case-insensitively.
pub fn keyword_coverage(content: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let content_lower = content.to_lowercase();
    let matched = keywords
        .iter()
        .filter(|k| content_lower.contains(&k.to_lowercase()))
        .count();
    matched as f64 / keywords.len() as f64
}

/// Multiplier for the `index`-th issued variation: 1.0, 0.9, 0.8, ...
pub fn variation_decay(index: usize) -> f64 {
    1.0 - index as f64 * VARIATION_DECAY_STEP
}
