//! Writing style analyzer
//!
//! Lightweight surface heuristics for professional news writing: sentence
//! length, quoted spans, attribution phrases, named source variety, and
//! overall length. Additive scoring from a neutral baseline of 50.

use regex::Regex;
use std::sync::LazyLock;

use veracity_core::{SignalResult, StyleLabel};

static ATTRIBUTION_PHRASES: &[&str] = &[
    "according to",
    "said",
    "reported",
    "stated",
    "announced",
    "confirmed",
    "told reporters",
];

static SOURCE_WORDS: &[&str] = &[
    "sources",
    "officials",
    "experts",
    "researchers",
    "scientists",
    "spokesperson",
];

static QUOTED_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]+"|“[^”]+”"#).unwrap());

/// Score surface markers of professional writing over lower-cased text.
pub fn analyze_style(text: &str) -> SignalResult<StyleLabel> {
    let text = text.to_lowercase();

    let word_count = text.split_whitespace().count();
    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let avg_sentence_len = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };

    let mut score: u32 = 50;

    if avg_sentence_len > 10.0 && avg_sentence_len < 30.0 {
        score += 15;
    }
    if QUOTED_SPAN_REGEX.is_match(&text) {
        score += 15;
    }
    if ATTRIBUTION_PHRASES.iter().any(|p| text.contains(p)) {
        score += 10;
    }
    let distinct_source_words = SOURCE_WORDS.iter().filter(|w| text.contains(**w)).count();
    if distinct_source_words >= 2 {
        score += 10;
    }
    if word_count > 200 {
        score += 10;
    }

    let score = score.min(100) as u8;
    let label = if score >= 70 {
        StyleLabel::Professional
    } else if score >= 50 {
        StyleLabel::Average
    } else {
        StyleLabel::Poor
    };

    SignalResult::new(score, label)
}
