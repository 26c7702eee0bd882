//! Sensationalism detector
//!
//! Scores title and body text against clickbait/sensational phrase tables
//! plus surface typography (exclamation/question marks, ALL-CAPS words).
//! A phrase hit in the title counts double - headlines carry the signal.

use regex::Regex;
use std::sync::LazyLock;

use veracity_core::{SensationalismLabel, SignalResult};

/// Sensational phrases and superlative claims
static SENSATIONAL_PATTERNS: &[&str] = &[
    "breaking",
    "shocking",
    "outrageous",
    "unbelievable",
    "miracle",
    "secret",
    "exposed",
    "bombshell",
    "stunning",
    "explosive",
    "jaw-dropping",
    "mind-blowing",
    "horrifying",
    "terrifying",
    "destroyed",
    "slams",
    "the truth about",
    "they don't want you to know",
    "never seen before",
    "of all time",
];

/// Clickbait framing phrases
static CLICKBAIT_PATTERNS: &[&str] = &[
    "you'll never guess",
    "you won't believe",
    "what happened next",
    "doctors hate",
    "one weird trick",
    "this one trick",
    "will shock you",
    "will blow your mind",
    "goes viral",
    "went viral",
    "the internet is losing it",
    "click here",
    "find out why",
    "wait till you see",
];

// Numbered-list headlines ("7 reasons ...", "12 shocking facts ...")
static LISTICLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+\s+(?:\w+\s+)?(?:reasons|things|ways|facts|secrets|photos|tricks|signs)\b")
        .unwrap()
});

static ALL_CAPS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{4,}\b").unwrap());

#[derive(Debug, Default, Clone, Copy)]
struct HitCounts {
    sensational: usize,
    clickbait: usize,
    punctuation: usize,
    all_caps: usize,
}

/// Count pattern hits. Body hits count once, title hits count double.
fn count_hits(combined: &str, title: &str) -> HitCounts {
    let body_lower = combined.to_lowercase();
    let title_lower = title.to_lowercase();

    let mut counts = HitCounts::default();

    for pattern in SENSATIONAL_PATTERNS {
        if body_lower.contains(pattern) {
            counts.sensational += 1;
        }
        if title_lower.contains(pattern) {
            counts.sensational += 2;
        }
    }

    for pattern in CLICKBAIT_PATTERNS {
        if body_lower.contains(pattern) {
            counts.clickbait += 1;
        }
        if title_lower.contains(pattern) {
            counts.clickbait += 2;
        }
    }

    if LISTICLE_REGEX.is_match(&body_lower) {
        counts.clickbait += 1;
    }
    if LISTICLE_REGEX.is_match(&title_lower) {
        counts.clickbait += 2;
    }

    // Typography runs over the raw text: lowercasing would erase caps.
    counts.punctuation = combined.chars().filter(|c| *c == '!' || *c == '?').count();
    counts.all_caps = ALL_CAPS_REGEX.find_iter(combined).count();

    counts
}

/// Score the combined text and title for sensational/clickbait language.
pub fn detect_sensationalism(combined: &str, title: &str) -> SignalResult<SensationalismLabel> {
    let counts = count_hits(combined, title);

    let raw =
        counts.sensational * 8 + counts.clickbait * 10 + counts.punctuation * 2 + counts.all_caps * 3;
    let score = raw.min(100) as u8;

    let label = if score > 60 {
        SensationalismLabel::High
    } else if score > 30 {
        SensationalismLabel::Moderate
    } else {
        SensationalismLabel::Low
    };

    SignalResult::new(score, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_scores_low() {
        let signal = detect_sensationalism(
            "The committee published its quarterly budget review on Tuesday.",
            "Committee publishes budget review",
        );
        assert_eq!(signal.label, SensationalismLabel::Low);
        assert_eq!(signal.score, 0);
    }

    #[test]
    fn test_title_hits_count_double() {
        let body_only = count_hits("a shocking development", "");
        assert_eq!(body_only.sensational, 1);

        let title_only = count_hits("a development", "shocking news");
        assert_eq!(title_only.sensational, 2);
    }

    #[test]
    fn test_composite_formula() {
        // One sensational body hit (8) + 3 exclamation marks (6) + 1 caps word (3) = 17
        let signal = detect_sensationalism("SHOCKING!!! this is shocking", "");
        // "shocking" appears in body once as a pattern hit; SHOCKING is also a caps word.
        assert_eq!(signal.score, 17);
    }

    #[test]
    fn test_clickbait_phrases() {
        let counts = count_hits("you won't believe what happened next", "");
        assert_eq!(counts.clickbait, 2);
    }

    #[test]
    fn test_listicle_headline() {
        let counts = count_hits("", "7 shocking reasons to read this");
        assert_eq!(counts.clickbait, 2);
        // "shocking" also hits the sensational table in the title
        assert_eq!(counts.sensational, 2);
    }

    #[test]
    fn test_all_caps_needs_four_letters() {
        let counts = count_hits("THE WHO met NATO and NASA", "");
        // THE is 3 letters, ignored; NATO and NASA count
        assert_eq!(counts.all_caps, 2);
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let text = "shocking! ".repeat(40);
        let signal = detect_sensationalism(&text, "SHOCKING BOMBSHELL EXPOSED!!!");
        assert_eq!(signal.score, 100);
        assert_eq!(signal.label, SensationalismLabel::High);
    }

    #[test]
    fn test_label_thresholds() {
        // 4 body sensational hits = 32 -> Moderate
        let signal =
            detect_sensationalism("breaking miracle exposed bombshell", "");
        assert_eq!(signal.score, 32);
        assert_eq!(signal.label, SensationalismLabel::Moderate);
    }
}
