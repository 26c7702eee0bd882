//! Simulated verification heuristic
//!
//! Used whenever no credential is configured, the provider call failed, or
//! a quick offline check was requested. Scores the presence of concrete,
//! checkable detail: dates, places, magnitudes, institutions. Capped at 90
//! so a simulated result never claims full verification.

use regex::Regex;
use std::sync::LazyLock;

use veracity_core::{FactCheckLabel, SignalResult};

static MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static PLACE_TOKENS: &[&str] = &[
    "city",
    "country",
    "state",
    "capital",
    "province",
    "washington",
    "london",
    "new york",
    "paris",
    "berlin",
    "moscow",
    "beijing",
    "tokyo",
    "delhi",
    "mumbai",
];

static MAGNITUDE_TOKENS: &[&str] = &["percent", "million", "billion", "thousand", "trillion"];

static INSTITUTION_TOKENS: &[&str] = &[
    "university",
    "government",
    "ministry",
    "institute",
    "department",
    "agency",
    "hospital",
    "court",
    "parliament",
    "congress",
];

// Four-digit years and numeric day/month forms
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b|\b\d{1,2}/\d{1,2}\b").unwrap());

static MAGNITUDE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*%|[$€£]\s*\d").unwrap());

/// Score checkable detail in the text. Never produces sources.
pub fn simulate_verification(text: &str) -> SignalResult<FactCheckLabel> {
    let text = text.to_lowercase();

    let mut score: u32 = 40;

    if DATE_REGEX.is_match(&text) || MONTHS.iter().any(|m| text.contains(m)) {
        score += 15;
    }
    if PLACE_TOKENS.iter().any(|p| text.contains(p)) {
        score += 15;
    }
    if MAGNITUDE_REGEX.is_match(&text) || MAGNITUDE_TOKENS.iter().any(|m| text.contains(m)) {
        score += 10;
    }
    if INSTITUTION_TOKENS.iter().any(|i| text.contains(i)) {
        score += 10;
    }

    let score = score.min(90) as u8;
    let label = if score >= 70 {
        FactCheckLabel::LikelyAccurate
    } else if score >= 50 {
        FactCheckLabel::NeedsVerification
    } else {
        FactCheckLabel::Unverified
    };

    SignalResult::new(score, label)
}
