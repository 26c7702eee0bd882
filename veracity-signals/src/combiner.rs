//! Score combiner
//!
//! Fuses the four signals into one weighted misinformation-risk score.
//! Credibility, style, and fact-check are safety signals, so they enter
//! inverted; sensationalism is already a risk signal. Two label-driven
//! floors are applied after clamping so satire and known-bad domains can
//! never come out low-risk.

use veracity_core::{
    CredibilityLabel, FactCheckLabel, SensationalismLabel, SignalResult, StyleLabel,
};

const SOURCE_WEIGHT: f64 = 0.20;
const SENSATIONALISM_WEIGHT: f64 = 0.25;
const STYLE_WEIGHT: f64 = 0.15;
const FACT_CHECK_WEIGHT: f64 = 0.40;

/// Risk floor forced by a satire/parody source label
const SATIRE_FLOOR: u8 = 98;

/// Risk floor forced by a questionable source label
const QUESTIONABLE_FLOOR: u8 = 80;

/// Combine the four signals into the final 0-100 risk score.
pub fn combine_risk(
    source: &SignalResult<CredibilityLabel>,
    sensationalism: &SignalResult<SensationalismLabel>,
    style: &SignalResult<StyleLabel>,
    fact_check: &SignalResult<FactCheckLabel>,
) -> u8 {
    let weighted = (100.0 - source.score as f64) * SOURCE_WEIGHT
        + sensationalism.score as f64 * SENSATIONALISM_WEIGHT
        + (100.0 - style.score as f64) * STYLE_WEIGHT
        + (100.0 - fact_check.score as f64) * FACT_CHECK_WEIGHT;

    let risk = weighted.clamp(0.0, 100.0).round() as u8;

    match source.label {
        CredibilityLabel::SatireParody => risk.max(SATIRE_FLOOR),
        CredibilityLabel::Questionable => risk.max(QUESTIONABLE_FLOOR),
        _ => risk,
    }
}
