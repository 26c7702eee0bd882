//! Signal and analysis result types
//!
//! Each detector produces a [`SignalResult`] with a 0-100 score and a
//! detector-specific label. The combiner fuses the four signals into an
//! [`AnalysisResult`] carrying the final risk score and the source list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credibility label from the source classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredibilityLabel {
    #[serde(rename = "Satire/Parody")]
    SatireParody,
    #[serde(rename = "Highly Reliable")]
    HighlyReliable,
    Questionable,
    #[serde(rename = "Generally Reliable")]
    GenerallyReliable,
    #[serde(rename = "Unknown Source")]
    UnknownSource,
}

impl fmt::Display for CredibilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SatireParody => "Satire/Parody",
            Self::HighlyReliable => "Highly Reliable",
            Self::Questionable => "Questionable",
            Self::GenerallyReliable => "Generally Reliable",
            Self::UnknownSource => "Unknown Source",
        };
        f.write_str(s)
    }
}

/// Sensationalism intensity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensationalismLabel {
    High,
    Moderate,
    Low,
}

impl fmt::Display for SensationalismLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        };
        f.write_str(s)
    }
}

/// Writing style quality label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleLabel {
    Professional,
    Average,
    Poor,
}

impl fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Professional => "Professional",
            Self::Average => "Average",
            Self::Poor => "Poor",
        };
        f.write_str(s)
    }
}

/// Fact-check verification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactCheckLabel {
    Verified,
    #[serde(rename = "Likely Reliable")]
    LikelyReliable,
    #[serde(rename = "Needs Verification")]
    NeedsVerification,
    #[serde(rename = "No Data Found")]
    NoDataFound,
    #[serde(rename = "Likely Accurate")]
    LikelyAccurate,
    Unverified,
}

impl fmt::Display for FactCheckLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Verified => "Verified",
            Self::LikelyReliable => "Likely Reliable",
            Self::NeedsVerification => "Needs Verification",
            Self::NoDataFound => "No Data Found",
            Self::LikelyAccurate => "Likely Accurate",
            Self::Unverified => "Unverified",
        };
        f.write_str(s)
    }
}

/// One detector's independent score/label pair. Produced fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalResult<L> {
    /// Score in 0..=100
    pub score: u8,
    pub label: L,
}

impl<L> SignalResult<L> {
    pub fn new(score: u8, label: L) -> Self {
        Self {
            score: score.min(100),
            label,
        }
    }
}

/// An external verification link attached to an analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredibleSource {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Domain matches the curated trust list or an official suffix
    pub is_trusted: bool,
    /// Synthesized search/fact-check link, not a real provider hit
    pub is_fallback: bool,
}

/// The complete output of one analysis run. Read-only once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Subject URL, also the cache key
    pub url: String,
    /// Combined misinformation-risk score, 0 (safe) to 100 (high risk)
    pub score: u8,
    pub source: SignalResult<CredibilityLabel>,
    pub sensationalism: SignalResult<SensationalismLabel>,
    pub style: SignalResult<StyleLabel>,
    pub fact_check: SignalResult<FactCheckLabel>,
    /// External verification links, never empty (fallback guarantee)
    pub sources: Vec<CredibleSource>,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_score_is_capped() {
        let signal = SignalResult::new(140, SensationalismLabel::High);
        assert_eq!(signal.score, 100);
    }

    #[test]
    fn test_label_serialization_uses_display_strings() {
        let json = serde_json::to_string(&CredibilityLabel::SatireParody).unwrap();
        assert_eq!(json, "\"Satire/Parody\"");
        let json = serde_json::to_string(&FactCheckLabel::NoDataFound).unwrap();
        assert_eq!(json, "\"No Data Found\"");
    }

    #[test]
    fn test_label_display_matches_serde() {
        assert_eq!(CredibilityLabel::UnknownSource.to_string(), "Unknown Source");
        assert_eq!(FactCheckLabel::LikelyReliable.to_string(), "Likely Reliable");
        assert_eq!(StyleLabel::Professional.to_string(), "Professional");
    }
}
