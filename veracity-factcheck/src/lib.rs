//! Veracity FactCheck - external verification with graceful degradation
//!
//! The only component with network I/O. One provider call per analysis
//! (explicit timeout, no retries); every failure mode degrades to the
//! simulated local heuristic, and the caller always gets a complete
//! outcome with at least one set of verification links.
//!
//! The "try provider, else simulate" policy is a data-flow decision over
//! the provider's `Result`, not a catch-and-fallback side effect: the
//! scoring functions here are pure and individually testable.

pub mod fallback;
pub mod provider;
pub mod simulate;

pub use fallback::*;
pub use provider::*;
pub use simulate::*;

use std::sync::Arc;
use tracing::{debug, warn};

use veracity_core::{
    is_trusted_source, truncate_chars, CredibleSource, FactCheckLabel, SignalResult, CLAIM_CHARS,
    MAX_SOURCES,
};

/// Keywords in a result's title or snippet that indicate fact-check coverage
static FACT_CHECK_KEYWORDS: &[&str] = &["fact check", "verified", "debunked", "misleading", "false"];

/// The settled fact-check signal plus its verification links.
#[derive(Debug, Clone)]
pub struct FactCheckOutcome {
    pub signal: SignalResult<FactCheckLabel>,
    pub sources: Vec<CredibleSource>,
}

/// Aggregates external fact-check evidence for a subject.
///
/// Holds an optional provider; without one (no credential configured)
/// every aggregation takes the simulated path.
pub struct FactCheckAggregator {
    provider: Option<Arc<dyn FactCheckProvider>>,
}

impl FactCheckAggregator {
    pub fn new(provider: Option<Arc<dyn FactCheckProvider>>) -> Self {
        Self { provider }
    }

    /// Aggregator with no provider: always simulates.
    pub fn offline() -> Self {
        Self { provider: None }
    }

    /// Run the full aggregation for one subject.
    ///
    /// `combined` is the title+body blob; `title` seeds the fallback search
    /// query. Never fails: provider errors are logged and absorbed.
    pub async fn aggregate(&self, combined: &str, title: &str) -> FactCheckOutcome {
        let outcome = match &self.provider {
            Some(provider) => {
                let claim = truncate_chars(combined, CLAIM_CHARS);
                match provider.search(claim).await {
                    Ok(hits) => score_hits(&hits),
                    Err(e) => {
                        warn!("fact-check provider unavailable, simulating: {e}");
                        simulated_outcome(combined)
                    }
                }
            }
            None => {
                debug!("no fact-check credential configured, simulating");
                simulated_outcome(combined)
            }
        };

        with_fallback_sources(outcome, title, combined)
    }

    /// Quick offline check, skipping the provider even when configured.
    pub fn simulate(&self, combined: &str, title: &str) -> FactCheckOutcome {
        with_fallback_sources(simulated_outcome(combined), title, combined)
    }
}

/// Score a successful provider response. Pure.
pub fn score_hits(hits: &[ProviderHit]) -> FactCheckOutcome {
    if hits.is_empty() {
        return FactCheckOutcome {
            signal: SignalResult::new(50, FactCheckLabel::NoDataFound),
            sources: Vec::new(),
        };
    }

    let mut sources: Vec<CredibleSource> = hits
        .iter()
        .filter_map(|hit| {
            let title = hit.title.as_deref().filter(|t| !t.is_empty())?;
            let url = hit.url.as_deref().filter(|u| !u.is_empty())?;
            Some(CredibleSource {
                title: title.to_string(),
                url: url.to_string(),
                snippet: hit.snippet.clone(),
                is_trusted: is_trusted_source(url),
                is_fallback: false,
            })
        })
        .collect();

    let trusted_count = sources.iter().filter(|s| s.is_trusted).count();
    let mut score: u8 = match trusted_count {
        n if n >= 3 => 90,
        2 => 80,
        1 => 65,
        _ => 40,
    };

    let keyword_hit = hits.iter().any(|hit| {
        let haystack = format!(
            "{} {}",
            hit.title.as_deref().unwrap_or_default(),
            hit.snippet.as_deref().unwrap_or_default()
        )
        .to_lowercase();
        FACT_CHECK_KEYWORDS.iter().any(|k| haystack.contains(k))
    });
    if keyword_hit {
        score = score.max(70);
    }

    let label = if score >= 80 {
        FactCheckLabel::Verified
    } else if score >= 60 {
        FactCheckLabel::LikelyReliable
    } else {
        FactCheckLabel::NeedsVerification
    };

    sources.truncate(MAX_SOURCES);

    FactCheckOutcome {
        signal: SignalResult::new(score, label),
        sources,
    }
}

/// Wrap the simulated heuristic as an outcome with no sources.
fn simulated_outcome(combined: &str) -> FactCheckOutcome {
    FactCheckOutcome {
        signal: simulate_verification(combined),
        sources: Vec::new(),
    }
}

/// Apply the fallback-source guarantee: never return an empty source list.
fn with_fallback_sources(mut outcome: FactCheckOutcome, title: &str, text: &str) -> FactCheckOutcome {
    if outcome.sources.is_empty() {
        outcome.sources = fallback_sources(title, text);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubProvider {
        response: Result<Vec<ProviderHit>, ()>,
    }

    #[async_trait]
    impl FactCheckProvider for StubProvider {
        async fn search(&self, _claim: &str) -> Result<Vec<ProviderHit>, ProviderError> {
            match &self.response {
                Ok(hits) => Ok(hits.clone()),
                Err(()) => Err(ProviderError::Status(503)),
            }
        }
    }

    fn hit(url: &str, title: &str, snippet: Option<&str>) -> ProviderHit {
        ProviderHit {
            url: Some(url.to_string()),
            title: Some(title.to_string()),
            snippet: snippet.map(String::from),
        }
    }

    #[test]
    fn test_trusted_count_ladder() {
        let untrusted = hit("https://blog.example.net/a", "A", None);
        let trusted = |n: usize| hit(&format!("https://www.reuters.com/{n}"), "R", None);

        let outcome = score_hits(&[untrusted.clone()]);
        assert_eq!(outcome.signal.score, 40);

        let outcome = score_hits(&[trusted(1), untrusted.clone()]);
        assert_eq!(outcome.signal.score, 65);
        assert_eq!(outcome.signal.label, FactCheckLabel::LikelyReliable);

        let outcome = score_hits(&[trusted(1), trusted(2)]);
        assert_eq!(outcome.signal.score, 80);
        assert_eq!(outcome.signal.label, FactCheckLabel::Verified);

        let outcome = score_hits(&[trusted(1), trusted(2), trusted(3)]);
        assert_eq!(outcome.signal.score, 90);
    }

    #[test]
    fn test_keyword_raises_floor() {
        let hits = [hit(
            "https://blog.example.net/a",
            "This claim was debunked",
            None,
        )];
        let outcome = score_hits(&hits);
        assert_eq!(outcome.signal.score, 70);
        assert_eq!(outcome.signal.label, FactCheckLabel::LikelyReliable);
    }

    #[test]
    fn test_keyword_does_not_lower_score() {
        let hits = [
            hit("https://www.reuters.com/1", "fact check: true", None),
            hit("https://www.snopes.com/2", "b", None),
            hit("https://www.politifact.com/3", "c", None),
        ];
        let outcome = score_hits(&hits);
        assert_eq!(outcome.signal.score, 90);
    }

    #[test]
    fn test_empty_results_is_no_data() {
        let outcome = score_hits(&[]);
        assert_eq!(outcome.signal.score, 50);
        assert_eq!(outcome.signal.label, FactCheckLabel::NoDataFound);
        assert!(outcome.sources.is_empty());
    }

    #[test]
    fn test_hits_without_title_or_url_are_skipped() {
        let hits = [
            ProviderHit {
                url: Some("https://a.example".to_string()),
                title: None,
                snippet: None,
            },
            ProviderHit {
                url: None,
                title: Some("no url".to_string()),
                snippet: None,
            },
        ];
        let outcome = score_hits(&hits);
        assert!(outcome.sources.is_empty());
        assert_eq!(outcome.signal.score, 40);
    }

    #[test]
    fn test_sources_capped_at_four() {
        let hits: Vec<ProviderHit> = (0..6)
            .map(|n| hit(&format!("https://site{n}.example.net"), "t", None))
            .collect();
        let outcome = score_hits(&hits);
        assert_eq!(outcome.sources.len(), 4);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_to_simulation() {
        let aggregator = FactCheckAggregator::new(Some(Arc::new(StubProvider {
            response: Err(()),
        })));
        let outcome = aggregator
            .aggregate("vague text with no detail", "headline")
            .await;
        assert_eq!(outcome.signal.score, 40);
        assert_eq!(outcome.signal.label, FactCheckLabel::Unverified);
        // Fallback guarantee still holds
        assert_eq!(outcome.sources.len(), 3);
        assert_eq!(outcome.sources.iter().filter(|s| s.is_trusted).count(), 2);
    }

    #[tokio::test]
    async fn test_no_credential_simulates() {
        let aggregator = FactCheckAggregator::offline();
        let outcome = aggregator
            .aggregate("the ministry in London announced a 10% change in 2024", "")
            .await;
        assert_eq!(outcome.signal.label, FactCheckLabel::LikelyAccurate);
        assert_eq!(outcome.sources.len(), 3);
    }

    #[tokio::test]
    async fn test_success_path_keeps_real_sources() {
        let aggregator = FactCheckAggregator::new(Some(Arc::new(StubProvider {
            response: Ok(vec![hit("https://www.reuters.com/a", "Report", Some("details"))]),
        })));
        let outcome = aggregator.aggregate("claim", "title").await;
        assert_eq!(outcome.sources.len(), 1);
        assert!(!outcome.sources[0].is_fallback);
        assert!(outcome.sources[0].is_trusted);
    }

    #[tokio::test]
    async fn test_zero_hits_yields_no_data_plus_fallback_links() {
        let aggregator = FactCheckAggregator::new(Some(Arc::new(StubProvider {
            response: Ok(vec![]),
        })));
        let outcome = aggregator.aggregate("claim", "title").await;
        assert_eq!(outcome.signal.label, FactCheckLabel::NoDataFound);
        assert_eq!(outcome.sources.len(), 3);
        assert!(outcome.sources.iter().all(|s| s.is_fallback));
    }
}
