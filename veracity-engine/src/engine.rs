//! Analysis orchestration
//!
//! One logical flow per request: cache check, then the three local
//! detectors (pure and synchronous) computed up front while the fact-check
//! aggregation - the only suspension point - is awaited, then the combiner.
//! End-to-end latency is bounded by the provider call alone. If the
//! caller drops the future mid-flight the provider request is cancelled
//! with it; cache and feedback writes already flushed are not rolled back.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

use veracity_core::{
    AnalysisResult, AnalysisSubject, CredibilityLabel, SensationalismLabel, SignalResult,
    StyleLabel,
};
use veracity_factcheck::{
    FactCheckAggregator, FactCheckOutcome, FactCheckProvider, HttpProvider, ProviderConfig,
};
use veracity_signals::{
    analyze_style, classify_source, combine_risk, detect_sensationalism, unknown_source,
};

use crate::feedback::FeedbackStats;
use crate::store::{EngineError, Store};

/// Engine configuration. Defaults read the process environment, matching
/// how the credential is provisioned by the settings surface.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Fact-check provider API key; absent means simulate-only
    pub api_key: Option<String>,
    /// Base URL of the fact-check provider
    pub provider_url: String,
    /// Provider request timeout in seconds
    pub provider_timeout_secs: u64,
    /// Result cache TTL in seconds; 0 disables caching
    pub cache_ttl_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("VERACITY_API_KEY").ok(),
            provider_url: std::env::var("VERACITY_PROVIDER_URL")
                .unwrap_or_else(|_| "https://api.parallel.ai".to_string()),
            provider_timeout_secs: 10,
            cache_ttl_secs: 900,
        }
    }
}

/// The three synchronous detector signals for one subject.
struct LocalSignals {
    source: SignalResult<CredibilityLabel>,
    sensationalism: SignalResult<SensationalismLabel>,
    style: SignalResult<StyleLabel>,
}

/// The scoring engine: four signal computations fused per subject, backed
/// by the shared store.
pub struct Engine {
    aggregator: FactCheckAggregator,
    store: Arc<Store>,
}

impl Engine {
    pub fn new(config: &EngineConfig, store: Arc<Store>) -> Result<Self, EngineError> {
        let provider: Option<Arc<dyn FactCheckProvider>> = match &config.api_key {
            Some(key) => {
                let mut provider_config =
                    ProviderConfig::new(config.provider_url.as_str(), key.as_str());
                provider_config.timeout_secs = config.provider_timeout_secs;
                Some(Arc::new(HttpProvider::new(provider_config)?))
            }
            None => {
                info!("no fact-check API key configured; verification will be simulated");
                None
            }
        };

        Ok(Self {
            aggregator: FactCheckAggregator::new(provider),
            store,
        })
    }

    /// Engine with a caller-supplied aggregator, for tests and embedding.
    pub fn with_aggregator(aggregator: FactCheckAggregator, store: Arc<Store>) -> Self {
        Self { aggregator, store }
    }

    /// Run the full analysis for a subject, consulting the cache first.
    ///
    /// Always returns a complete result: invalid URLs degrade to the
    /// unknown-source signal and provider failures to the simulated
    /// heuristic. Only the cache flush can fail, and that is logged, not
    /// surfaced - use [`Engine::cache`] for an explicit persisted write.
    pub async fn analyze(&self, subject: &AnalysisSubject) -> AnalysisResult {
        if let Some(cached) = self.store.cached(&subject.url) {
            debug!("cache hit for {}", subject.url);
            return cached;
        }

        let combined = subject.combined();
        let locals = self.local_signals(subject, &combined);
        let outcome = self.aggregator.aggregate(&combined, &subject.title).await;
        self.finish(subject, locals, outcome)
    }

    /// Quick offline analysis: the fact-check signal is simulated even
    /// when a provider is configured. Results are cached like any other.
    pub fn analyze_simulated(&self, subject: &AnalysisSubject) -> AnalysisResult {
        if let Some(cached) = self.store.cached(&subject.url) {
            debug!("cache hit for {}", subject.url);
            return cached;
        }

        let combined = subject.combined();
        let locals = self.local_signals(subject, &combined);
        let outcome = self.aggregator.simulate(&combined, &subject.title);
        self.finish(subject, locals, outcome)
    }

    fn local_signals(&self, subject: &AnalysisSubject, combined: &str) -> LocalSignals {
        let source = classify_source(&subject.url).unwrap_or_else(|e| {
            debug!("source classification degraded to unknown: {e}");
            unknown_source()
        });

        LocalSignals {
            source,
            sensationalism: detect_sensationalism(combined, &subject.title),
            style: analyze_style(combined),
        }
    }

    fn finish(
        &self,
        subject: &AnalysisSubject,
        locals: LocalSignals,
        outcome: FactCheckOutcome,
    ) -> AnalysisResult {
        let LocalSignals {
            source,
            sensationalism,
            style,
        } = locals;

        let score = combine_risk(&source, &sensationalism, &style, &outcome.signal);

        let result = AnalysisResult {
            url: subject.url.clone(),
            score,
            source,
            sensationalism,
            style,
            fact_check: outcome.signal,
            sources: outcome.sources,
            analyzed_at: Utc::now(),
        };

        info!(
            "analyzed {} -> risk {} (source {}, sensationalism {}, style {}, fact-check {})",
            subject.url, score, result.source.label, result.sensationalism.label,
            result.style.label, result.fact_check.label
        );

        if let Err(e) = self.store.cache_result(&subject.url, result.clone()) {
            warn!("analysis completed but cache flush failed: {e}");
        }

        result
    }

    /// Fresh cached result for a URL, if any.
    pub fn get_cached(&self, url: &str) -> Option<AnalysisResult> {
        self.store.cached(url)
    }

    /// Explicitly cache a result; persistence failures surface.
    pub fn cache(&self, url: &str, result: AnalysisResult) -> Result<(), EngineError> {
        self.store.cache_result(url, result)
    }

    /// Record a user accuracy vote; persistence failures surface.
    pub fn record_feedback(
        &self,
        url: &str,
        is_accurate: bool,
        result: AnalysisResult,
        timestamp: DateTime<Utc>,
    ) -> Result<(), EngineError> {
        self.store
            .record_feedback(url, is_accurate, result, timestamp)
    }

    pub fn feedback_stats(&self) -> FeedbackStats {
        self.store.feedback_stats()
    }
}
