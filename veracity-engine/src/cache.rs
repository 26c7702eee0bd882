//! Per-URL result cache with TTL-gated reads
//!
//! Keys are exact subject URLs, not normalized. Reads return a result only
//! while it is fresh; writes are unconditional overwrites. There is no
//! eviction beyond TTL expiry - unbounded growth per distinct URL is an
//! accepted limitation at this scope.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use veracity_core::AnalysisResult;

/// A cached analysis keyed by subject URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub result: AnalysisResult,
    pub computed_at: DateTime<Utc>,
}

/// TTL-bounded memoization of full analysis results.
///
/// A TTL of zero disables caching outright: entries are still written (and
/// persisted with the rest of the state) but reads always miss.
pub struct ResultCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl ResultCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Fresh cached result for a URL, or absent on miss/expiry.
    pub fn get(&self, url: &str) -> Option<AnalysisResult> {
        self.get_at(url, Utc::now())
    }

    /// TTL check against an explicit clock, for deterministic tests.
    pub fn get_at(&self, url: &str, now: DateTime<Utc>) -> Option<AnalysisResult> {
        let entry = self.entries.get(url)?;
        if now - entry.computed_at < self.ttl {
            Some(entry.result.clone())
        } else {
            None
        }
    }

    /// Unconditional overwrite with the current timestamp.
    pub fn put(&self, url: &str, result: AnalysisResult) {
        self.put_at(url, result, Utc::now());
    }

    pub fn put_at(&self, url: &str, result: AnalysisResult, now: DateTime<Utc>) {
        self.entries.insert(
            url.to_string(),
            CacheEntry {
                result,
                computed_at: now,
            },
        );
    }

    /// Clone out all entries for persistence.
    pub fn snapshot(&self) -> Vec<(String, CacheEntry)> {
        self.entries
            .iter()
            .map(|kv| (kv.key().clone(), kv.value().clone()))
            .collect()
    }

    /// Replace contents from persisted state.
    pub fn hydrate(&self, entries: Vec<(String, CacheEntry)>) {
        self.entries.clear();
        for (url, entry) in entries {
            self.entries.insert(url, entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veracity_core::{
        CredibilityLabel, FactCheckLabel, SensationalismLabel, SignalResult, StyleLabel,
    };

    fn result(url: &str) -> AnalysisResult {
        AnalysisResult {
            url: url.to_string(),
            score: 42,
            source: SignalResult::new(50, CredibilityLabel::UnknownSource),
            sensationalism: SignalResult::new(0, SensationalismLabel::Low),
            style: SignalResult::new(50, StyleLabel::Average),
            fact_check: SignalResult::new(50, FactCheckLabel::NoDataFound),
            sources: Vec::new(),
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = ResultCache::new(600);
        let now = Utc::now();
        cache.put_at("https://a.example", result("https://a.example"), now);

        let first = cache.get_at("https://a.example", now + Duration::seconds(10));
        let second = cache.get_at("https://a.example", now + Duration::seconds(10));
        assert_eq!(first.as_ref().map(|r| r.score), Some(42));
        // Idempotent: consecutive reads within the TTL agree
        assert_eq!(
            first.map(|r| r.analyzed_at),
            second.map(|r| r.analyzed_at)
        );
    }

    #[test]
    fn test_miss_after_ttl() {
        let cache = ResultCache::new(600);
        let now = Utc::now();
        cache.put_at("https://a.example", result("https://a.example"), now);

        assert!(cache.get_at("https://a.example", now + Duration::seconds(599)).is_some());
        assert!(cache.get_at("https://a.example", now + Duration::seconds(600)).is_none());
    }

    #[test]
    fn test_zero_ttl_disables_reads() {
        let cache = ResultCache::new(0);
        let now = Utc::now();
        cache.put_at("https://a.example", result("https://a.example"), now);

        assert!(cache.get_at("https://a.example", now).is_none());
        // Entry is still stored for persistence
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let cache = ResultCache::new(600);
        let now = Utc::now();
        let mut updated = result("https://a.example");
        updated.score = 90;

        cache.put_at("https://a.example", result("https://a.example"), now);
        cache.put_at("https://a.example", updated, now);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_at("https://a.example", now).unwrap().score, 90);
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let cache = ResultCache::new(600);
        let now = Utc::now();
        cache.put_at("https://a.example/page", result("https://a.example/page"), now);
        assert!(cache.get_at("https://a.example/page/", now).is_none());
    }
}
