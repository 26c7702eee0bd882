//! Fact-check provider HTTP client
//!
//! One POST per analysis, explicit timeout, no retries. Any transport
//! failure, non-2xx status, or schema mismatch surfaces as a
//! [`ProviderError`]; the aggregator turns all of them into the simulated
//! fallback path, so these errors never reach the caller of an analysis.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from the fact-check provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Provider connection settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the fact-check API
    pub base_url: String,
    /// API credential sent as `x-api-key`
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum results requested per search
    pub max_results: usize,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 10,
            max_results: 8,
        }
    }
}

/// One search result from the provider. Either field may be missing;
/// only results carrying both a title and a URL become credible sources.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderHit {
    pub url: Option<String>,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    search_depth: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<ProviderHit>,
}

/// A fact-check search backend. Implemented over HTTP in production and
/// by scripted stubs in tests.
#[async_trait]
pub trait FactCheckProvider: Send + Sync {
    async fn search(&self, claim: &str) -> Result<Vec<ProviderHit>, ProviderError>;
}

/// HTTP implementation of [`FactCheckProvider`]
pub struct HttpProvider {
    config: ProviderConfig,
    client: Client,
}

impl HttpProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/agents/web", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl FactCheckProvider for HttpProvider {
    async fn search(&self, claim: &str) -> Result<Vec<ProviderHit>, ProviderError> {
        let body = SearchRequest {
            query: claim,
            search_depth: "advanced",
            max_results: self.config.max_results,
        };

        debug!("querying fact-check provider at {}", self.endpoint());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        Ok(parsed.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider =
            HttpProvider::new(ProviderConfig::new("https://api.example.com/", "k")).unwrap();
        assert_eq!(provider.endpoint(), "https://api.example.com/agents/web");
    }

    #[test]
    fn test_response_schema_tolerates_partial_results() {
        let raw = r#"{"results":[{"url":"https://a.example","title":"A"},{"title":"no url"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert!(parsed.results[1].url.is_none());
        assert_eq!(parsed.results[1].snippet, None);
    }

    #[test]
    fn test_schema_mismatch_is_an_error() {
        let raw = r#"{"answers": "unexpected shape"}"#;
        assert!(serde_json::from_str::<SearchResponse>(raw).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = SearchRequest {
            query: "claim text",
            search_depth: "advanced",
            max_results: 8,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["search_depth"], "advanced");
        assert_eq!(json["max_results"], 8);
    }
}
