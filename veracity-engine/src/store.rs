//! Process-wide state store with explicit persistence
//!
//! The store owns the result cache and the feedback accumulator. It is
//! hydrated once from a persistence collaborator at construction and
//! flushed (whole-object overwrite, no schema versioning) after every
//! mutation. Reads degrade to empty state when hydration fails; write
//! failures surface to the caller as [`EngineError::Persistence`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use veracity_core::AnalysisResult;

use crate::cache::{CacheEntry, ResultCache};
use crate::feedback::{FeedbackState, FeedbackStats, FeedbackStore};

/// Errors from the persistence collaborator
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("persistence rejected write: {0}")]
    Rejected(String),
}

/// Errors surfaced by engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("persistence failure: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("fact-check provider setup failed: {0}")]
    Provider(#[from] veracity_factcheck::ProviderError),
}

/// Everything the store persists, serialized as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub feedback: FeedbackState,
    pub cache: Vec<(String, CacheEntry)>,
}

/// Storage collaborator for the whole-object state document.
pub trait Persistence: Send + Sync {
    /// Load persisted state; `None` when nothing was stored yet.
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError>;
    fn save(&self, state: &PersistedState) -> Result<(), PersistenceError>;
}

/// JSON file persistence, one document per store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory persistence for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    state: parking_lot::Mutex<Option<PersistedState>>,
    fail_writes: std::sync::atomic::AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail, to exercise the error path.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes
            .store(fail, std::sync::atomic::Ordering::SeqCst);
    }
}

impl Persistence for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        Ok(self.state.lock().clone())
    }

    fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(PersistenceError::Rejected("simulated failure".to_string()));
        }
        *self.state.lock() = Some(state.clone());
        Ok(())
    }
}

/// The explicit store service: cache + feedback + their persistence.
pub struct Store {
    cache: ResultCache,
    feedback: FeedbackStore,
    persistence: Arc<dyn Persistence>,
}

impl Store {
    /// Hydrate from persistence. A failed or empty load starts from
    /// defaults; analysis must not be blocked by unreadable state.
    pub fn open(persistence: Arc<dyn Persistence>, cache_ttl_secs: u64) -> Self {
        let state = match persistence.load() {
            Ok(Some(state)) => state,
            Ok(None) => PersistedState::default(),
            Err(e) => {
                warn!("could not load persisted state, starting empty: {e}");
                PersistedState::default()
            }
        };

        let cache = ResultCache::new(cache_ttl_secs);
        cache.hydrate(state.cache);
        let feedback = FeedbackStore::new(state.feedback);

        Self {
            cache,
            feedback,
            persistence,
        }
    }

    pub fn cached(&self, url: &str) -> Option<AnalysisResult> {
        self.cache.get(url)
    }

    /// Cache an analysis and flush. The write failure is the caller's to
    /// handle; the cache map itself is already updated.
    pub fn cache_result(&self, url: &str, result: AnalysisResult) -> Result<(), EngineError> {
        self.cache.put(url, result);
        self.flush()
    }

    pub fn record_feedback(
        &self,
        url: &str,
        is_accurate: bool,
        result: AnalysisResult,
        timestamp: DateTime<Utc>,
    ) -> Result<(), EngineError> {
        self.feedback.record(url, is_accurate, result, timestamp);
        self.flush()
    }

    pub fn feedback_stats(&self) -> FeedbackStats {
        self.feedback.stats()
    }

    pub fn feedback_log_len(&self) -> usize {
        self.feedback.log_len()
    }

    fn flush(&self) -> Result<(), EngineError> {
        let state = PersistedState {
            feedback: self.feedback.snapshot(),
            cache: self.cache.snapshot(),
        };
        self.persistence.save(&state)?;
        Ok(())
    }
}
