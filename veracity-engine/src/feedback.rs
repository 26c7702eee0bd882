//! User feedback accumulator
//!
//! Process-wide tallies of corroboration/contradiction votes plus a capped
//! detail log. Eviction trims the log only - the counters are monotonic
//! and never decremented.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

use veracity_core::{AnalysisResult, FEEDBACK_LOG_CAP};

/// One user vote on a delivered analysis. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub url: String,
    pub is_accurate: bool,
    pub result: AnalysisResult,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate tallies. Invariant: `total == accurate + inaccurate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total: u64,
    pub accurate: u64,
    pub inaccurate: u64,
}

impl FeedbackStats {
    /// Community accuracy percentage; 100 when no votes were recorded yet.
    pub fn accuracy_pct(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.accurate as f64 * 100.0 / self.total as f64
        }
    }
}

/// Persisted feedback state: counters plus the capped detail log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackState {
    pub stats: FeedbackStats,
    pub log: VecDeque<FeedbackRecord>,
}

/// Shared feedback accumulator. The increment-and-append sequence runs
/// under one mutex so concurrent writers cannot tear counters and log.
pub struct FeedbackStore {
    state: Mutex<FeedbackState>,
}

impl FeedbackStore {
    pub fn new(state: FeedbackState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn record(
        &self,
        url: &str,
        is_accurate: bool,
        result: AnalysisResult,
        timestamp: DateTime<Utc>,
    ) {
        let mut state = self.state.lock();

        state.stats.total += 1;
        if is_accurate {
            state.stats.accurate += 1;
        } else {
            state.stats.inaccurate += 1;
        }

        state.log.push_back(FeedbackRecord {
            id: Uuid::new_v4(),
            url: url.to_string(),
            is_accurate,
            result,
            timestamp,
        });
        while state.log.len() > FEEDBACK_LOG_CAP {
            state.log.pop_front();
        }
    }

    pub fn stats(&self) -> FeedbackStats {
        self.state.lock().stats
    }

    pub fn log_len(&self) -> usize {
        self.state.lock().log.len()
    }

    /// Clone out the whole state for persistence.
    pub fn snapshot(&self) -> FeedbackState {
        self.state.lock().clone()
    }
}
