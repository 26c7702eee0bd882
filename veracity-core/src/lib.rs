//! Veracity Core - domain model for misinformation-risk scoring
//!
//! This crate provides the foundational primitives:
//! - Analysis subjects (url/title/text tuples) and results
//! - Per-detector signal types with their label enums
//! - Curated domain registries (satire, reliable, questionable, trusted)
//! - Hostname extraction and trust classification

pub mod domains;
pub mod result;
pub mod subject;

pub use domains::*;
pub use result::*;
pub use subject::*;

/// Maximum characters of body text retained per subject
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Characters of combined text sent to the fact-check provider as the claim
pub const CLAIM_CHARS: usize = 500;

/// Characters of text used to derive a fallback search query when there is no title
pub const FALLBACK_QUERY_CHARS: usize = 100;

/// Maximum credible sources attached to a result
pub const MAX_SOURCES: usize = 4;

/// Maximum feedback records retained in the detail log
pub const FEEDBACK_LOG_CAP: usize = 100;

/// Truncate a string to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multi-byte chars must not split
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
