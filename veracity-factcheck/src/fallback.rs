//! Deterministic fallback verification links
//!
//! Every analysis result carries at least one set of external verification
//! links. When no real sources were found (no credential, provider failure,
//! or zero hits), exactly three search links are synthesized from the title
//! (or the leading text when there is no title).

use veracity_core::{truncate_chars, CredibleSource, FALLBACK_QUERY_CHARS};

/// Build the three synthesized verification links for a subject.
pub fn fallback_sources(title: &str, text: &str) -> Vec<CredibleSource> {
    let query = if title.trim().is_empty() {
        truncate_chars(text, FALLBACK_QUERY_CHARS)
    } else {
        title
    };
    let encoded = urlencoding::encode(query.trim());

    vec![
        CredibleSource {
            title: "Search the web for this claim".to_string(),
            url: format!("https://www.google.com/search?q={encoded}+fact+check"),
            snippet: None,
            is_trusted: false,
            is_fallback: true,
        },
        CredibleSource {
            title: "Check on Snopes".to_string(),
            url: format!("https://www.snopes.com/search/?q={encoded}"),
            snippet: None,
            is_trusted: true,
            is_fallback: true,
        },
        CredibleSource {
            title: "Check on PolitiFact".to_string(),
            url: format!("https://www.politifact.com/search/?q={encoded}"),
            snippet: None,
            is_trusted: true,
            is_fallback: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_three_entries_two_trusted() {
        let sources = fallback_sources("Some headline", "body");
        assert_eq!(sources.len(), 3);
        assert_eq!(sources.iter().filter(|s| s.is_trusted).count(), 2);
        assert!(sources.iter().all(|s| s.is_fallback));
    }

    #[test]
    fn test_query_from_title() {
        let sources = fallback_sources("vaccine rumor", "ignored body");
        assert!(sources[0].url.contains("vaccine%20rumor"));
        assert!(sources[1].url.contains("snopes.com"));
        assert!(sources[2].url.contains("politifact.com"));
    }

    #[test]
    fn test_query_from_text_when_no_title() {
        let long_text = "x".repeat(300);
        let sources = fallback_sources("  ", &long_text);
        // Query is the first 100 characters of the text
        assert!(sources[0].url.contains(&"x".repeat(100)));
        assert!(!sources[0].url.contains(&"x".repeat(101)));
    }
}
