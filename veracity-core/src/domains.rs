//! Curated domain registries and trust classification
//!
//! Membership checks are substring-of-hostname, not exact match. That is a
//! deliberate heuristic carried over from the curated lists' original use:
//! it catches regional variants (`bbc.co.uk`, `m.reuters.com`) but can
//! false-positive on lookalike domains that embed a listed name.

use thiserror::Error;
use url::Url;

/// Errors from domain classification
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Known satire and parody outlets
pub static SATIRE_DOMAINS: &[&str] = &[
    "theonion.com",
    "babylonbee.com",
    "clickhole.com",
    "waterfordwhispersnews.com",
    "thebeaverton.com",
    "newsthump.com",
    "duffelblog.com",
    "worldnewsdailyreport.com",
];

/// Established outlets with strong editorial standards
pub static RELIABLE_DOMAINS: &[&str] = &[
    "reuters.com",
    "apnews.com",
    "bbc.com",
    "bbc.co.uk",
    "npr.org",
    "nytimes.com",
    "wsj.com",
    "theguardian.com",
    "washingtonpost.com",
    "bloomberg.com",
    "economist.com",
    "aljazeera.com",
    "dw.com",
    "france24.com",
    "nature.com",
    "scientificamerican.com",
    "pbs.org",
];

/// Outlets with a documented record of publishing misinformation
pub static QUESTIONABLE_DOMAINS: &[&str] = &[
    "infowars.com",
    "naturalnews.com",
    "beforeitsnews.com",
    "yournewswire.com",
    "newspunch.com",
    "gatewaypundit.com",
    "globalresearch.ca",
];

/// Fact-check sites and outlets trusted as verification sources
pub static TRUSTED_OUTLETS: &[&str] = &[
    "snopes.com",
    "politifact.com",
    "factcheck.org",
    "fullfact.org",
    "reuters.com",
    "apnews.com",
    "bbc.com",
    "bbc.co.uk",
    "npr.org",
    "nytimes.com",
    "theguardian.com",
    "washingtonpost.com",
    "nature.com",
    "who.int",
];

/// Governmental and educational hostname suffixes
pub static OFFICIAL_SUFFIXES: &[&str] = &[".gov", ".edu", ".mil", ".gov.uk", ".ac.uk", ".nhs.uk"];

/// Extract the lower-cased hostname from an absolute URL, stripping `www.`.
pub fn registrable_host(raw: &str) -> Result<String, DomainError> {
    let parsed = Url::parse(raw).map_err(|e| DomainError::InvalidUrl(format!("{raw}: {e}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| DomainError::InvalidUrl(format!("{raw}: no host")))?
        .to_lowercase();
    Ok(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

/// Substring membership test against a curated list.
pub fn on_list(host: &str, list: &[&str]) -> bool {
    list.iter().any(|entry| host.contains(entry))
}

/// Hostname ends in a governmental or educational suffix.
pub fn has_official_suffix(host: &str) -> bool {
    OFFICIAL_SUFFIXES.iter().any(|suffix| host.ends_with(suffix))
}

/// Whether a source URL counts as trusted for fact-check purposes.
///
/// Unparseable URLs are simply untrusted; a bad link in a provider result
/// must not abort aggregation.
pub fn is_trusted_source(url: &str) -> bool {
    match registrable_host(url) {
        Ok(host) => on_list(&host, TRUSTED_OUTLETS) || has_official_suffix(&host),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_host_strips_www() {
        assert_eq!(
            registrable_host("https://www.reuters.com/world/article").unwrap(),
            "reuters.com"
        );
    }

    #[test]
    fn test_registrable_host_lowercases() {
        assert_eq!(
            registrable_host("https://News.BBC.co.uk/story").unwrap(),
            "news.bbc.co.uk"
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(registrable_host("not a url").is_err());
        assert!(registrable_host("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_substring_membership() {
        // Subdomains match by substring
        assert!(on_list("amp.theguardian.com", RELIABLE_DOMAINS));
        // Known limitation: lookalikes embedding a listed name also match
        assert!(on_list("bbc.com.totally-legit.biz", RELIABLE_DOMAINS));
    }

    #[test]
    fn test_official_suffix() {
        assert!(has_official_suffix("cdc.gov"));
        assert!(has_official_suffix("ox.ac.uk"));
        assert!(!has_official_suffix("gov.example.com"));
    }

    #[test]
    fn test_trusted_source() {
        assert!(is_trusted_source("https://www.snopes.com/fact-check/x"));
        assert!(is_trusted_source("https://www.cdc.gov/measles"));
        assert!(!is_trusted_source("https://randomblog.example.net/post"));
        assert!(!is_trusted_source("::::"));
    }
}
