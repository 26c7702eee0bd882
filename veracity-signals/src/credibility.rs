//! Source credibility classifier
//!
//! Maps a page URL's hostname to a reputation signal from the curated
//! registries. Match priority is fixed, not data-driven: satire wins over
//! everything so a satire site that also appears on a reliability list is
//! still flagged as satire.

use veracity_core::{
    has_official_suffix, on_list, registrable_host, CredibilityLabel, DomainError, SignalResult,
    QUESTIONABLE_DOMAINS, RELIABLE_DOMAINS, SATIRE_DOMAINS,
};

/// The signal used when the URL cannot be classified at all.
pub fn unknown_source() -> SignalResult<CredibilityLabel> {
    SignalResult::new(50, CredibilityLabel::UnknownSource)
}

/// Classify a page URL's source credibility.
///
/// Fails with [`DomainError::InvalidUrl`] when no hostname can be extracted;
/// callers running a full analysis should degrade to [`unknown_source`]
/// rather than abort.
pub fn classify_source(url: &str) -> Result<SignalResult<CredibilityLabel>, DomainError> {
    let host = registrable_host(url)?;
    Ok(classify_host(&host))
}

fn classify_host(host: &str) -> SignalResult<CredibilityLabel> {
    // Priority order matters: satire > reliable > questionable > official
    if on_list(host, SATIRE_DOMAINS) {
        SignalResult::new(10, CredibilityLabel::SatireParody)
    } else if on_list(host, RELIABLE_DOMAINS) {
        SignalResult::new(90, CredibilityLabel::HighlyReliable)
    } else if on_list(host, QUESTIONABLE_DOMAINS) {
        SignalResult::new(15, CredibilityLabel::Questionable)
    } else if has_official_suffix(host) {
        SignalResult::new(85, CredibilityLabel::GenerallyReliable)
    } else {
        unknown_source()
    }
}
