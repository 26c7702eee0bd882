//! Analysis subjects - the url/title/text tuple under examination

use serde::{Deserialize, Serialize};

use crate::{truncate_chars, MAX_TEXT_CHARS};

/// The immutable input to one analysis run.
///
/// Text is bounded at construction; the upstream extractor already strips
/// markup, so the body is treated as an opaque sanitized blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSubject {
    /// Absolute URL of the page
    pub url: String,
    /// Page or article title (may be empty)
    pub title: String,
    /// Extracted body text, capped at [`MAX_TEXT_CHARS`]
    pub text: String,
}

impl AnalysisSubject {
    pub fn new(url: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        let text: String = text.into();
        let text = truncate_chars(&text, MAX_TEXT_CHARS).to_string();
        Self {
            url: url.into(),
            title: title.into(),
            text,
        }
    }

    /// Title and body joined into one blob, as the detectors consume it.
    pub fn combined(&self) -> String {
        if self.title.is_empty() {
            self.text.clone()
        } else {
            format!("{}. {}", self.title, self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_bounded() {
        let long = "a".repeat(MAX_TEXT_CHARS + 500);
        let subject = AnalysisSubject::new("https://example.com", "t", long);
        assert_eq!(subject.text.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn test_combined_without_title() {
        let subject = AnalysisSubject::new("https://example.com", "", "body text");
        assert_eq!(subject.combined(), "body text");
    }

    #[test]
    fn test_combined_with_title() {
        let subject = AnalysisSubject::new("https://example.com", "Headline", "body");
        assert_eq!(subject.combined(), "Headline. body");
    }
}
