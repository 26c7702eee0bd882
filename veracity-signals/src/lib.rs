//! Veracity Signals - local heuristic detectors and the score combiner
//!
//! The three detectors here are pure, synchronous, pattern-based heuristics:
//! - `credibility` maps a URL's domain to a reputation signal
//! - `sensationalism` scores clickbait/sensational language and typography
//! - `style` scores surface markers of professional writing
//!
//! `combiner` fuses them (plus the fact-check signal) into one weighted
//! risk score with label-driven overrides. None of this is semantic
//! understanding; it is deliberately cheap lexical analysis.

pub mod combiner;
pub mod credibility;
pub mod sensationalism;
pub mod style;

pub use combiner::*;
pub use credibility::*;
pub use sensationalism::*;
pub use style::*;
