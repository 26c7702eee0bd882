//! Veracity Engine - orchestration and process-wide state
//!
//! Ties the signal detectors and the fact-check aggregator together behind
//! one `analyze` operation, backed by a TTL result cache and a feedback
//! accumulator that hydrate from and flush to a persistence collaborator.

pub mod cache;
pub mod engine;
pub mod feedback;
pub mod store;

pub use cache::*;
pub use engine::*;
pub use feedback::*;
pub use store::*;
