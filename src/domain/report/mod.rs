//! Report module - plain-text rendering of assessment results.

mod summary;

pub use summary::AssessmentSummary;
