//! Command handlers.

pub mod assessment;

pub use assessment::{ScoreAssessmentCommand, ScoreAssessmentHandler};
