//! Assessment handlers.

mod score_assessment;

pub use score_assessment::{ScoreAssessmentCommand, ScoreAssessmentHandler};
