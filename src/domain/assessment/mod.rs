//! Assessment module - the Score Calculator and its result types.

mod results;
mod score_calculator;

pub use results::{AssessmentResults, ComplianceLevel, SectionScore};
pub use score_calculator::{
    ScoreCalculator, ScoringError, HIGH_RISK_THRESHOLD, MAX_IMPROVEMENT_PRIORITIES,
};
