//! Questionnaire provider port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::{AnswerPoints, Questionnaire, RecommendationIndex};

/// Everything the loader resolves for one `(regulation, industry)` pair.
///
/// The recommendation index is populated ahead of scoring; the core only
/// reads from it, never writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnairePackage {
    pub questionnaire: Questionnaire,
    #[serde(default)]
    pub answer_points: AnswerPoints,
    #[serde(default)]
    pub recommendations: RecommendationIndex,
}

/// Read-only port resolving questionnaires for scoring.
#[async_trait]
pub trait QuestionnaireProvider: Send + Sync {
    /// Resolves the questionnaire package for a regulation/industry pair.
    ///
    /// Fails loudly when no questionnaire exists for the pair; the caller
    /// decides whether to degrade or surface the failure.
    async fn fetch(
        &self,
        regulation: &str,
        industry: &str,
    ) -> Result<QuestionnairePackage, QuestionnaireError>;
}

/// Errors that can occur while resolving a questionnaire.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("No questionnaire for regulation '{regulation}' and industry '{industry}'")]
    NotFound {
        regulation: String,
        industry: String,
    },

    #[error("Questionnaire is malformed: {0}")]
    Malformed(String),

    #[error("Questionnaire storage error: {0}")]
    Storage(String),
}
