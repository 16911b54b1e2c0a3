//! ScoreAssessmentHandler - resolves a questionnaire and scores one
//! response snapshot.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentResults, ScoreCalculator};
use crate::domain::questionnaire::ResponseSet;
use crate::ports::QuestionnaireProvider;

/// Command to score a filled-in questionnaire.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentCommand {
    /// Regulation code, e.g. "GDPR".
    pub regulation: String,
    /// Industry name, e.g. "e-commerce".
    pub industry: String,
    /// The user's answers, keyed by section/question ordinals.
    pub responses: ResponseSet,
}

/// Handler for scoring assessments.
///
/// Questionnaire resolution failures are absorbed: the handler logs the
/// error and returns the degraded results sentinel so the hosting UI stays
/// renderable.
pub struct ScoreAssessmentHandler {
    provider: Arc<dyn QuestionnaireProvider>,
}

impl ScoreAssessmentHandler {
    pub fn new(provider: Arc<dyn QuestionnaireProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, command: ScoreAssessmentCommand) -> AssessmentResults {
        let package = match self
            .provider
            .fetch(&command.regulation, &command.industry)
            .await
        {
            Ok(package) => package,
            Err(error) => {
                tracing::error!(
                    %error,
                    regulation = %command.regulation,
                    industry = %command.industry,
                    "questionnaire resolution failed, returning degraded results"
                );
                return AssessmentResults::degraded();
            }
        };

        tracing::info!(
            regulation = %command.regulation,
            industry = %command.industry,
            sections = package.questionnaire.section_count(),
            answered = command.responses.len(),
            "scoring assessment"
        );

        ScoreCalculator::compute(
            &package.questionnaire,
            &package.answer_points,
            &command.responses,
            &package.recommendations,
        )
    }
}
