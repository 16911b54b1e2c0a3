//! Score Calculator - per-section scoring, weighted overall score,
//! compliance level, and high-risk selection.

use indexmap::IndexMap;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::questionnaire::{
    AnswerPoints, PointValue, Questionnaire, RecommendationIndex, ResponseSet,
};

use super::{AssessmentResults, ComplianceLevel, SectionScore};

/// Sections with a numeric score below this are flagged as high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.6;

/// Maximum number of sections surfaced as improvement priorities.
pub const MAX_IMPROVEMENT_PRIORITIES: usize = 5;

/// Internal scoring failures. These never cross the public boundary; they
/// are absorbed into the degraded sentinel.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("malformed questionnaire: {0}")]
    InvalidInput(#[from] ValidationError),
}

/// Calculator turning a questionnaire, an answer-points table, and one
/// response snapshot into [`AssessmentResults`].
///
/// Stateless: every call operates on its own input snapshot.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Scores a response snapshot against a questionnaire.
    ///
    /// Never fails: any internal error is logged with full detail and
    /// converted into [`AssessmentResults::degraded`]. Callers must treat a
    /// `compliance_level` of `Error` as "scoring failed", not as a real
    /// compliance outcome.
    pub fn compute(
        questionnaire: &Questionnaire,
        answer_points: &AnswerPoints,
        responses: &ResponseSet,
        recommendation_index: &RecommendationIndex,
    ) -> AssessmentResults {
        match Self::try_compute(questionnaire, answer_points, responses, recommendation_index) {
            Ok(results) => results,
            Err(error) => {
                tracing::error!(%error, "assessment scoring failed, returning degraded results");
                AssessmentResults::degraded()
            }
        }
    }

    fn try_compute(
        questionnaire: &Questionnaire,
        answer_points: &AnswerPoints,
        responses: &ResponseSet,
        recommendation_index: &RecommendationIndex,
    ) -> Result<AssessmentResults, ScoringError> {
        questionnaire.validate()?;

        let mut section_scores: IndexMap<String, SectionScore> = IndexMap::new();
        let mut recommendations: IndexMap<String, Vec<String>> = IndexMap::new();

        for (section_index, section) in questionnaire.sections.iter().enumerate() {
            let mut total = 0.0;
            let mut answered = 0u32;

            for (question_index, question) in section.questions.iter().enumerate() {
                let Some(answer) = responses.answer(section_index, question_index) else {
                    continue;
                };

                // Collection is gated by the externally built index, not by
                // the question's own recommendation map alone.
                if recommendation_index.is_marked(&section.name, answer) {
                    if let Some(advice) = question.recommendations.get(answer) {
                        let collected = recommendations.entry(section.name.clone()).or_default();
                        if !collected.iter().any(|existing| existing == advice) {
                            collected.push(advice.clone());
                        }
                    }
                }

                match answer_points.get(answer) {
                    Some(PointValue::Points(points)) => {
                        Self::check_points(answer, points)?;
                        total += points;
                        answered += 1;
                    }
                    Some(PointValue::NotApplicable) => {
                        tracing::debug!(
                            section = %section.name,
                            question = question_index,
                            "answer marked not applicable, excluded from denominator"
                        );
                    }
                    None => {
                        tracing::debug!(
                            section = %section.name,
                            question = question_index,
                            answer,
                            "answer label missing from points table, left unscored"
                        );
                    }
                }
            }

            let score = if answered > 0 {
                SectionScore::Scored(total / f64::from(answered))
            } else {
                SectionScore::NotApplicable
            };
            tracing::debug!(section = %section.name, ?score, answered, "section scored");
            section_scores.insert(section.name.clone(), score);
        }

        let overall_score = Self::overall_score(questionnaire, &section_scores);
        let compliance_level = ComplianceLevel::from_overall_score(overall_score);

        // High-risk candidates keep schema order on ties: stable sort.
        let mut candidates: Vec<(String, f64)> = section_scores
            .iter()
            .filter_map(|(name, section_score)| {
                section_score
                    .score()
                    .filter(|score| *score < HIGH_RISK_THRESHOLD)
                    .map(|score| (name.clone(), score))
            })
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        let high_risk_areas: Vec<String> = candidates.into_iter().map(|(name, _)| name).collect();
        let improvement_priorities: Vec<String> = high_risk_areas
            .iter()
            .take(MAX_IMPROVEMENT_PRIORITIES)
            .cloned()
            .collect();

        Ok(AssessmentResults {
            overall_score,
            compliance_level,
            section_scores,
            recommendations,
            high_risk_areas,
            improvement_priorities,
        })
    }

    /// Weight-normalized average of the numeric section scores, scaled to
    /// `[0, 100]`. Zero when no section produced a numeric score.
    fn overall_score(
        questionnaire: &Questionnaire,
        section_scores: &IndexMap<String, SectionScore>,
    ) -> f64 {
        let mut weighted_total = 0.0;
        let mut weight_total = 0.0;

        for section in &questionnaire.sections {
            let score = section_scores
                .get(&section.name)
                .and_then(SectionScore::score);
            if let Some(score) = score {
                weighted_total += section.weight * score;
                weight_total += section.weight;
            }
        }

        if weight_total > 0.0 {
            100.0 * weighted_total / weight_total
        } else {
            0.0
        }
    }

    fn check_points(answer: &str, points: f64) -> Result<(), ScoringError> {
        if !points.is_finite() {
            return Err(ValidationError::not_finite(format!("points for answer '{answer}'")).into());
        }
        if !(0.0..=1.0).contains(&points) {
            return Err(
                ValidationError::out_of_range(format!("points for answer '{answer}'"), 0.0, 1.0, points)
                    .into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "score_calculator_test.rs"]
mod score_calculator_test;
