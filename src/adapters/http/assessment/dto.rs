//! Request and response DTOs for the assessment endpoints.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentResults;
use crate::domain::questionnaire::ResponseSet;
use crate::domain::recommendation::{
    PrioritizedRecommendations, PriorityEntry, RecommendationPrioritizer,
};

/// Request body for scoring one filled-in questionnaire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAssessmentRequest {
    pub regulation: String,
    pub industry: String,
    /// Answers keyed by `s<section>_q<question>`.
    #[serde(default)]
    pub responses: ResponseSet,
}

/// One section's bucketed entry: score as a percentage plus its advice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityEntryDto {
    pub section: String,
    pub score: f64,
    pub recommendations: Vec<String>,
}

/// Recommendations bucketed by urgency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityBucketsDto {
    pub high: Vec<PriorityEntryDto>,
    pub medium: Vec<PriorityEntryDto>,
    pub low: Vec<PriorityEntryDto>,
}

impl From<PrioritizedRecommendations> for PriorityBucketsDto {
    fn from(organized: PrioritizedRecommendations) -> Self {
        let convert = |entries: Vec<PriorityEntry>| {
            entries
                .into_iter()
                .map(|entry| PriorityEntryDto {
                    section: entry.section,
                    score: entry.score,
                    recommendations: entry.recommendations,
                })
                .collect()
        };
        Self {
            high: convert(organized.high),
            medium: convert(organized.medium),
            low: convert(organized.low),
        }
    }
}

/// Full assessment response: scores plus both prioritizer views.
///
/// Section scores are fractions in `[0, 1]`; `null` marks a "not
/// applicable" section. A `complianceLevel` of `"Error"` means scoring
/// failed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReportDto {
    pub overall_score: f64,
    pub compliance_level: String,
    pub section_scores: IndexMap<String, Option<f64>>,
    pub recommendations: IndexMap<String, Vec<String>>,
    pub high_risk_areas: Vec<String>,
    pub improvement_priorities: Vec<String>,
    /// Contract A: top advice per improvement-priority section.
    pub priority_actions: IndexMap<String, Vec<String>>,
    /// Contract C: advice bucketed high/medium/low.
    pub recommendations_by_priority: PriorityBucketsDto,
    pub generated_at: DateTime<Utc>,
}

impl AssessmentReportDto {
    /// Builds the response from scored results, running both prioritizer
    /// views.
    pub fn from_results(results: &AssessmentResults, generated_at: DateTime<Utc>) -> Self {
        Self {
            overall_score: results.overall_score,
            compliance_level: results.compliance_level.label().to_string(),
            section_scores: results
                .section_scores
                .iter()
                .map(|(name, score)| (name.clone(), score.score()))
                .collect(),
            recommendations: results.recommendations.clone(),
            high_risk_areas: results.high_risk_areas.clone(),
            improvement_priorities: results.improvement_priorities.clone(),
            priority_actions: RecommendationPrioritizer::prioritize(results),
            recommendations_by_priority: RecommendationPrioritizer::organize_by_priority(results)
                .into(),
            generated_at,
        }
    }
}

/// Response body for the markdown summary endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReportDto {
    pub report: String,
    pub generated_at: DateTime<Utc>,
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
