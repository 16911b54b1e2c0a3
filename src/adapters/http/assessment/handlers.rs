//! HTTP handlers for the assessment endpoints.
//!
//! These handlers connect Axum routes to the application layer. Scoring
//! never fails outward; a failed assessment surfaces as the degraded
//! sentinel in an otherwise well-formed response body.

use std::sync::Arc;

use axum::extract::{Json, State};
use chrono::Utc;

use crate::application::handlers::{ScoreAssessmentCommand, ScoreAssessmentHandler};
use crate::domain::report::AssessmentSummary;
use crate::ports::QuestionnaireProvider;

use super::dto::{
    AssessmentReportDto, HealthResponse, ScoreAssessmentRequest, SummaryReportDto,
};

/// Shared application state for the assessment routes.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub provider: Arc<dyn QuestionnaireProvider>,
}

impl AssessmentAppState {
    pub fn new(provider: Arc<dyn QuestionnaireProvider>) -> Self {
        Self { provider }
    }

    fn score_handler(&self) -> ScoreAssessmentHandler {
        ScoreAssessmentHandler::new(self.provider.clone())
    }
}

/// POST /api/assessments
///
/// Scores a response snapshot and returns results plus both prioritizer
/// views.
pub async fn score_assessment(
    State(state): State<AssessmentAppState>,
    Json(request): Json<ScoreAssessmentRequest>,
) -> Json<AssessmentReportDto> {
    let results = state
        .score_handler()
        .handle(ScoreAssessmentCommand {
            regulation: request.regulation,
            industry: request.industry,
            responses: request.responses,
        })
        .await;

    Json(AssessmentReportDto::from_results(&results, Utc::now()))
}

/// POST /api/assessments/report
///
/// Scores a response snapshot and returns the markdown summary.
pub async fn assessment_report(
    State(state): State<AssessmentAppState>,
    Json(request): Json<ScoreAssessmentRequest>,
) -> Json<SummaryReportDto> {
    let results = state
        .score_handler()
        .handle(ScoreAssessmentCommand {
            regulation: request.regulation,
            industry: request.industry,
            responses: request.responses,
        })
        .await;

    let generated_at = Utc::now();
    Json(SummaryReportDto {
        report: AssessmentSummary::render(&results, generated_at.date_naive()),
        generated_at,
    })
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
