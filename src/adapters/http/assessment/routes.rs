//! HTTP routes for the assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{assessment_report, health, score_assessment, AssessmentAppState};

/// Creates the assessment router with all routes.
pub fn assessment_routes(state: AssessmentAppState) -> Router {
    Router::new()
        // POST /api/assessments
        .route("/api/assessments", post(score_assessment))
        // POST /api/assessments/report
        .route("/api/assessments/report", post(assessment_report))
        // GET /api/health
        .route("/api/health", get(health))
        .with_state(state)
}
