//! HTTP adapter - REST surface for the hosting UI.

pub mod assessment;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use assessment::{assessment_routes, AssessmentAppState};

/// Builds the application router with request tracing attached.
pub fn app_router(state: AssessmentAppState) -> Router {
    assessment_routes(state).layer(TraceLayer::new_for_http())
}
