//! Assessment HTTP adapter module.
//!
//! Provides the REST endpoints consumed by the report UI.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AssessmentAppState;
pub use routes::assessment_routes;
