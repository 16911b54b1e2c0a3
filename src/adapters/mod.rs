//! Adapters - infrastructure implementations of the ports.

pub mod http;
pub mod questionnaire;
