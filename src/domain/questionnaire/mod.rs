//! Questionnaire module - schema, answer points, responses.
//!
//! Models the read-only inputs to the assessment core: the questionnaire
//! structure supplied by the loader, the answer-points table, the user's
//! responses, and the externally built recommendation index.

mod answers;
mod recommendation_index;
mod schema;

pub use answers::{AnswerPoints, PointValue, ResponseKey, ResponseKeyError, ResponseSet};
pub use recommendation_index::RecommendationIndex;
pub use schema::{Question, Questionnaire, QuestionnaireBuilder, Section};
