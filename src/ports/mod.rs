//! Ports - interfaces the application layer depends on.

mod questionnaire_provider;

pub use questionnaire_provider::{QuestionnaireError, QuestionnairePackage, QuestionnaireProvider};
