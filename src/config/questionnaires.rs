//! Questionnaire storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Questionnaire storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireConfig {
    /// Root directory of the questionnaire tree
    /// (`<directory>/<REGULATION>/<industry>.json`)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl QuestionnaireConfig {
    /// Validate questionnaire configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.directory.as_os_str().is_empty() {
            return Err(ValidationError::EmptyQuestionnaireDirectory);
        }
        Ok(())
    }
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("questionnaires")
}
