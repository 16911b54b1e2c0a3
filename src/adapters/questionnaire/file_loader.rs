//! File-based questionnaire loader.
//!
//! Resolves `<directory>/<REGULATION>/<industry>.json`, with the regulation
//! code upper-cased and the industry lower-cased. Questionnaires that omit
//! an `answer_points` object fall back to the stock scoring table, and
//! section weights are normalized on load.

use async_trait::async_trait;
use serde::Deserialize;
use std::io;
use std::path::PathBuf;

use crate::domain::questionnaire::{AnswerPoints, Questionnaire, RecommendationIndex, Section};
use crate::ports::{QuestionnaireError, QuestionnairePackage, QuestionnaireProvider};

/// On-disk questionnaire layout.
#[derive(Debug, Deserialize)]
struct QuestionnaireFile {
    sections: Vec<Section>,
    #[serde(default)]
    answer_points: AnswerPoints,
    #[serde(default)]
    recommendations: RecommendationIndex,
}

/// Loads questionnaire packages from a directory tree.
pub struct FileQuestionnaireLoader {
    directory: PathBuf,
}

impl FileQuestionnaireLoader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn path_for(&self, regulation: &str, industry: &str) -> PathBuf {
        self.directory
            .join(regulation)
            .join(format!("{industry}.json"))
    }
}

#[async_trait]
impl QuestionnaireProvider for FileQuestionnaireLoader {
    async fn fetch(
        &self,
        regulation: &str,
        industry: &str,
    ) -> Result<QuestionnairePackage, QuestionnaireError> {
        let regulation = regulation.trim().to_uppercase();
        let industry = industry.trim().to_lowercase();
        let path = self.path_for(&regulation, &industry);

        tracing::debug!(path = %path.display(), "loading questionnaire");
        let raw = tokio::fs::read_to_string(&path).await.map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                QuestionnaireError::NotFound {
                    regulation: regulation.clone(),
                    industry: industry.clone(),
                }
            } else {
                QuestionnaireError::Storage(error.to_string())
            }
        })?;

        let file: QuestionnaireFile =
            serde_json::from_str(&raw).map_err(|error| QuestionnaireError::Malformed(error.to_string()))?;

        let mut questionnaire = Questionnaire {
            sections: file.sections,
        };
        questionnaire.normalize_weights();

        let answer_points = if file.answer_points.is_empty() {
            tracing::warn!(
                regulation = %regulation,
                industry = %industry,
                "questionnaire declares no answer points, using the stock table"
            );
            AnswerPoints::default_table()
        } else {
            file.answer_points
        };

        tracing::info!(
            regulation = %regulation,
            industry = %industry,
            sections = questionnaire.section_count(),
            "questionnaire loaded"
        );

        Ok(QuestionnairePackage {
            questionnaire,
            answer_points,
            recommendations: file.recommendations,
        })
    }
}
