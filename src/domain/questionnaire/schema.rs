//! Questionnaire schema - weighted sections of single-choice questions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// A single-choice question with optional per-answer remediation advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question text shown by the form renderer.
    #[serde(default)]
    pub text: String,
    /// Ordered set of allowed answer labels.
    pub options: Vec<String>,
    /// Remediation advice keyed by the answer label that triggers it.
    /// Not every option needs an entry.
    #[serde(default)]
    pub recommendations: IndexMap<String, String>,
}

impl Question {
    /// Creates a question with the given text and options.
    pub fn new(text: impl Into<String>, options: Vec<impl Into<String>>) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(|o| o.into()).collect(),
            recommendations: IndexMap::new(),
        }
    }

    /// Attaches remediation advice to one answer label.
    pub fn with_recommendation(
        mut self,
        answer: impl Into<String>,
        advice: impl Into<String>,
    ) -> Self {
        self.recommendations.insert(answer.into(), advice.into());
        self
    }
}

/// A named, weighted group of related compliance questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique within a questionnaire; used as the map key downstream.
    pub name: String,
    /// Relative importance. Weights need not sum to 1 across sections.
    pub weight: f64,
    pub questions: Vec<Question>,
}

/// The questionnaire schema, externally supplied and read-only to the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Ordered sections; section ordinals key the response map.
    pub sections: Vec<Section>,
}

impl Questionnaire {
    /// Creates a builder for constructing a questionnaire.
    pub fn builder() -> QuestionnaireBuilder {
        QuestionnaireBuilder::new()
    }

    /// Returns true if the questionnaire has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Checks structural invariants: non-empty unique section names,
    /// finite positive weights, and at least one option per question.
    ///
    /// A questionnaire with zero sections is valid; it simply scores to
    /// empty results.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.name.trim().is_empty() {
                return Err(ValidationError::empty_field("section name"));
            }
            if !seen.insert(section.name.as_str()) {
                return Err(ValidationError::duplicate("section name", &section.name));
            }
            if !section.weight.is_finite() {
                return Err(ValidationError::not_finite(format!(
                    "weight of section '{}'",
                    section.name
                )));
            }
            if section.weight <= 0.0 {
                return Err(ValidationError::not_positive(
                    format!("weight of section '{}'", section.name),
                    section.weight,
                ));
            }
            for (index, question) in section.questions.iter().enumerate() {
                if question.options.is_empty() {
                    return Err(ValidationError::empty_field(format!(
                        "options of question {} in section '{}'",
                        index, section.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Repairs section weights so they sum to 1.0.
    ///
    /// Missing, non-positive, or non-finite weights become `1/n`; if the
    /// resulting total falls outside `[0.99, 1.01]` every weight is rescaled
    /// by the total.
    pub fn normalize_weights(&mut self) {
        let count = self.sections.len();
        if count == 0 {
            return;
        }

        let equal_share = 1.0 / count as f64;
        for section in &mut self.sections {
            if !section.weight.is_finite() || section.weight <= 0.0 {
                section.weight = equal_share;
            }
        }

        let total: f64 = self.sections.iter().map(|s| s.weight).sum();
        if (0.99..=1.01).contains(&total) {
            return;
        }

        tracing::info!(total, "normalizing section weights to sum to 1.0");
        for section in &mut self.sections {
            section.weight /= total;
        }
    }
}

/// Builder for constructing Questionnaire instances.
#[derive(Debug, Default)]
pub struct QuestionnaireBuilder {
    sections: Vec<Section>,
}

impl QuestionnaireBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section with its questions.
    pub fn section(mut self, name: impl Into<String>, weight: f64, questions: Vec<Question>) -> Self {
        self.sections.push(Section {
            name: name.into(),
            weight,
            questions,
        });
        self
    }

    /// Builds the questionnaire.
    pub fn build(self) -> Questionnaire {
        Questionnaire {
            sections: self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no() -> Vec<&'static str> {
        vec!["Yes", "No"]
    }

    #[test]
    fn builder_creates_sections_in_order() {
        let questionnaire = Questionnaire::builder()
            .section("Consent", 0.6, vec![Question::new("Q1", yes_no())])
            .section("Security", 0.4, vec![Question::new("Q2", yes_no())])
            .build();

        assert_eq!(questionnaire.section_count(), 2);
        assert_eq!(questionnaire.sections[0].name, "Consent");
        assert_eq!(questionnaire.sections[1].name, "Security");
    }

    #[test]
    fn validate_accepts_well_formed_schema() {
        let questionnaire = Questionnaire::builder()
            .section("Consent", 0.5, vec![Question::new("Q1", yes_no())])
            .section("Security", 0.5, vec![Question::new("Q2", yes_no())])
            .build();

        assert!(questionnaire.validate().is_ok());
    }

    #[test]
    fn validate_accepts_zero_sections() {
        assert!(Questionnaire::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_section_name() {
        let questionnaire = Questionnaire::builder()
            .section("  ", 1.0, vec![Question::new("Q1", yes_no())])
            .build();

        assert!(matches!(
            questionnaire.validate(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_section_names() {
        let questionnaire = Questionnaire::builder()
            .section("Consent", 0.5, vec![Question::new("Q1", yes_no())])
            .section("Consent", 0.5, vec![Question::new("Q2", yes_no())])
            .build();

        assert!(matches!(
            questionnaire.validate(),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn validate_rejects_nan_weight() {
        let questionnaire = Questionnaire::builder()
            .section("Consent", f64::NAN, vec![Question::new("Q1", yes_no())])
            .build();

        assert!(matches!(
            questionnaire.validate(),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_positive_weight() {
        let questionnaire = Questionnaire::builder()
            .section("Consent", 0.0, vec![Question::new("Q1", yes_no())])
            .build();

        assert!(matches!(
            questionnaire.validate(),
            Err(ValidationError::NotPositive { .. })
        ));
    }

    #[test]
    fn validate_rejects_question_without_options() {
        let questionnaire = Questionnaire::builder()
            .section("Consent", 1.0, vec![Question::new("Q1", Vec::<String>::new())])
            .build();

        assert!(matches!(
            questionnaire.validate(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn normalize_weights_rescales_when_total_off() {
        let mut questionnaire = Questionnaire::builder()
            .section("A", 2.0, vec![Question::new("Q1", yes_no())])
            .section("B", 2.0, vec![Question::new("Q2", yes_no())])
            .build();

        questionnaire.normalize_weights();
        assert!((questionnaire.sections[0].weight - 0.5).abs() < 1e-9);
        assert!((questionnaire.sections[1].weight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn normalize_weights_replaces_invalid_entries() {
        let mut questionnaire = Questionnaire::builder()
            .section("A", -1.0, vec![Question::new("Q1", yes_no())])
            .section("B", f64::NAN, vec![Question::new("Q2", yes_no())])
            .build();

        questionnaire.normalize_weights();
        assert!((questionnaire.sections[0].weight - 0.5).abs() < 1e-9);
        assert!((questionnaire.sections[1].weight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn normalize_weights_leaves_near_unit_totals_alone() {
        let mut questionnaire = Questionnaire::builder()
            .section("A", 0.6, vec![Question::new("Q1", yes_no())])
            .section("B", 0.399, vec![Question::new("Q2", yes_no())])
            .build();

        questionnaire.normalize_weights();
        assert!((questionnaire.sections[0].weight - 0.6).abs() < 1e-9);
        assert!((questionnaire.sections[1].weight - 0.399).abs() < 1e-9);
    }

    #[test]
    fn schema_round_trips_through_json() {
        let questionnaire = Questionnaire::builder()
            .section(
                "Consent",
                1.0,
                vec![Question::new("Is consent recorded?", yes_no())
                    .with_recommendation("No", "Introduce a consent register.")],
            )
            .build();

        let json = serde_json::to_string(&questionnaire).unwrap();
        let parsed: Questionnaire = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, questionnaire);
    }

    #[test]
    fn schema_parses_loader_layout() {
        let json = r#"{
            "sections": [
                {
                    "name": "Data Collection",
                    "weight": 0.5,
                    "questions": [
                        {
                            "text": "Is data collection documented?",
                            "options": ["Yes", "No"],
                            "recommendations": {"No": "Document all collection points."}
                        }
                    ]
                }
            ]
        }"#;

        let questionnaire: Questionnaire = serde_json::from_str(json).unwrap();
        assert_eq!(questionnaire.section_count(), 1);
        let question = &questionnaire.sections[0].questions[0];
        assert_eq!(
            question.recommendations.get("No").map(String::as_str),
            Some("Document all collection points.")
        );
    }
}
