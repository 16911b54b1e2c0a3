//! Answer points and user responses.
//!
//! The answer-points table maps answer labels to a score in `[0, 1]` or to
//! an explicit "not applicable" marker. Responses are keyed by the
//! `(section ordinal, question ordinal)` pair, carried over the wire in the
//! `s<section>_q<question>` form the form renderer produces.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Point value for a single answer label.
///
/// `NotApplicable` answers are excluded from a section's denominator but do
/// not suppress recommendation collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum PointValue {
    Points(f64),
    NotApplicable,
}

impl From<Option<f64>> for PointValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(points) => PointValue::Points(points),
            None => PointValue::NotApplicable,
        }
    }
}

impl From<PointValue> for Option<f64> {
    fn from(value: PointValue) -> Self {
        match value {
            PointValue::Points(points) => Some(points),
            PointValue::NotApplicable => None,
        }
    }
}

/// The answer-points table. Labels absent from the table are unscored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerPoints(IndexMap<String, PointValue>);

static DEFAULT_ANSWER_POINTS: Lazy<AnswerPoints> = Lazy::new(|| {
    AnswerPoints::new()
        .with("Yes - Successfully completed", PointValue::Points(1.0))
        .with(
            "Yes, with comprehensive documentation",
            PointValue::Points(1.0),
        )
        .with("Yes, with full documentation", PointValue::Points(1.0))
        .with("Yes", PointValue::Points(1.0))
        .with("Partially completed", PointValue::Points(0.5))
        .with("In progress", PointValue::Points(0.5))
        .with(
            "Partially, but training needs improvement",
            PointValue::Points(0.5),
        )
        .with(
            "Partially, but the process needs improvement",
            PointValue::Points(0.5),
        )
        .with("No - Not yet completed", PointValue::Points(0.0))
        .with("No - Not Applicable", PointValue::NotApplicable)
        .with("No", PointValue::Points(0.0))
        .with("Not applicable", PointValue::NotApplicable)
});

impl AnswerPoints {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock scoring table used when a questionnaire does not declare
    /// its own `answer_points` object.
    pub fn default_table() -> Self {
        DEFAULT_ANSWER_POINTS.clone()
    }

    /// Adds an entry, returning the table for chaining.
    pub fn with(mut self, label: impl Into<String>, value: PointValue) -> Self {
        self.0.insert(label.into(), value);
        self
    }

    /// Looks up the point value for an answer label.
    pub fn get(&self, label: &str) -> Option<PointValue> {
        self.0.get(label).copied()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Composite response key: `(section ordinal, question ordinal)`.
///
/// Serialized as `s<section>_q<question>`, the key format the form
/// renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResponseKey {
    pub section: usize,
    pub question: usize,
}

impl ResponseKey {
    /// Creates a key from section and question ordinals.
    pub fn new(section: usize, question: usize) -> Self {
        Self { section, question }
    }
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}_q{}", self.section, self.question)
    }
}

/// Error returned when a response key does not match `s<n>_q<m>`.
#[derive(Debug, Clone, Error)]
#[error("Invalid response key '{key}', expected s<section>_q<question>")]
pub struct ResponseKeyError {
    pub key: String,
}

impl FromStr for ResponseKey {
    type Err = ResponseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ResponseKeyError { key: s.to_string() };

        let rest = s.strip_prefix('s').ok_or_else(invalid)?;
        let (section, question) = rest.split_once("_q").ok_or_else(invalid)?;
        Ok(Self {
            section: section.parse().map_err(|_| invalid())?,
            question: question.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for ResponseKey {
    type Error = ResponseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResponseKey> for String {
    fn from(key: ResponseKey) -> Self {
        key.to_string()
    }
}

/// One user's answers, keyed by `(section ordinal, question ordinal)`.
/// Absent entries mean the question was left unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<ResponseKey, String>);

impl ResponseSet {
    /// Creates an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selected answer for a question, returning the set for
    /// chaining.
    pub fn with(mut self, section: usize, question: usize, answer: impl Into<String>) -> Self {
        self.record(section, question, answer);
        self
    }

    /// Records the selected answer for a question.
    pub fn record(&mut self, section: usize, question: usize, answer: impl Into<String>) {
        self.0
            .insert(ResponseKey::new(section, question), answer.into());
    }

    /// Looks up the answer for a question, if one was given.
    pub fn answer(&self, section: usize, question: usize) -> Option<&str> {
        self.0
            .get(&ResponseKey::new(section, question))
            .map(String::as_str)
    }

    /// Returns true if no questions were answered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of answered questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_value_deserializes_from_number_or_null() {
        let table: AnswerPoints =
            serde_json::from_str(r#"{"Yes": 1.0, "Not applicable": null}"#).unwrap();
        assert_eq!(table.get("Yes"), Some(PointValue::Points(1.0)));
        assert_eq!(table.get("Not applicable"), Some(PointValue::NotApplicable));
        assert_eq!(table.get("Unknown"), None);
    }

    #[test]
    fn point_value_serializes_not_applicable_as_null() {
        let table = AnswerPoints::new().with("Not applicable", PointValue::NotApplicable);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Not applicable":null}"#);
    }

    #[test]
    fn default_table_scores_the_stock_labels() {
        let table = AnswerPoints::default_table();
        assert_eq!(table.get("Yes"), Some(PointValue::Points(1.0)));
        assert_eq!(
            table.get("Partially completed"),
            Some(PointValue::Points(0.5))
        );
        assert_eq!(
            table.get("No - Not yet completed"),
            Some(PointValue::Points(0.0))
        );
        assert_eq!(table.get("Not applicable"), Some(PointValue::NotApplicable));
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn response_key_displays_in_wire_format() {
        assert_eq!(ResponseKey::new(2, 7).to_string(), "s2_q7");
    }

    #[test]
    fn response_key_parses_wire_format() {
        let key: ResponseKey = "s3_q12".parse().unwrap();
        assert_eq!(key, ResponseKey::new(3, 12));
    }

    #[test]
    fn response_key_rejects_malformed_input() {
        assert!("3_12".parse::<ResponseKey>().is_err());
        assert!("s3q12".parse::<ResponseKey>().is_err());
        assert!("sX_q2".parse::<ResponseKey>().is_err());
        assert!("s1_qY".parse::<ResponseKey>().is_err());
    }

    #[test]
    fn response_set_round_trips_through_json() {
        let responses = ResponseSet::new().with(0, 0, "Yes").with(1, 3, "No");

        let json = serde_json::to_string(&responses).unwrap();
        assert!(json.contains("\"s0_q0\":\"Yes\""));

        let parsed: ResponseSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, responses);
        assert_eq!(parsed.answer(1, 3), Some("No"));
    }

    #[test]
    fn unanswered_questions_are_absent() {
        let responses = ResponseSet::new().with(0, 0, "Yes");
        assert_eq!(responses.answer(0, 1), None);
        assert_eq!(responses.answer(5, 0), None);
    }
}
