//! Recommendation index - externally built accumulator of
//! recommendation-worthy answers, keyed by section name.
//!
//! The questionnaire provider populates this index ahead of scoring; the
//! assessment core only reads from it. Recommendation text for an answered
//! question is collected only when the index carries a matching
//! section/answer entry, so sections absent from the index collect nothing
//! even when the question's own recommendation map has an entry for the
//! given answer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Section-name-keyed index of answer labels that warrant remediation
/// advice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationIndex(IndexMap<String, BTreeSet<String>>);

impl RecommendationIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an answer label as recommendation-worthy for a section,
    /// returning the index for chaining.
    pub fn with(mut self, section: impl Into<String>, answer: impl Into<String>) -> Self {
        self.mark(section, answer);
        self
    }

    /// Marks an answer label as recommendation-worthy for a section.
    pub fn mark(&mut self, section: impl Into<String>, answer: impl Into<String>) {
        self.0.entry(section.into()).or_default().insert(answer.into());
    }

    /// Returns true if the section appears in the index at all.
    pub fn covers_section(&self, section: &str) -> bool {
        self.0.contains_key(section)
    }

    /// Returns true if the index carries this exact section/answer entry.
    pub fn is_marked(&self, section: &str, answer: &str) -> bool {
        self.0
            .get(section)
            .map(|answers| answers.contains(answer))
            .unwrap_or(false)
    }

    /// Returns true if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
