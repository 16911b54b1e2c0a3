//! Recommendation Prioritizer - ranked and bucketed views over
//! assessment results.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentResults;

/// Maximum recommendations surfaced per section in the priority view.
pub const MAX_SECTION_RECOMMENDATIONS: usize = 5;

/// Urgency bucket for a section's recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// One section's entry in the bucketed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityEntry {
    pub section: String,
    /// Section score expressed as a percentage.
    pub score: f64,
    pub recommendations: Vec<String>,
}

/// Recommendations grouped by urgency. Entries within each bucket follow
/// schema section order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedRecommendations {
    pub high: Vec<PriorityEntry>,
    pub medium: Vec<PriorityEntry>,
    pub low: Vec<PriorityEntry>,
}

impl PrioritizedRecommendations {
    /// Returns true if every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.medium.is_empty() && self.low.is_empty()
    }

    fn bucket_mut(&mut self, priority: Priority) -> &mut Vec<PriorityEntry> {
        match priority {
            Priority::High => &mut self.high,
            Priority::Medium => &mut self.medium,
            Priority::Low => &mut self.low,
        }
    }
}

/// Pure transforms ranking which sections need attention most urgently.
///
/// Stateless; a degraded results value yields empty output from every
/// operation.
pub struct RecommendationPrioritizer;

impl RecommendationPrioritizer {
    /// Top recommendations for each improvement-priority section, worst
    /// section first, at most [`MAX_SECTION_RECOMMENDATIONS`] strings each.
    ///
    /// Sections without collected recommendations are omitted entirely,
    /// never included as empty entries.
    pub fn prioritize(results: &AssessmentResults) -> IndexMap<String, Vec<String>> {
        let mut prioritized = IndexMap::new();

        for section in &results.improvement_priorities {
            match results.recommendations.get(section) {
                Some(advice) if !advice.is_empty() => {
                    prioritized.insert(
                        section.clone(),
                        advice
                            .iter()
                            .take(MAX_SECTION_RECOMMENDATIONS)
                            .cloned()
                            .collect(),
                    );
                }
                _ => {
                    tracing::debug!(section = %section, "priority section has no recommendations, omitted");
                }
            }
        }

        prioritized
    }

    /// Maps a section score in `[0, ∞)` to its urgency bucket.
    pub fn priority_level(score: f64) -> Priority {
        if score < 0.3 {
            Priority::High
        } else if score < 0.5 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Buckets every scored section that collected recommendations by
    /// urgency. Sections with no recommendations are skipped even when
    /// their score is low; "not applicable" sections are skipped outright.
    pub fn organize_by_priority(results: &AssessmentResults) -> PrioritizedRecommendations {
        let mut organized = PrioritizedRecommendations::default();

        for (section, section_score) in &results.section_scores {
            let Some(score) = section_score.score() else {
                continue;
            };
            let advice = match results.recommendations.get(section) {
                Some(advice) if !advice.is_empty() => advice,
                _ => continue,
            };

            let entry = PriorityEntry {
                section: section.clone(),
                score: score * 100.0,
                recommendations: advice.clone(),
            };
            organized
                .bucket_mut(Self::priority_level(score))
                .push(entry);
        }

        organized
    }
}
