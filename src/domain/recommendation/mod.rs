//! Recommendation module - prioritization of remediation advice.

mod prioritizer;

pub use prioritizer::{
    PrioritizedRecommendations, Priority, PriorityEntry, RecommendationPrioritizer,
    MAX_SECTION_RECOMMENDATIONS,
};
