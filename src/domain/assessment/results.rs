//! Assessment result types.
//!
//! The three outcome kinds a consumer must handle - numeric score, "not
//! applicable", and scoring failure - are explicit variants, never bare
//! nulls.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Score outcome for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionScore {
    /// Average of the answered, scorable questions, in `[0, 1]`.
    Scored(f64),
    /// No question in the section produced a scorable answer.
    NotApplicable,
}

impl SectionScore {
    /// Returns the numeric score, if one was produced.
    pub fn score(&self) -> Option<f64> {
        match self {
            SectionScore::Scored(score) => Some(*score),
            SectionScore::NotApplicable => None,
        }
    }

    /// Returns true for the "not applicable" outcome.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, SectionScore::NotApplicable)
    }
}

/// Coarse compliance bucket derived from the overall score.
///
/// `Error` is a sentinel meaning "scoring failed", never a real compliance
/// outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceLevel {
    #[serde(rename = "High Compliance")]
    High,
    #[serde(rename = "Substantial Compliance")]
    Substantial,
    #[serde(rename = "Partial Compliance")]
    Partial,
    #[serde(rename = "Low Compliance")]
    Low,
    #[serde(rename = "Error")]
    Error,
}

impl ComplianceLevel {
    /// Maps an overall score in `[0, 100]` to its level. Lower bounds are
    /// inclusive. Never returns `Error`.
    pub fn from_overall_score(overall_score: f64) -> Self {
        if overall_score >= 90.0 {
            ComplianceLevel::High
        } else if overall_score >= 75.0 {
            ComplianceLevel::Substantial
        } else if overall_score >= 50.0 {
            ComplianceLevel::Partial
        } else {
            ComplianceLevel::Low
        }
    }

    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceLevel::High => "High Compliance",
            ComplianceLevel::Substantial => "Substantial Compliance",
            ComplianceLevel::Partial => "Partial Compliance",
            ComplianceLevel::Low => "Low Compliance",
            ComplianceLevel::Error => "Error",
        }
    }

    /// Returns true for the degraded sentinel.
    pub fn is_error(&self) -> bool {
        matches!(self, ComplianceLevel::Error)
    }
}

/// Output of the Score Calculator, computed fresh per invocation.
///
/// Map iteration follows schema section order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResults {
    /// Weighted overall score in `[0, 100]`.
    pub overall_score: f64,
    pub compliance_level: ComplianceLevel,
    /// Per-section outcome, keyed by section name.
    pub section_scores: IndexMap<String, SectionScore>,
    /// Collected remediation advice, keyed by section name.
    pub recommendations: IndexMap<String, Vec<String>>,
    /// Sections scoring below the high-risk threshold, worst first.
    pub high_risk_areas: Vec<String>,
    /// The worst high-risk sections, truncated for the action plan.
    pub improvement_priorities: Vec<String>,
}

impl AssessmentResults {
    /// The degraded sentinel returned when scoring fails internally:
    /// zero score, `Error` level, every collection empty.
    pub fn degraded() -> Self {
        Self {
            overall_score: 0.0,
            compliance_level: ComplianceLevel::Error,
            section_scores: IndexMap::new(),
            recommendations: IndexMap::new(),
            high_risk_areas: Vec::new(),
            improvement_priorities: Vec::new(),
        }
    }

    /// Returns true if this value is the degraded sentinel.
    pub fn is_degraded(&self) -> bool {
        self.compliance_level.is_error()
    }
}
