//! Markdown summary of one assessment.
//!
//! Renders the headline result, the flagged risk areas, and a short action
//! plan built from the worst-scoring sections. Consumed verbatim by the
//! report page and the export layer.

use chrono::NaiveDate;

use crate::domain::assessment::{AssessmentResults, SectionScore};

/// How many recommendations each risk area lists before summarizing.
const RISK_AREA_RECOMMENDATIONS: usize = 3;

/// How many sections the action plan covers.
const ACTION_PLAN_SECTIONS: usize = 3;

/// How many recommendations each action-plan item lists.
const ACTION_PLAN_RECOMMENDATIONS: usize = 2;

/// Renderer for the markdown assessment summary.
pub struct AssessmentSummary;

impl AssessmentSummary {
    /// Renders the full summary. The date is supplied by the caller so the
    /// renderer itself stays deterministic.
    pub fn render(results: &AssessmentResults, generated_on: NaiveDate) -> String {
        if results.is_degraded() {
            tracing::warn!("rendering summary for degraded results");
            return "Error: Unable to generate the compliance report. \
                    Please rerun the assessment or contact support."
                .to_string();
        }

        let mut lines: Vec<String> = Vec::new();
        lines.push("# Compliance Assessment Report".to_string());
        lines.push(format!("*Generated on {}*", generated_on.format("%Y-%m-%d")));
        lines.push(String::new());
        lines.push(format!(
            "**Overall compliance score: {:.1}%**",
            results.overall_score
        ));
        lines.push(format!(
            "**Compliance level: {}**",
            results.compliance_level.label()
        ));
        lines.push(String::new());

        Self::render_risk_areas(results, &mut lines);
        Self::render_action_plan(results, &mut lines);

        lines.join("\n")
    }

    fn render_risk_areas(results: &AssessmentResults, lines: &mut Vec<String>) {
        if results.high_risk_areas.is_empty() {
            lines.push("No high-risk areas were identified.".to_string());
            lines.push(String::new());
            return;
        }

        lines.push("## Risk Areas".to_string());
        lines.push(String::new());

        for section in &results.high_risk_areas {
            let Some(score) = results
                .section_scores
                .get(section)
                .and_then(SectionScore::score)
            else {
                continue;
            };

            let (risk_level, urgency) = Self::risk_wording(score);
            lines.push(format!("### {} - {:.1}%", section, score * 100.0));
            lines.push(format!("**Risk Level: {}**", risk_level));
            lines.push(format!("This area requires {}.", urgency));

            if let Some(advice) = results.recommendations.get(section) {
                if !advice.is_empty() {
                    lines.push("#### Key recommendations:".to_string());
                    for item in advice.iter().take(RISK_AREA_RECOMMENDATIONS) {
                        lines.push(format!("* {}", item));
                    }
                    if advice.len() > RISK_AREA_RECOMMENDATIONS {
                        lines.push(format!(
                            "* *And {} more recommendation(s).*",
                            advice.len() - RISK_AREA_RECOMMENDATIONS
                        ));
                    }
                }
            }
            lines.push(String::new());
        }
    }

    fn render_action_plan(results: &AssessmentResults, lines: &mut Vec<String>) {
        lines.push("## Action Plan".to_string());
        lines.push(String::new());

        let intro = if results.overall_score < 60.0 {
            "**Given the high-risk areas identified, we recommend the following priority actions:**"
        } else if results.overall_score < 75.0 {
            "**To improve your compliance posture, consider the following actions:**"
        } else {
            "**To maintain your strong compliance posture, consider the following actions:**"
        };
        lines.push(intro.to_string());
        lines.push(String::new());

        let mut scored: Vec<(&String, f64)> = results
            .section_scores
            .iter()
            .filter_map(|(name, section_score)| section_score.score().map(|score| (name, score)))
            .collect();
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut item = 0;
        for (section, _) in scored.into_iter().take(ACTION_PLAN_SECTIONS) {
            let Some(advice) = results.recommendations.get(section).filter(|a| !a.is_empty())
            else {
                continue;
            };
            item += 1;
            lines.push(format!(
                "{}. **Focus on improving {}** by implementing these actions:",
                item, section
            ));
            for (index, recommendation) in
                advice.iter().take(ACTION_PLAN_RECOMMENDATIONS).enumerate()
            {
                lines.push(format!("   {}. {}", index + 1, recommendation));
            }
            lines.push(String::new());
        }
    }

    fn risk_wording(score: f64) -> (&'static str, &'static str) {
        if score < 0.3 {
            ("Critical", "immediate remediation")
        } else if score < 0.5 {
            ("High", "urgent attention")
        } else if score < 0.6 {
            ("Elevated", "focused improvement")
        } else {
            ("Low", "continued monitoring")
        }
    }
}
