//! Coarse academic-performance signals over the whole conversation.

use serde::{Deserialize, Serialize};

use crate::transcript::ConversationTurn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceIndicators {
    pub error_patterns: Vec<String>,
    pub strength_areas: Vec<String>,
    pub improvement_opportunities: Vec<String>,
    /// Always `developing`; the heuristics never claim more than that.
    pub conceptual_understanding: String,
}

/// Scan the joined conversation, both speakers, for fixed performance signals.
/// Each signal fires at most once regardless of how often it occurs.
pub fn analyze_academic_performance(turns: &[ConversationTurn]) -> PerformanceIndicators {
    let all_content = turns
        .iter()
        .map(|turn| turn.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut error_patterns = Vec::new();
    if all_content.contains("calculator") && all_content.contains("wrong") {
        error_patterns.push("Calculator input errors".to_string());
    }
    if all_content.contains("time") && all_content.contains("running out") {
        error_patterns.push("Time management challenges".to_string());
    }

    let mut strength_areas = Vec::new();
    if all_content.contains("well done") {
        strength_areas.push("Problem-solving accuracy".to_string());
    }
    if all_content.contains("makes sense") {
        strength_areas.push("Conceptual understanding".to_string());
    }

    let mut improvement_opportunities = Vec::new();
    if !error_patterns.is_empty() {
        improvement_opportunities.push("Strategic execution refinement".to_string());
    }

    PerformanceIndicators {
        error_patterns,
        strength_areas,
        improvement_opportunities,
        conceptual_understanding: "developing".to_string(),
    }
}
