//! Rule-chained qualitative insights layered over the classifier outputs.

use serde::{Deserialize, Serialize};

use crate::condition::{ConfidenceLevel, HealthStatus, StudentCondition};
use crate::learning::{EngagementLevel, LearningPatterns};
use crate::subjects::{Subject, SubjectAnalysis};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationalInsights {
    /// `high` when understanding outweighed confusion, otherwise `positive`.
    pub session_effectiveness: String,
    /// `positive` when engagement and confidence both held up, otherwise `upward`.
    pub learning_trajectory: String,
    pub key_themes: Vec<String>,
    pub pedagogical_recommendations: Vec<String>,
}

/// Derive the insight labels. Each rule is independent and can only improve
/// on the baseline labels, never remove them.
pub fn generate_educational_insights(
    subjects: &SubjectAnalysis,
    learning: &LearningPatterns,
    condition: &StudentCondition,
) -> EducationalInsights {
    let mut insights = EducationalInsights {
        session_effectiveness: "positive".to_string(),
        learning_trajectory: "upward".to_string(),
        key_themes: Vec::new(),
        pedagogical_recommendations: Vec::new(),
    };

    let indicators = &learning.learning_indicators;
    if indicators.understanding_moments > indicators.confusion_moments {
        insights.session_effectiveness = "high".to_string();
        insights.key_themes.push("Strong conceptual progress".to_string());
    }

    let engaged = matches!(
        condition.engagement_level,
        EngagementLevel::High | EngagementLevel::Medium
    );
    if engaged && condition.confidence_level == ConfidenceLevel::Building {
        insights.learning_trajectory = "positive".to_string();
    }

    if subjects.primary_focus == Some(Subject::Mathematics) {
        insights
            .pedagogical_recommendations
            .push("Continue systematic mathematical problem-solving approach".to_string());
    }
    if condition.health_status == HealthStatus::RecentlyIllButAttending {
        insights
            .pedagogical_recommendations
            .push("Acknowledge resilience and maintain confidence building".to_string());
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_transcript;

    #[test]
    fn baseline_labels_for_empty_session() {
        let analysis = analyze_transcript("");
        let insights = &analysis.educational_insights;
        assert_eq!(insights.session_effectiveness, "positive");
        assert_eq!(insights.learning_trajectory, "upward");
        assert!(insights.key_themes.is_empty());
        assert!(insights.pedagogical_recommendations.is_empty());
    }

    #[test]
    fn understanding_over_confusion_raises_effectiveness() {
        let analysis = analyze_transcript("0:00 - Student: oh yeah, got it, that makes sense");
        let insights = &analysis.educational_insights;
        assert_eq!(insights.session_effectiveness, "high");
        assert_eq!(insights.key_themes, vec!["Strong conceptual progress".to_string()]);
    }

    #[test]
    fn equal_counts_leave_effectiveness_positive() {
        // "confused" and "got it" cancel out at one each.
        let analysis = analyze_transcript("0:00 - Student: confused at first but got it");
        assert_eq!(
            analysis.educational_insights.session_effectiveness,
            "positive"
        );
    }

    #[test]
    fn mathematics_focus_adds_recommendation() {
        let analysis = analyze_transcript("0:00 - Tutor: algebra and geometry today");
        assert_eq!(
            analysis.educational_insights.pedagogical_recommendations,
            vec!["Continue systematic mathematical problem-solving approach".to_string()]
        );
    }

    #[test]
    fn health_flag_adds_resilience_recommendation() {
        let analysis = analyze_transcript("0:00 - Student: I was sick but I'm here");
        assert!(analysis
            .educational_insights
            .pedagogical_recommendations
            .contains(&"Acknowledge resilience and maintain confidence building".to_string()));
    }
}
