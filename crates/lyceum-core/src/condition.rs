//! Best-effort read of the student's state from their own words.
//!
//! These are blunt heuristics over keyword tables, not an assessment. The
//! output is a starting point for a human summary, nothing more.

use serde::{Deserialize, Serialize};

use crate::learning::EngagementLevel;
use crate::patterns::{
    contains_any, CONFIDENCE_BUILDING_PHRASES, HEALTH_KEYWORDS, SELF_DOUBT_PHRASES,
};
use crate::transcript::{ConversationTurn, Speaker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Normal,
    RecentlyIllButAttending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Developing,
    Building,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentCondition {
    pub health_status: HealthStatus,
    /// Always `stable`; the heuristics have no negative-affect signal to draw on.
    pub emotional_state: String,
    /// Here engagement comes from the student turn count, not word averages.
    pub engagement_level: EngagementLevel,
    pub confidence_level: ConfidenceLevel,
    pub stress_indicators: Vec<String>,
    /// Set only when a health mention coincides with a workout mention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resilience_level: Option<String>,
}

/// Derive the condition heuristics from student turns.
pub fn assess_student_condition(turns: &[ConversationTurn]) -> StudentCondition {
    let student_turns: Vec<&ConversationTurn> = turns
        .iter()
        .filter(|turn| turn.speaker == Speaker::Student)
        .collect();
    let student_content = student_turns
        .iter()
        .map(|turn| turn.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let health_status = if contains_any(&student_content, HEALTH_KEYWORDS) {
        HealthStatus::RecentlyIllButAttending
    } else {
        HealthStatus::Normal
    };

    let engagement_level = if student_turns.len() > 25 {
        EngagementLevel::High
    } else if student_turns.len() > 15 {
        EngagementLevel::Medium
    } else {
        EngagementLevel::Low
    };

    let confidence_level = if contains_any(&student_content, CONFIDENCE_BUILDING_PHRASES) {
        ConfidenceLevel::Building
    } else {
        ConfidenceLevel::Developing
    };

    let mut stress_indicators = Vec::new();
    if contains_any(&student_content, SELF_DOUBT_PHRASES) {
        stress_indicators.push("self_doubt".to_string());
    }

    let resilience_level = if health_status == HealthStatus::RecentlyIllButAttending
        && student_content.contains("workout")
    {
        Some("high".to_string())
    } else {
        None
    };

    StudentCondition {
        health_status,
        emotional_state: "stable".to_string(),
        engagement_level,
        confidence_level,
        stress_indicators,
        resilience_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::parse_turns;

    fn student_lines(n: usize, text: &str) -> Vec<ConversationTurn> {
        let raw: String = (0..n)
            .map(|i| format!("{}:{:02} - Student: {}\n\n", i / 60, i % 60, text))
            .collect();
        parse_turns(&raw)
    }

    #[test]
    fn health_mentions_flag_recently_ill() {
        let turns = parse_turns("0:00 - Student: the doctor said I can attend");
        let condition = assess_student_condition(&turns);
        assert_eq!(condition.health_status, HealthStatus::RecentlyIllButAttending);
    }

    #[test]
    fn tutor_health_talk_does_not_count() {
        let turns = parse_turns("0:00 - Tutor: hope you're not sick");
        let condition = assess_student_condition(&turns);
        assert_eq!(condition.health_status, HealthStatus::Normal);
    }

    #[test]
    fn engagement_buckets_follow_turn_count() {
        assert_eq!(
            assess_student_condition(&student_lines(26, "ok")).engagement_level,
            EngagementLevel::High
        );
        assert_eq!(
            assess_student_condition(&student_lines(16, "ok")).engagement_level,
            EngagementLevel::Medium
        );
        assert_eq!(
            assess_student_condition(&student_lines(15, "ok")).engagement_level,
            EngagementLevel::Low
        );
    }

    #[test]
    fn confidence_builds_only_on_building_phrases() {
        let turns = parse_turns("0:00 - Student: that makes sense");
        assert_eq!(
            assess_student_condition(&turns).confidence_level,
            ConfidenceLevel::Building
        );
        let turns = parse_turns("0:00 - Student: maybe later");
        assert_eq!(
            assess_student_condition(&turns).confidence_level,
            ConfidenceLevel::Developing
        );
    }

    #[test]
    fn self_doubt_is_the_only_stress_indicator() {
        let turns = parse_turns("0:00 - Student: I don't know, it's all wrong");
        let condition = assess_student_condition(&turns);
        assert_eq!(condition.stress_indicators, vec!["self_doubt".to_string()]);
    }

    #[test]
    fn resilience_requires_health_flag_and_workout() {
        let turns = parse_turns("0:00 - Student: after my workout I saw the doctor");
        assert_eq!(
            assess_student_condition(&turns).resilience_level.as_deref(),
            Some("high")
        );
        let turns = parse_turns("0:00 - Student: after my workout I felt great");
        assert_eq!(assess_student_condition(&turns).resilience_level, None);
    }

    #[test]
    fn empty_input_gives_stable_baseline() {
        let condition = assess_student_condition(&[]);
        assert_eq!(condition.health_status, HealthStatus::Normal);
        assert_eq!(condition.emotional_state, "stable");
        assert_eq!(condition.engagement_level, EngagementLevel::Low);
        assert_eq!(condition.confidence_level, ConfidenceLevel::Developing);
        assert!(condition.stress_indicators.is_empty());
        assert_eq!(condition.resilience_level, None);
    }
}
