//! Whole-transcript analysis: one call builds the complete record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::{extract_action_items, ActionItem};
use crate::condition::{assess_student_condition, StudentCondition};
use crate::insights::{generate_educational_insights, EducationalInsights};
use crate::learning::{analyze_learning_patterns, LearningPatterns};
use crate::metadata::{extract_session_metadata, SessionMetadata};
use crate::performance::{analyze_academic_performance, PerformanceIndicators};
use crate::subjects::{analyze_subjects, SubjectAnalysis};
use crate::teaching::{analyze_teaching_strategies, TeachingStrategies};
use crate::transcript::{parse_turns, ConversationTurn};

/// The complete analysis record. Built from scratch on every call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptAnalysis {
    pub session_metadata: SessionMetadata,
    pub subjects: SubjectAnalysis,
    pub learning_patterns: LearningPatterns,
    pub teaching_strategies: TeachingStrategies,
    pub student_condition: StudentCondition,
    pub action_items: Vec<ActionItem>,
    pub performance_indicators: PerformanceIndicators,
    pub educational_insights: EducationalInsights,
    pub conversation_turns: Vec<ConversationTurn>,
}

/// Analyze a raw transcript. Pure in its input: no I/O, no hidden state, and
/// it returns for any string, however malformed.
pub fn analyze_transcript(text: &str) -> TranscriptAnalysis {
    let conversation_turns = parse_turns(text);
    debug!("parsed {} conversation turns", conversation_turns.len());

    let session_metadata = extract_session_metadata(text);
    let subjects = analyze_subjects(text);
    let learning_patterns = analyze_learning_patterns(&conversation_turns);
    let teaching_strategies = analyze_teaching_strategies(&conversation_turns);
    let student_condition = assess_student_condition(&conversation_turns);
    let action_items = extract_action_items(text);
    let performance_indicators = analyze_academic_performance(&conversation_turns);
    let educational_insights =
        generate_educational_insights(&subjects, &learning_patterns, &student_condition);

    debug!(
        "analysis complete: {} subjects, {} action items, {} teaching moments",
        subjects.subjects_identified.len(),
        action_items.len(),
        teaching_strategies.teaching_moments.len()
    );

    TranscriptAnalysis {
        session_metadata,
        subjects,
        learning_patterns,
        teaching_strategies,
        student_condition,
        action_items,
        performance_indicators,
        educational_insights,
        conversation_turns,
    }
}
