//! lyceum-core: tutoring-session transcript analyzer.
//!
//! Everything here is deterministic keyword work over raw transcript text.
//! [`analyze_transcript`] is pure in its input: no I/O, no hidden state, no
//! failure mode. Byte-identical input yields byte-identical output, so the
//! record can be serialized and diffed across runs.

mod actions;
mod analyzer;
mod condition;
mod insights;
mod learning;
mod metadata;
mod patterns;
mod performance;
mod subjects;
mod teaching;
mod transcript;

// Turn parsing
pub use transcript::{parse_turns, ConversationTurn, EducationalMarker, Speaker};

// Session metadata scans
pub use metadata::{extract_session_metadata, SessionMetadata};

// Subject detection
pub use subjects::{analyze_subjects, Prominence, Subject, SubjectAnalysis, SubjectDetail};

// Student-side learning patterns
pub use learning::{
    analyze_learning_patterns, EngagementLevel, IndicatorKind, LearningIndicators, LearningMoment,
    LearningPatterns,
};

// Tutor-side strategies
pub use teaching::{analyze_teaching_strategies, StrategyUsage, TeachingMoment, TeachingStrategies};

// Condition heuristics
pub use condition::{assess_student_condition, ConfidenceLevel, HealthStatus, StudentCondition};

// Action items (extraction + the pure classification chains)
pub use actions::{
    action_priority, categorize_action, extract_action_items, ActionCategory, ActionItem,
    ActionKind, ActionPriority,
};

// Performance signals + derived insights
pub use insights::{generate_educational_insights, EducationalInsights};
pub use performance::{analyze_academic_performance, PerformanceIndicators};

// The whole record in one call
pub use analyzer::{analyze_transcript, TranscriptAnalysis};
