//! Learning-pattern tallies over student turns.

use serde::{Deserialize, Serialize};

use crate::patterns::{
    CONFIDENCE_KEYWORDS, CONFUSION_KEYWORDS, EFFORT_KEYWORDS, UNDERSTANDING_KEYWORDS,
};
use crate::transcript::{ConversationTurn, Speaker};

const CONTEXT_CLIP_CHARS: usize = 80;

/// The four indicator families tallied from student speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Understanding,
    Confusion,
    Effort,
    Confidence,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 4] = [
        IndicatorKind::Understanding,
        IndicatorKind::Confusion,
        IndicatorKind::Effort,
        IndicatorKind::Confidence,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            IndicatorKind::Understanding => UNDERSTANDING_KEYWORDS,
            IndicatorKind::Confusion => CONFUSION_KEYWORDS,
            IndicatorKind::Effort => EFFORT_KEYWORDS,
            IndicatorKind::Confidence => CONFIDENCE_KEYWORDS,
        }
    }
}

/// Per-family tallies. Each keyword present in a turn adds one, so a single
/// turn can contribute several counts to the same family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningIndicators {
    pub understanding_moments: usize,
    pub confusion_moments: usize,
    pub effort_indicators: usize,
    pub confidence_markers: usize,
}

impl LearningIndicators {
    fn bump(&mut self, kind: IndicatorKind) {
        match kind {
            IndicatorKind::Understanding => self.understanding_moments += 1,
            IndicatorKind::Confusion => self.confusion_moments += 1,
            IndicatorKind::Effort => self.effort_indicators += 1,
            IndicatorKind::Confidence => self.confidence_markers += 1,
        }
    }
}

/// One keyword hit with enough surrounding context for a summary to quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningMoment {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: IndicatorKind,
    /// Turn content clipped to 80 characters, with a trailing ellipsis when cut.
    pub context: String,
}

/// Coarse engagement bucket from average student words per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    High,
    Medium,
    Low,
}

impl EngagementLevel {
    /// Strict thresholds: an average of exactly 12 words is medium, exactly 6 is low.
    fn from_average_words(average: f64) -> Self {
        if average > 12.0 {
            EngagementLevel::High
        } else if average > 6.0 {
            EngagementLevel::Medium
        } else {
            EngagementLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EngagementLevel::High => "high",
            EngagementLevel::Medium => "medium",
            EngagementLevel::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPatterns {
    pub learning_indicators: LearningIndicators,
    /// Every keyword hit in student-turn order; one moment per hit, so a turn
    /// matching two confusion keywords yields two confusion moments.
    pub specific_moments: Vec<LearningMoment>,
    pub engagement_level: EngagementLevel,
    pub average_response_length: f64,
    pub total_student_responses: usize,
}

/// Tally indicator keywords across student turns and derive engagement.
pub fn analyze_learning_patterns(turns: &[ConversationTurn]) -> LearningPatterns {
    let student_turns: Vec<&ConversationTurn> = turns
        .iter()
        .filter(|turn| turn.speaker == Speaker::Student)
        .collect();

    let mut learning_indicators = LearningIndicators::default();
    let mut specific_moments = Vec::new();
    for turn in &student_turns {
        let lower = turn.content.to_lowercase();
        for kind in IndicatorKind::ALL {
            for keyword in kind.keywords() {
                if lower.contains(keyword) {
                    learning_indicators.bump(kind);
                    specific_moments.push(LearningMoment {
                        timestamp: turn.timestamp.clone(),
                        kind,
                        context: clip_context(&turn.content),
                    });
                }
            }
        }
    }

    let total_words: usize = student_turns.iter().map(|turn| turn.word_count).sum();
    let average_response_length = if student_turns.is_empty() {
        0.0
    } else {
        total_words as f64 / student_turns.len() as f64
    };

    LearningPatterns {
        learning_indicators,
        specific_moments,
        engagement_level: EngagementLevel::from_average_words(average_response_length),
        average_response_length,
        total_student_responses: student_turns.len(),
    }
}

// Char-based so multi-byte content never splits mid-character.
fn clip_context(content: &str) -> String {
    let mut chars = content.chars();
    let clipped: String = chars.by_ref().take(CONTEXT_CLIP_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", clipped)
    } else {
        clipped
    }
}
