//! Tutor-side strategy tallies and notable teaching moments.

use serde::{Deserialize, Serialize};

use crate::patterns::{
    contains_any, count_present, ENCOURAGEMENT_PHRASES, ERROR_CORRECTION_PHRASES, FEEDBACK_PHRASES,
    QUESTIONING_PHRASES, SCAFFOLDING_PHRASES, SOCRATIC_PHRASES,
};
use crate::transcript::{ConversationTurn, Speaker};

/// Per-strategy phrase tallies. Each phrase present in a tutor turn adds one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyUsage {
    pub scaffolding: usize,
    pub questioning: usize,
    pub feedback: usize,
    pub encouragement: usize,
}

impl StrategyUsage {
    // Lexical order, so the dominant pick below breaks ties toward the
    // lexically smallest strategy name.
    fn as_pairs(self) -> [(&'static str, usize); 4] {
        [
            ("encouragement", self.encouragement),
            ("feedback", self.feedback),
            ("questioning", self.questioning),
            ("scaffolding", self.scaffolding),
        ]
    }

    /// Strategy with the highest count, or `balanced` when nothing was used.
    pub fn dominant(self) -> &'static str {
        let mut name = "balanced";
        let mut best = 0;
        for (candidate, count) in self.as_pairs() {
            if count > best {
                best = count;
                name = candidate;
            }
        }
        name
    }
}

/// A tutor utterance that matched a recognized pedagogical pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachingMoment {
    pub timestamp: String,
    pub strategy: String,
    pub approach: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachingStrategies {
    pub strategy_distribution: StrategyUsage,
    pub teaching_moments: Vec<TeachingMoment>,
    pub dominant_approach: String,
    pub total_teaching_interventions: usize,
}

/// Tally strategy phrases across tutor turns and collect correction and
/// Socratic moments. A tutor turn can yield both moment kinds at once.
pub fn analyze_teaching_strategies(turns: &[ConversationTurn]) -> TeachingStrategies {
    let mut usage = StrategyUsage::default();
    let mut teaching_moments = Vec::new();

    for turn in turns.iter().filter(|t| t.speaker == Speaker::Tutor) {
        let lower = turn.content.to_lowercase();
        usage.scaffolding += count_present(&lower, SCAFFOLDING_PHRASES);
        usage.questioning += count_present(&lower, QUESTIONING_PHRASES);
        usage.feedback += count_present(&lower, FEEDBACK_PHRASES);
        usage.encouragement += count_present(&lower, ENCOURAGEMENT_PHRASES);

        if contains_any(&lower, ERROR_CORRECTION_PHRASES) {
            teaching_moments.push(TeachingMoment {
                timestamp: turn.timestamp.clone(),
                strategy: "Error Correction".to_string(),
                approach: "Guided redirection".to_string(),
            });
        }
        if contains_any(&lower, SOCRATIC_PHRASES) {
            teaching_moments.push(TeachingMoment {
                timestamp: turn.timestamp.clone(),
                strategy: "Socratic Questioning".to_string(),
                approach: "Concept exploration".to_string(),
            });
        }
    }

    let dominant_approach = usage.dominant().to_string();
    let total_teaching_interventions = teaching_moments.len();
    TeachingStrategies {
        strategy_distribution: usage,
        teaching_moments,
        dominant_approach,
        total_teaching_interventions,
    }
}
