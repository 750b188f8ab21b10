//! Action-item extraction and classification.
//!
//! One item per line carrying the literal `ACTION ITEM:` marker. Category,
//! priority, and kind are each a fixed keyword chain over the description
//! where the first matching rule wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patterns::{
    contains_any, ACADEMIC_KIND_KEYWORDS, ACADEMIC_PREP_KEYWORDS, ACTION_ITEM_MARKER,
    CRITICAL_PRIORITY_KEYWORDS, HIGH_PRIORITY_KEYWORDS, MATERIAL_ORG_KEYWORDS, TEST_DAY_KEYWORDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCategory {
    #[serde(rename = "Academic Preparation")]
    AcademicPreparation,
    #[serde(rename = "Test Day Logistics")]
    TestDayLogistics,
    #[serde(rename = "Material Organization")]
    MaterialOrganization,
    #[serde(rename = "General Support")]
    GeneralSupport,
}

impl ActionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionCategory::AcademicPreparation => "Academic Preparation",
            ActionCategory::TestDayLogistics => "Test Day Logistics",
            ActionCategory::MaterialOrganization => "Material Organization",
            ActionCategory::GeneralSupport => "General Support",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionPriority {
    Critical,
    High,
    Medium,
}

impl ActionPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionPriority::Critical => "Critical",
            ActionPriority::High => "High",
            ActionPriority::Medium => "Medium",
        }
    }
}

impl fmt::Display for ActionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Academic,
    Logistical,
}

/// A follow-up task extracted verbatim from a marker line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub description: String,
    pub category: ActionCategory,
    pub priority: ActionPriority,
    #[serde(rename = "type")]
    pub kind: ActionKind,
}

/// Extract one item per marker line, in transcript order. The marker match
/// is case-sensitive.
pub fn extract_action_items(text: &str) -> Vec<ActionItem> {
    text.lines()
        .filter(|line| line.contains(ACTION_ITEM_MARKER))
        .map(|line| {
            // Text between the first marker and the next, trimmed. A second
            // marker on one line is treated as description text.
            let description = line
                .split(ACTION_ITEM_MARKER)
                .nth(1)
                .unwrap_or("")
                .trim()
                .to_string();
            let category = categorize_action(&description);
            let priority = action_priority(&description);
            let kind = action_kind(&description);
            ActionItem {
                description,
                category,
                priority,
                kind,
            }
        })
        .collect()
}

/// First matching chain link wins; anything unmatched is general support.
pub fn categorize_action(description: &str) -> ActionCategory {
    let lower = description.to_lowercase();
    if contains_any(&lower, ACADEMIC_PREP_KEYWORDS) {
        ActionCategory::AcademicPreparation
    } else if contains_any(&lower, TEST_DAY_KEYWORDS) {
        ActionCategory::TestDayLogistics
    } else if contains_any(&lower, MATERIAL_ORG_KEYWORDS) {
        ActionCategory::MaterialOrganization
    } else {
        ActionCategory::GeneralSupport
    }
}

/// First matching chain link wins; the floor is medium, never low.
pub fn action_priority(description: &str) -> ActionPriority {
    let lower = description.to_lowercase();
    if contains_any(&lower, CRITICAL_PRIORITY_KEYWORDS) {
        ActionPriority::Critical
    } else if contains_any(&lower, HIGH_PRIORITY_KEYWORDS) {
        ActionPriority::High
    } else {
        ActionPriority::Medium
    }
}

fn action_kind(description: &str) -> ActionKind {
    if contains_any(&description.to_lowercase(), ACADEMIC_KIND_KEYWORDS) {
        ActionKind::Academic
    } else {
        ActionKind::Logistical
    }
}
