//! Fixed keyword tables and compiled patterns behind every classifier.
//!
//! All matching is lowercase substring containment against these tables, so the
//! analysis is deterministic: same transcript in, same record out. Tables are
//! ordered, and every scan walks them front to back.

use once_cell::sync::Lazy;
use regex::Regex;

/// Header that opens a conversation turn: `12:30 - Student: ...`.
/// The speaker label is case-insensitive; any other label is not a turn.
pub static TURN_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+:\d+)\s*-\s*(student|tutor)").expect("turn header pattern")
});

/// `Duration: 90 minutes` metadata line, matched anywhere in the transcript.
pub static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Duration:\s*(\d+)\s*minutes").expect("duration pattern"));

/// Case-sensitive marker for homework lines. Marker lines never join a turn.
pub const ACTION_ITEM_MARKER: &str = "ACTION ITEM:";

pub const MATHEMATICS_KEYWORDS: &[&str] = &[
    "math",
    "ratio",
    "median",
    "formula",
    "calculator",
    "equation",
    "algebra",
    "geometry",
];

pub const READING_KEYWORDS: &[&str] =
    &["reading", "comprehension", "kaplan", "passage", "section"];

pub const SCIENCE_KEYWORDS: &[&str] = &["physics", "chemistry", "biology", "force", "formula"];

pub const TEST_PREP_KEYWORDS: &[&str] = &["test", "exam", "preparation", "score", "practice"];

/// Mathematics keywords paired with the curriculum topic they signal.
pub const MATH_TOPIC_LABELS: &[(&str, &str)] = &[
    ("ratio", "Ratios and Proportions"),
    ("median", "Statistics and Data Analysis"),
    ("histogram", "Data Visualization"),
    ("formula", "Formula Application"),
    ("calculator", "Computational Skills"),
];

pub const UNDERSTANDING_KEYWORDS: &[&str] = &[
    "makes sense",
    "oh yeah",
    "i see",
    "got it",
    "understand",
    "that works",
];

// "understand" above also fires on "don't understand"; confusion is counted
// separately below, so such a turn lands in both tallies.
pub const CONFUSION_KEYWORDS: &[&str] =
    &["don't understand", "confused", "what", "huh", "wrong", "not working"];

pub const EFFORT_KEYWORDS: &[&str] = &["trying", "working on", "practicing", "studying", "i think"];

pub const CONFIDENCE_KEYWORDS: &[&str] = &["i know", "sure", "confident", "definitely", "right"];

pub const SCAFFOLDING_PHRASES: &[&str] =
    &["let me help", "step by step", "break it down", "think about it"];

pub const QUESTIONING_PHRASES: &[&str] =
    &["what do you think", "how would you", "why", "can you help"];

pub const FEEDBACK_PHRASES: &[&str] =
    &["good job", "well done", "that's right", "not quite", "correct"];

pub const ENCOURAGEMENT_PHRASES: &[&str] =
    &["you can do it", "keep trying", "almost there", "good"];

/// Tutor phrasing that marks a correction moment.
pub const ERROR_CORRECTION_PHRASES: &[&str] = &["think about it again", "try this", "let me explain"];

/// Tutor phrasing that marks a Socratic questioning moment.
pub const SOCRATIC_PHRASES: &[&str] = &["what do you think", "how would you", "why"];

pub const HEALTH_KEYWORDS: &[&str] = &["sick", "doctor", "steroids", "inhalers"];

pub const CONFIDENCE_BUILDING_PHRASES: &[&str] = &["makes sense", "got it", "understand"];

pub const SELF_DOUBT_PHRASES: &[&str] = &["don't know", "confused", "wrong"];

/// Per-turn academic-preparation marker keywords.
pub const PREPARATION_MARKER_KEYWORDS: &[&str] = &["practice", "study"];

// Action-item classification chains, checked front to back, first match wins.
pub const ACADEMIC_PREP_KEYWORDS: &[&str] = &["practice", "review", "study", "kaplan"];
pub const TEST_DAY_KEYWORDS: &[&str] = &["wake up", "leave", "time"];
pub const MATERIAL_ORG_KEYWORDS: &[&str] = &["charge", "lay out", "prepare"];
pub const CRITICAL_PRIORITY_KEYWORDS: &[&str] = &["test tomorrow", "wake up", "leave house"];
pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &["practice", "review"];
pub const ACADEMIC_KIND_KEYWORDS: &[&str] = &["practice", "review"];

/// True if any table entry occurs in `haystack`. Callers lowercase first.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Number of table entries present at least once. Repeats of one entry still
/// count as one; two different entries count as two.
pub fn count_present(haystack: &str, needles: &[&str]) -> usize {
    needles
        .iter()
        .filter(|needle| haystack.contains(*needle))
        .count()
}
