//! Session-level metadata: independent trigger scans over the whole transcript.

use serde::{Deserialize, Serialize};

use crate::patterns::{ACTION_ITEM_MARKER, DURATION_RE};

const TEST_PREP_TRIGGER: &str = "test preparation";
const DAY_BEFORE_TRIGGER: &str = "day before test";

/// Facts about the session as a whole. Each optional field is set only when
/// its trigger phrase fired; `action_items_count` is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_level: Option<String>,
    #[serde(default)]
    pub action_items_count: usize,
}

/// Scan the raw transcript for session metadata. Each check is independent;
/// none of them can fail, they just leave their field unset.
pub fn extract_session_metadata(text: &str) -> SessionMetadata {
    let lower = text.to_lowercase();
    let mut meta = SessionMetadata::default();

    if let Some(caps) = DURATION_RE.captures(text) {
        meta.duration_minutes = caps[1].parse().ok();
    }
    if lower.contains(TEST_PREP_TRIGGER) {
        meta.session_type = Some("Test Preparation".to_string());
        meta.urgency_level = Some("High".to_string());
    }
    if lower.contains(DAY_BEFORE_TRIGGER) {
        meta.timing_context = Some("Final preparation session".to_string());
        meta.pressure_level = Some("High".to_string());
    }
    // The marker count is case-sensitive, same as extraction.
    meta.action_items_count = text.matches(ACTION_ITEM_MARKER).count();
    meta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_parses_from_anywhere_in_text() {
        let meta = extract_session_metadata("preamble\nduration: 63 Minutes\nmore");
        assert_eq!(meta.duration_minutes, Some(63));
    }

    #[test]
    fn trigger_phrases_set_paired_fields() {
        let meta = extract_session_metadata("This is Test Preparation, the day before test.");
        assert_eq!(meta.session_type.as_deref(), Some("Test Preparation"));
        assert_eq!(meta.urgency_level.as_deref(), Some("High"));
        assert_eq!(meta.timing_context.as_deref(), Some("Final preparation session"));
        assert_eq!(meta.pressure_level.as_deref(), Some("High"));
    }

    #[test]
    fn marker_count_is_case_sensitive() {
        let meta = extract_session_metadata("ACTION ITEM: a\naction item: b\nACTION ITEM: c");
        assert_eq!(meta.action_items_count, 2);
    }

    #[test]
    fn empty_input_yields_defaults_only() {
        let meta = extract_session_metadata("");
        assert_eq!(meta, SessionMetadata::default());
        assert_eq!(meta.action_items_count, 0);
    }

    #[test]
    fn unset_fields_do_not_serialize() {
        let json = serde_json::to_string(&extract_session_metadata("")).unwrap();
        assert_eq!(json, r#"{"action_items_count":0}"#);
    }

    #[test]
    fn oversized_duration_is_left_unset() {
        let meta = extract_session_metadata("Duration: 99999999999999999999 minutes");
        assert_eq!(meta.duration_minutes, None);
    }
}
