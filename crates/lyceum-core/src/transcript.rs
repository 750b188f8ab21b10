//! Turn parsing: speaker-tagged transcript lines into ordered conversation turns.

use serde::{Deserialize, Serialize};

use crate::patterns::{
    contains_any, ACTION_ITEM_MARKER, CONFUSION_KEYWORDS, PREPARATION_MARKER_KEYWORDS,
    TURN_HEADER_RE, UNDERSTANDING_KEYWORDS,
};

/// Who said a turn. Only these two labels are recognized in headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Student,
    Tutor,
}

impl Speaker {
    fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("student") {
            Some(Speaker::Student)
        } else if label.eq_ignore_ascii_case("tutor") {
            Some(Speaker::Tutor)
        } else {
            None
        }
    }
}

/// Coarse per-turn signal attached during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationalMarker {
    Comprehension,
    Confusion,
    AcademicPreparation,
}

/// One utterance, in transcript order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Timestamp exactly as written in the header, e.g. `12:30`.
    pub timestamp: String,
    pub speaker: Speaker,
    pub content: String,
    /// Whitespace-separated token count of `content`.
    pub word_count: usize,
    pub educational_markers: Vec<EducationalMarker>,
}

struct OpenTurn {
    timestamp: String,
    speaker: Speaker,
    content: String,
}

impl OpenTurn {
    fn append(&mut self, line: &str) {
        if !self.content.is_empty() {
            self.content.push(' ');
        }
        self.content.push_str(line);
    }

    fn finish(self) -> ConversationTurn {
        let content = self.content.trim().to_string();
        ConversationTurn {
            word_count: content.split_whitespace().count(),
            educational_markers: markers_for(&content),
            timestamp: self.timestamp,
            speaker: self.speaker,
            content,
        }
    }
}

/// Parse every recognized turn out of a transcript, preserving order.
///
/// A header line (`MM:SS - speaker`) opens a turn with whatever follows the
/// speaker label on the same line. Later non-empty lines are appended to the
/// open turn, joined with single spaces, until a blank line, the next header,
/// or an `ACTION ITEM:` line closes it. Lines outside any open turn are
/// dropped. Malformed input never fails; it just yields fewer turns.
pub fn parse_turns(text: &str) -> Vec<ConversationTurn> {
    let mut turns = Vec::new();
    let mut open: Option<OpenTurn> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            close(&mut open, &mut turns);
            continue;
        }
        if line.contains(ACTION_ITEM_MARKER) {
            close(&mut open, &mut turns);
            continue;
        }
        if let Some(caps) = TURN_HEADER_RE.captures(line) {
            close(&mut open, &mut turns);
            let speaker_match = match caps.get(2) {
                Some(m) => m,
                None => continue,
            };
            let speaker = match Speaker::from_label(speaker_match.as_str()) {
                Some(s) => s,
                None => continue,
            };
            // Content starts after the speaker label; a separating dash or
            // colon is not part of it.
            let rest = line[speaker_match.end()..]
                .trim_start()
                .trim_start_matches(['-', ':'])
                .trim();
            open = Some(OpenTurn {
                timestamp: caps[1].to_string(),
                speaker,
                content: rest.to_string(),
            });
            continue;
        }
        if let Some(turn) = open.as_mut() {
            turn.append(line);
        }
    }
    close(&mut open, &mut turns);
    turns
}

fn close(open: &mut Option<OpenTurn>, turns: &mut Vec<ConversationTurn>) {
    if let Some(turn) = open.take() {
        turns.push(turn.finish());
    }
}

// The understanding table contains "understand", so a turn like "I don't
// understand" carries both markers. The counts downstream keep them separate.
fn markers_for(content: &str) -> Vec<EducationalMarker> {
    let lower = content.to_lowercase();
    let mut markers = Vec::new();
    if contains_any(&lower, UNDERSTANDING_KEYWORDS) {
        markers.push(EducationalMarker::Comprehension);
    }
    if contains_any(&lower, CONFUSION_KEYWORDS) {
        markers.push(EducationalMarker::Confusion);
    }
    if contains_any(&lower, PREPARATION_MARKER_KEYWORDS) {
        markers.push(EducationalMarker::AcademicPreparation);
    }
    markers
}
