//! Subject detection: which subjects the session touched and how heavily.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patterns::{
    count_present, MATHEMATICS_KEYWORDS, MATH_TOPIC_LABELS, READING_KEYWORDS, SCIENCE_KEYWORDS,
    TEST_PREP_KEYWORDS,
};

/// Subject buckets recognized by the keyword tables. The derived `Ord` follows
/// declaration order, which is also lexical, so primary-focus ties resolve to
/// the lexically smallest subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Mathematics,
    Reading,
    Science,
    TestPrep,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Mathematics,
        Subject::Reading,
        Subject::Science,
        Subject::TestPrep,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Subject::Mathematics => MATHEMATICS_KEYWORDS,
            Subject::Reading => READING_KEYWORDS,
            Subject::Science => SCIENCE_KEYWORDS,
            Subject::TestPrep => TEST_PREP_KEYWORDS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Reading => "reading",
            Subject::Science => "science",
            Subject::TestPrep => "test_prep",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How heavily a subject featured, from its distinct-keyword count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prominence {
    High,
    Medium,
    Low,
}

impl Prominence {
    /// Strict thresholds: more than 5 distinct keywords is high, more than 2
    /// is medium, anything else is low.
    fn from_matches(matches: usize) -> Self {
        if matches > 5 {
            Prominence::High
        } else if matches > 2 {
            Prominence::Medium
        } else {
            Prominence::Low
        }
    }
}

/// Match count and prominence for one detected subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDetail {
    pub keyword_matches: usize,
    pub prominence: Prominence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAnalysis {
    /// Detected subjects in lexical order, mirroring `subject_details` keys.
    pub subjects_identified: Vec<Subject>,
    pub subject_details: BTreeMap<Subject, SubjectDetail>,
    /// Curriculum topics inferred from mathematics keywords; empty unless
    /// mathematics was detected at all.
    pub mathematics_topics: Vec<String>,
    /// Subject with the highest match count. Ties go to the lexically
    /// smallest subject; `None` when nothing matched.
    pub primary_focus: Option<Subject>,
}

/// Count distinct keyword hits per subject across the whole transcript.
/// A keyword repeated fifty times still counts once.
pub fn analyze_subjects(text: &str) -> SubjectAnalysis {
    let lower = text.to_lowercase();

    let mut subject_details = BTreeMap::new();
    for subject in Subject::ALL {
        let matches = count_present(&lower, subject.keywords());
        if matches > 0 {
            subject_details.insert(
                subject,
                SubjectDetail {
                    keyword_matches: matches,
                    prominence: Prominence::from_matches(matches),
                },
            );
        }
    }

    let mut primary_focus = None;
    let mut best = 0;
    for (subject, detail) in &subject_details {
        if detail.keyword_matches > best {
            best = detail.keyword_matches;
            primary_focus = Some(*subject);
        }
    }

    let mathematics_topics = if subject_details.contains_key(&Subject::Mathematics) {
        MATH_TOPIC_LABELS
            .iter()
            .filter(|(keyword, _)| lower.contains(keyword))
            .map(|(_, topic)| (*topic).to_string())
            .collect()
    } else {
        Vec::new()
    };

    SubjectAnalysis {
        subjects_identified: subject_details.keys().copied().collect(),
        subject_details,
        mathematics_topics,
        primary_focus,
    }
}
