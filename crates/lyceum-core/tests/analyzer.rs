//! Integration test: whole-transcript analysis over a realistic session log.
//!
//! ## Scenarios
//! 1. A full test-prep session: metadata, subjects, learning/teaching tallies,
//!    condition heuristics, action items, performance, and insights all at once.
//! 2. The minimal two-turn session with one action item.
//! 3. Empty and hostile inputs never fail.
//! 4. Serialization schema: `subjects.subjects_identified` and top-level
//!    `action_items` are the stable key paths consumers rely on.
//! 5. Idempotence: identical input, byte-identical serialized output.

use lyceum_core::{
    analyze_transcript, ActionCategory, ActionKind, ActionPriority, ConfidenceLevel,
    EducationalMarker, EngagementLevel, HealthStatus, Prominence, Speaker, Subject,
};

const SESSION: &str = "\
SAT Math Tutoring Session
Duration: 63 minutes
Context: test preparation, the day before test.

6:02 - Tutor: Good evening! Ready to practice? Let me help with the ratio problems first.
6:04 - Student: I think so. I was sick this week and the doctor gave me steroids, but I still got my workout in.
6:06 - Tutor: Glad you're here. Think about it: if the ratio is 3 to 4, what do you think the total parts are?
6:08 - Student: Seven? Oh yeah, that makes sense now.
6:10 - Tutor: Well done. Now try this median problem with your calculator.
6:12 - Student: My calculator keeps giving the wrong answer, I don't know why.
6:14 - Tutor: Not quite. Think about it again, step by step.
6:16 - Student: Got it. The median is 12.
6:18 - Tutor: That's right! Good job.

ACTION ITEM: Practice two Kaplan math sections tonight
ACTION ITEM: Charge the calculator and lay out materials
ACTION ITEM: Wake up by 6:30, leave house by 7:15
";

// ---------------------------------------------------------------------------
// Scenario 1: the full session
// ---------------------------------------------------------------------------

#[test]
fn full_session_metadata() {
    let analysis = analyze_transcript(SESSION);
    let meta = &analysis.session_metadata;
    assert_eq!(meta.duration_minutes, Some(63));
    assert_eq!(meta.session_type.as_deref(), Some("Test Preparation"));
    assert_eq!(meta.urgency_level.as_deref(), Some("High"));
    assert_eq!(meta.timing_context.as_deref(), Some("Final preparation session"));
    assert_eq!(meta.pressure_level.as_deref(), Some("High"));
    assert_eq!(meta.action_items_count, 3);
}

#[test]
fn full_session_turns_preserve_order() {
    let analysis = analyze_transcript(SESSION);
    let turns = &analysis.conversation_turns;
    assert_eq!(turns.len(), 9, "five tutor and four student turns");

    let timestamps: Vec<&str> = turns.iter().map(|t| t.timestamp.as_str()).collect();
    assert_eq!(
        timestamps,
        vec!["6:02", "6:04", "6:06", "6:08", "6:10", "6:12", "6:14", "6:16", "6:18"]
    );
    assert_eq!(turns[0].speaker, Speaker::Tutor);
    assert_eq!(turns[1].speaker, Speaker::Student);
}

#[test]
fn full_session_subjects() {
    let analysis = analyze_transcript(SESSION);
    let subjects = &analysis.subjects;

    assert_eq!(
        subjects.subjects_identified,
        vec![Subject::Mathematics, Subject::Reading, Subject::TestPrep]
    );

    // math, ratio, median, calculator
    let math = &subjects.subject_details[&Subject::Mathematics];
    assert_eq!(math.keyword_matches, 4);
    assert_eq!(math.prominence, Prominence::Medium);

    // kaplan, section
    let reading = &subjects.subject_details[&Subject::Reading];
    assert_eq!(reading.keyword_matches, 2);
    assert_eq!(reading.prominence, Prominence::Low);

    // test, preparation, practice
    let prep = &subjects.subject_details[&Subject::TestPrep];
    assert_eq!(prep.keyword_matches, 3);

    assert_eq!(subjects.primary_focus, Some(Subject::Mathematics));
    assert_eq!(
        subjects.mathematics_topics,
        vec![
            "Ratios and Proportions",
            "Statistics and Data Analysis",
            "Computational Skills",
        ]
    );
}

#[test]
fn full_session_learning_patterns() {
    let analysis = analyze_transcript(SESSION);
    let learning = &analysis.learning_patterns;
    let indicators = &learning.learning_indicators;

    // "oh yeah" + "makes sense" at 6:08, "got it" at 6:16
    assert_eq!(indicators.understanding_moments, 3);
    // "wrong" at 6:12
    assert_eq!(indicators.confusion_moments, 1);
    // "i think" at 6:04
    assert_eq!(indicators.effort_indicators, 1);
    assert_eq!(indicators.confidence_markers, 0);
    assert_eq!(learning.specific_moments.len(), 5);

    assert_eq!(learning.total_student_responses, 4);
    // 21 + 7 + 11 + 6 student words over 4 turns
    assert_eq!(learning.average_response_length, 11.25);
    assert_eq!(learning.engagement_level, EngagementLevel::Medium);
}

#[test]
fn full_session_teaching_strategies() {
    let analysis = analyze_transcript(SESSION);
    let teaching = &analysis.teaching_strategies;
    let usage = &teaching.strategy_distribution;

    assert_eq!(usage.scaffolding, 4);
    assert_eq!(usage.questioning, 1);
    assert_eq!(usage.feedback, 4);
    // "good" matches inside "Good evening" and "Good job"
    assert_eq!(usage.encouragement, 2);

    // Scaffolding and feedback tie at four; lexical order decides.
    assert_eq!(teaching.dominant_approach, "feedback");

    let kinds: Vec<(&str, &str)> = teaching
        .teaching_moments
        .iter()
        .map(|m| (m.timestamp.as_str(), m.strategy.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("6:06", "Socratic Questioning"),
            ("6:10", "Error Correction"),
            ("6:14", "Error Correction"),
        ]
    );
    assert_eq!(teaching.total_teaching_interventions, 3);
}

#[test]
fn full_session_student_condition() {
    let analysis = analyze_transcript(SESSION);
    let condition = &analysis.student_condition;

    assert_eq!(condition.health_status, HealthStatus::RecentlyIllButAttending);
    assert_eq!(condition.emotional_state, "stable");
    // Four student turns is well under the count thresholds.
    assert_eq!(condition.engagement_level, EngagementLevel::Low);
    assert_eq!(condition.confidence_level, ConfidenceLevel::Building);
    assert_eq!(condition.stress_indicators, vec!["self_doubt".to_string()]);
    assert_eq!(condition.resilience_level.as_deref(), Some("high"));
}

#[test]
fn full_session_action_items() {
    let analysis = analyze_transcript(SESSION);
    let items = &analysis.action_items;
    assert_eq!(items.len(), 3);

    assert_eq!(items[0].description, "Practice two Kaplan math sections tonight");
    assert_eq!(items[0].category, ActionCategory::AcademicPreparation);
    assert_eq!(items[0].priority, ActionPriority::High);
    assert_eq!(items[0].kind, ActionKind::Academic);

    assert_eq!(items[1].description, "Charge the calculator and lay out materials");
    assert_eq!(items[1].category, ActionCategory::MaterialOrganization);
    assert_eq!(items[1].priority, ActionPriority::Medium);
    assert_eq!(items[1].kind, ActionKind::Logistical);

    assert_eq!(items[2].description, "Wake up by 6:30, leave house by 7:15");
    assert_eq!(items[2].category, ActionCategory::TestDayLogistics);
    assert_eq!(items[2].priority, ActionPriority::Critical);
    assert_eq!(items[2].kind, ActionKind::Logistical);
}

#[test]
fn full_session_performance_and_insights() {
    let analysis = analyze_transcript(SESSION);

    let perf = &analysis.performance_indicators;
    assert_eq!(perf.error_patterns, vec!["Calculator input errors".to_string()]);
    assert_eq!(
        perf.strength_areas,
        vec![
            "Problem-solving accuracy".to_string(),
            "Conceptual understanding".to_string(),
        ]
    );
    assert_eq!(
        perf.improvement_opportunities,
        vec!["Strategic execution refinement".to_string()]
    );
    assert_eq!(perf.conceptual_understanding, "developing");

    let insights = &analysis.educational_insights;
    assert_eq!(insights.session_effectiveness, "high");
    // Condition engagement is low (turn count), so the trajectory rule does
    // not fire even though confidence is building.
    assert_eq!(insights.learning_trajectory, "upward");
    assert_eq!(insights.key_themes, vec!["Strong conceptual progress".to_string()]);
    assert_eq!(
        insights.pedagogical_recommendations,
        vec![
            "Continue systematic mathematical problem-solving approach".to_string(),
            "Acknowledge resilience and maintain confidence building".to_string(),
        ]
    );
}

// ---------------------------------------------------------------------------
// Scenario 2: minimal two-turn session
// ---------------------------------------------------------------------------

#[test]
fn minimal_session_with_one_action_item() {
    let input = "0:00 - student\nI don't understand\n\n0:02 - tutor\nLet me explain, think about it again.\n\nACTION ITEM: Review notes tonight";
    let analysis = analyze_transcript(input);

    let turns = &analysis.conversation_turns;
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].speaker, Speaker::Student);
    assert_eq!(turns[0].content, "I don't understand");
    assert!(turns[0]
        .educational_markers
        .contains(&EducationalMarker::Confusion));
    assert_eq!(turns[1].speaker, Speaker::Tutor);

    let teaching = &analysis.teaching_strategies;
    assert_eq!(teaching.strategy_distribution.scaffolding, 1);
    assert_eq!(teaching.dominant_approach, "scaffolding");
    assert_eq!(teaching.teaching_moments.len(), 1);
    assert_eq!(teaching.teaching_moments[0].strategy, "Error Correction");
    assert_eq!(teaching.teaching_moments[0].timestamp, "0:02");

    let items = &analysis.action_items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].description, "Review notes tonight");
    assert_eq!(items[0].category, ActionCategory::AcademicPreparation);
    assert_eq!(analysis.session_metadata.action_items_count, 1);
}

// ---------------------------------------------------------------------------
// Scenario 3: empty and hostile inputs
// ---------------------------------------------------------------------------

#[test]
fn empty_input_yields_empty_defaults() {
    let analysis = analyze_transcript("");
    assert!(analysis.conversation_turns.is_empty());
    assert!(analysis.action_items.is_empty());
    assert_eq!(analysis.session_metadata.action_items_count, 0);
    assert_eq!(analysis.session_metadata.duration_minutes, None);
    assert!(analysis.subjects.subjects_identified.is_empty());
    assert_eq!(analysis.subjects.primary_focus, None);
    assert_eq!(analysis.teaching_strategies.dominant_approach, "balanced");
    assert_eq!(analysis.learning_patterns.total_student_responses, 0);
}

#[test]
fn hostile_inputs_never_panic() {
    let long_multibyte = format!("0:00 - Student: I think {}", "é".repeat(500));
    let inputs = [
        "no structure at all",
        "::::----::::",
        "12:34 - student",
        "Duration: 99999999999999999999 minutes",
        "ACTION ITEM:ACTION ITEM:ACTION ITEM:",
        "\u{0}\u{7f}\u{feff} 1:00 - tutor: ok",
        long_multibyte.as_str(),
        "🎓📐 5:00 - Student: 数学が好き makes sense 🎓",
    ];
    for input in inputs {
        let analysis = analyze_transcript(input);
        // Exercise serialization too; it is part of the contract.
        serde_json::to_string(&analysis).unwrap();
    }
}

#[test]
fn multibyte_context_clip_keeps_valid_utf8() {
    let input = format!("0:00 - Student: I think {}", "漢".repeat(200));
    let analysis = analyze_transcript(&input);
    let moment = &analysis.learning_patterns.specific_moments[0];
    assert!(moment.context.ends_with("..."));
    assert_eq!(moment.context.chars().count(), 83);
}

// ---------------------------------------------------------------------------
// Scenario 4: serialized schema key paths
// ---------------------------------------------------------------------------

#[test]
fn serialized_schema_exposes_consumer_key_paths() {
    let value = serde_json::to_value(analyze_transcript(SESSION)).unwrap();

    // The paths the summary side reads directly.
    assert!(value["subjects"]["subjects_identified"].is_array());
    assert!(value["action_items"].is_array());
    assert_eq!(value["action_items"].as_array().unwrap().len(), 3);

    // The subject block lives under `subjects` and nowhere else; reaching for
    // a `subject_analysis` key finds nothing.
    assert!(value.get("subject_analysis").is_none());

    assert_eq!(value["subjects"]["primary_focus"], "mathematics");
    assert_eq!(
        value["subjects"]["subject_details"]["mathematics"]["prominence"],
        "medium"
    );
    assert_eq!(value["session_metadata"]["action_items_count"], 3);
    assert_eq!(value["action_items"][2]["priority"], "Critical");
    assert_eq!(value["action_items"][2]["type"], "Logistical");
}

// ---------------------------------------------------------------------------
// Scenario 5: idempotence
// ---------------------------------------------------------------------------

#[test]
fn identical_input_serializes_byte_identical() {
    let first = serde_json::to_string(&analyze_transcript(SESSION)).unwrap();
    let second = serde_json::to_string(&analyze_transcript(SESSION)).unwrap();
    assert_eq!(first, second);

    let a = analyze_transcript(SESSION);
    let b = analyze_transcript(SESSION);
    assert_eq!(a, b);
}
