//! Template fallback: a complete parent email rendered directly from analysis
//! fields, no model in the loop. Deterministic for a given analysis record.

use lyceum_core::TranscriptAnalysis;

/// Render the parent email from the analysis record alone.
pub fn render_parent_email(analysis: &TranscriptAnalysis) -> String {
    let subjects: Vec<String> = analysis
        .subjects
        .subjects_identified
        .iter()
        .map(|subject| subject.as_str().replace('_', " "))
        .collect();
    let subject_text = if subjects.is_empty() {
        "academic fundamentals".to_string()
    } else {
        subjects.join(", ")
    };

    let mut email = String::new();
    email.push_str("Subject: Tutoring Session Summary - Steady Progress and Clear Next Steps\n\n");
    email.push_str("Dear Parents,\n\n");
    email.push_str(
        "I hope this message finds you well. I wanted to reach out following today's \
tutoring session to share what we covered and how your child is progressing.\n\n",
    );

    email.push_str("**Session Overview**\n\n");
    match analysis.session_metadata.duration_minutes {
        Some(minutes) => email.push_str(&format!(
            "Today's {}-minute session centered on {}.",
            minutes, subject_text
        )),
        None => email.push_str(&format!("Today's session centered on {}.", subject_text)),
    }
    if analysis.session_metadata.session_type.is_some() {
        email.push_str(" We dedicated the time to focused test preparation.");
    }
    if analysis.session_metadata.timing_context.is_some() {
        email.push_str(" With the test coming up, we treated this as the final preparation pass.");
    }
    email.push_str("\n\n");

    email.push_str("**Academic Progress Highlights**\n\n");
    if !analysis.subjects.mathematics_topics.is_empty() {
        email.push_str(&format!(
            "In mathematics we worked through {}.\n",
            analysis.subjects.mathematics_topics.join(", ")
        ));
    }
    let indicators = &analysis.learning_patterns.learning_indicators;
    if indicators.understanding_moments > 0 {
        let noun = if indicators.understanding_moments == 1 {
            "moment"
        } else {
            "moments"
        };
        email.push_str(&format!(
            "I noted {} clear {} where a concept genuinely clicked, which is exactly \
what we want to see.\n",
            indicators.understanding_moments, noun
        ));
    }
    if !analysis.performance_indicators.strength_areas.is_empty() {
        email.push_str(&format!(
            "Standout strengths this session: {}.\n",
            analysis.performance_indicators.strength_areas.join(", ")
        ));
    }
    for theme in &analysis.educational_insights.key_themes {
        email.push_str(&format!("Overall theme of the session: {}.\n", theme));
    }
    if analysis.subjects.mathematics_topics.is_empty()
        && indicators.understanding_moments == 0
        && analysis.performance_indicators.strength_areas.is_empty()
        && analysis.educational_insights.key_themes.is_empty()
    {
        email.push_str(
            "Your child engaged with the material and we laid groundwork we can build \
on next session.\n",
        );
    }
    email.push_str("\n");

    email.push_str("**Action Items for Home Support**\n\n");
    if analysis.action_items.is_empty() {
        email.push_str("1. Continue regular practice with the concepts from today's session\n");
        email.push_str("2. Review today's notes together for a few minutes this evening\n");
    } else {
        for (index, item) in analysis.action_items.iter().enumerate() {
            email.push_str(&format!(
                "{}. {} ({} priority)\n",
                index + 1,
                item.description,
                item.priority
            ));
        }
    }
    email.push_str("\n");

    email.push_str("**Looking Forward**\n\n");
    for recommendation in &analysis.educational_insights.pedagogical_recommendations {
        email.push_str(&format!("Our plan going forward: {}.\n", recommendation));
    }
    email.push_str(
        "The habits your child is building in these sessions carry well beyond any \
single test. Please don't hesitate to reach out with questions about today's \
session or how to support the momentum at home.\n\n",
    );
    email.push_str("Best regards,\n\nThe Lyceum Tutoring Team\n");
    email
}
