//! Parent-email prompt: turn an analysis record into a professional session
//! summary email a parent can act on.
//!
//! The user template carries the session evidence; the model must ground every
//! claim in it rather than invent progress.

use lyceum_core::TranscriptAnalysis;

/// System instruction for the summary model.
pub const PARENT_EMAIL_SYSTEM: &str = "You are an experienced educational consultant \
specializing in learning sciences and parent communication. You translate session \
evidence into warm, specific, actionable updates for parents.";

/// User prompt template: placeholders are replaced with session data.
pub const PARENT_EMAIL_USER_TEMPLATE: &str = r#"TASK: Create a professional email summary for parents about their child's tutoring session.

SESSION DATA:
- Duration: {duration} minutes
- Subjects Covered: {subjects}
- Action Items Identified: {action_item_count}
- Teaching Moments: {teaching_moment_count}

SPECIFIC CONTENT TO INCLUDE:
1. Action Items Found: {action_items}
2. Key Learning Areas: {focus_areas}

COMMUNICATION FRAMEWORK:
- Use a warm, professional tone that builds parent confidence
- Apply growth-mindset language (effort-focused praise)
- Include specific, actionable next steps
- Balance challenges with achievements
- Use educational terminology appropriate for a parent audience

STRUCTURE:
1. Subject line (engaging, positive)
2. Warm opening acknowledging partnership
3. Session highlights with specific evidence
4. Academic progress observations
5. Concrete action items for home support
6. Encouraging close that reinforces growth potential

CONSTRAINTS:
- 400-500 words maximum
- Professional email format
- Evidence-based observations only; no generic praise
- Include pedagogical best practices naturally

Generate the complete parent email now:"#;

/// Explanation of the prompt design, written alongside every summary so the
/// communication framework stays reviewable.
pub const PROMPT_DESIGN_NOTES: &str = r#"PROMPT DESIGN NOTES: Educational Communication Framework

1. EXPERT PERSONA
   The system message establishes an educational consultant grounded in
   learning sciences and family communication, which anchors register and
   credibility before any session data appears.

2. TASK AND AUDIENCE
   The task is a single deliverable (a parent email), and the audience is
   named explicitly so terminology stays parent-appropriate rather than
   educator-internal.

3. DATA INTEGRATION
   Session metrics (duration, subjects, action-item and teaching-moment
   counts) plus the extracted action items are injected verbatim. The model
   is asked to include them, which keeps the email tied to observed evidence.

4. COMMUNICATION PSYCHOLOGY
   Growth-mindset phrasing, partnership acknowledgment, and a deliberate
   balance of challenge with achievement keep the tone constructive without
   drifting into generic praise.

5. STRUCTURE
   A fixed six-part outline (subject line through encouraging close) makes
   the output scannable and consistent across sessions.

6. QUALITY CONSTRAINTS
   A hard word budget, evidence-only observations, and a complete-email
   output requirement mean the result is usable without editing.

When no model is reachable, the template renderer produces the email from the
same analysis fields, so the evidence-first framing holds in both modes."#;

/// Build the user prompt from an analysis record.
pub fn parent_email_user_prompt(analysis: &TranscriptAnalysis) -> String {
    let duration = match analysis.session_metadata.duration_minutes {
        Some(minutes) => minutes.to_string(),
        None => "Unknown".to_string(),
    };

    let subjects: Vec<String> = analysis
        .subjects
        .subjects_identified
        .iter()
        .map(|subject| subject.as_str().replace('_', " "))
        .collect();
    let subjects_text = if subjects.is_empty() {
        "General academic support".to_string()
    } else {
        subjects.join(", ")
    };

    let action_items: Vec<&str> = analysis
        .action_items
        .iter()
        .take(3)
        .map(|item| item.description.as_str())
        .collect();
    let action_items_text = if action_items.is_empty() {
        "Continue regular practice; Review today's concepts".to_string()
    } else {
        action_items.join("; ")
    };

    let focus_areas: Vec<&String> = subjects.iter().take(3).collect();
    let focus_text = if focus_areas.is_empty() {
        "Problem-solving; Study skills".to_string()
    } else {
        focus_areas
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    };

    PARENT_EMAIL_USER_TEMPLATE
        .replace("{duration}", &duration)
        .replace("{subjects}", &subjects_text)
        .replace(
            "{action_item_count}",
            &analysis.action_items.len().to_string(),
        )
        .replace(
            "{teaching_moment_count}",
            &analysis.teaching_strategies.teaching_moments.len().to_string(),
        )
        .replace("{action_items}", &action_items_text)
        .replace("{focus_areas}", &focus_text)
}
