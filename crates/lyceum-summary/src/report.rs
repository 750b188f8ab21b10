//! Report assembly: analyzer plus engine, with template fallback so a report
//! is always produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use lyceum_core::{analyze_transcript, TranscriptAnalysis};

use crate::config::ScribeConfig;
use crate::engine::{create_summary_engine, SummaryEngine};
use crate::prompts::PROMPT_DESIGN_NOTES;
use crate::template::render_parent_email;

/// How the parent email in a report was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryMethod {
    #[serde(rename = "AI-Enhanced")]
    AiEnhanced,
    #[serde(rename = "Template-Based")]
    TemplateBased,
}

impl SummaryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMethod::AiEnhanced => "AI-Enhanced",
            SummaryMethod::TemplateBased => "Template-Based",
        }
    }
}

/// Everything one run produces: the email, how it was made, and the full
/// analysis record it was made from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub method: SummaryMethod,
    pub parent_email: String,
    pub prompt_notes: String,
    pub analysis: TranscriptAnalysis,
}

/// Composes the transcript analyzer with a summary engine.
pub struct SummaryGenerator {
    engine: Box<dyn SummaryEngine>,
}

impl SummaryGenerator {
    /// Use a specific engine.
    pub fn new(engine: Box<dyn SummaryEngine>) -> Self {
        Self { engine }
    }

    /// Pick the engine from configuration (offline flag, then API key).
    pub fn from_config(config: &ScribeConfig) -> Self {
        Self::new(create_summary_engine(config))
    }

    /// Analyze the transcript and produce a complete report. A failing engine
    /// is logged and replaced by the template rendering; this never fails.
    pub async fn generate_report(&self, transcript: &str) -> SummaryReport {
        let analysis = analyze_transcript(transcript);
        let (parent_email, method) = match self.engine.generate(&analysis).await {
            Ok(email) => (email, self.engine.method()),
            Err(err) => {
                warn!(
                    "summary engine '{}' failed ({}); falling back to template rendering",
                    self.engine.name(),
                    err
                );
                (render_parent_email(&analysis), SummaryMethod::TemplateBased)
            }
        };
        SummaryReport {
            generated_at: Utc::now(),
            method,
            parent_email,
            prompt_notes: PROMPT_DESIGN_NOTES.to_string(),
            analysis,
        }
    }
}
