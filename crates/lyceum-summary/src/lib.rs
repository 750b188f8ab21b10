//! Summary layer for Lyceum: prompt construction, summary engines (template
//! and OpenAI-backed), and report assembly.
//!
//! `lyceum-core` produces the analysis record; this crate turns it into a
//! parent-facing email and wraps everything in a `SummaryReport`. The engine
//! is chosen once from `ScribeConfig`; a remote failure falls back to the
//! template rendering, so report generation never fails.

mod config;
mod engine;
mod error;
pub mod prompts;
mod report;
mod template;

// Configuration
pub use config::ScribeConfig;

// Errors
pub use error::{SummaryError, SummaryResult};

// Engines
pub use engine::{
    create_summary_engine, OpenAiEngine, SummaryEngine, TemplateEngine, DEFAULT_API_BASE,
    DEFAULT_MODEL,
};

// Template rendering
pub use template::render_parent_email;

// Reports
pub use report::{SummaryGenerator, SummaryMethod, SummaryReport};
