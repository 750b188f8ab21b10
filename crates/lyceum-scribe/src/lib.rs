//! # Lyceum Scribe — session analysis CLI
//!
//! Transcript discovery and artifact output around the analyzer/summary
//! pipeline: `lyceum-core` reads the session, `lyceum-summary` writes the
//! parent email, this crate finds the input and lands the files.

pub mod discovery;
pub mod output;

pub use discovery::{
    discover_transcript, find_transcript, load_transcript_from, TranscriptSource,
    SAMPLE_TRANSCRIPT, TRANSCRIPT_CANDIDATES,
};
pub use output::write_artifacts;
