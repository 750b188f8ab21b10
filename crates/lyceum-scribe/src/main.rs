//! Lyceum scribe CLI: find a session transcript, analyze it, and write the
//! parent summary artifacts.
//!
//! Usage:
//!   cargo run -p lyceum-scribe -- [--transcript FILE] [--out DIR] [--model NAME]
//!                                 [--offline] [--json]
//!
//! With no flags it scans the working directory for a known transcript name
//! and falls back to the built-in sample session.

use lyceum_scribe::{discover_transcript, load_transcript_from, write_artifacts, TranscriptSource};
use lyceum_summary::{ScribeConfig, SummaryGenerator};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut transcript_path: Option<PathBuf> = None;
    let mut out_override: Option<PathBuf> = None;
    let mut model_override: Option<String> = None;
    let mut offline = false;
    let mut include_json = false;
    let mut show_help = false;

    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--transcript" => transcript_path = args.next().map(PathBuf::from),
            "--out" => out_override = args.next().map(PathBuf::from),
            "--model" => model_override = args.next(),
            "--offline" => offline = true,
            "--json" => include_json = true,
            "--help" | "-h" => show_help = true,
            _ => {}
        }
    }

    if show_help {
        eprintln!("Lyceum Scribe — tutoring session analysis and parent summary");
        eprintln!("  --transcript FILE   Analyze this transcript (default: scan known names)");
        eprintln!("  --out DIR           Artifact directory (default: from config)");
        eprintln!("  --model NAME        Chat model for the enhanced summary");
        eprintln!("  --offline           Skip the remote engine; render the template email");
        eprintln!("  --json              Also write the full analysis record as JSON");
        eprintln!();
        eprintln!("API key: api_key in lyceum.toml, or OPENAI_API_KEY in the environment/.env");
        return Ok(());
    }

    let mut config = ScribeConfig::load()?;
    if let Some(model) = model_override {
        config.model = model;
    }
    if offline {
        config.offline = true;
    }

    let (transcript, source) = match transcript_path {
        Some(path) => {
            let text = load_transcript_from(&path)?;
            (text, TranscriptSource::File(path))
        }
        None => discover_transcript(Path::new(".")),
    };
    match &source {
        TranscriptSource::File(path) => info!("scribe: analyzing {}", path.display()),
        TranscriptSource::BuiltInSample => {
            info!("scribe: no transcript file found, using the built-in sample session")
        }
    }

    let generator = SummaryGenerator::from_config(&config);
    let report = generator.generate_report(&transcript).await;

    let out_dir = out_override.unwrap_or_else(|| PathBuf::from(&config.output_dir));
    let written = write_artifacts(&report, &out_dir, include_json)?;
    for path in &written {
        info!("scribe: wrote {}", path.display());
    }
    info!("scribe: done ({} summary)", report.method.as_str());

    println!("--- Parent email ({}) ---\n", report.method.as_str());
    println!("{}", report.parent_email);
    Ok(())
}
