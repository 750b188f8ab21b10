//! Artifact output: timestamped summary files in the output directory.

use chrono::Local;
use lyceum_summary::SummaryReport;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write the report artifacts and return their paths. The email and the
/// prompt design notes are always written; the full analysis record goes out
/// as pretty JSON only when `include_json` is set.
pub fn write_artifacts(
    report: &SummaryReport,
    out_dir: &Path,
    include_json: bool,
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let mut written = Vec::new();

    let email_path = out_dir.join(format!("parent_email_summary_{}.txt", stamp));
    fs::write(&email_path, &report.parent_email)?;
    written.push(email_path);

    let notes_path = out_dir.join(format!("prompt_design_notes_{}.txt", stamp));
    fs::write(&notes_path, &report.prompt_notes)?;
    written.push(notes_path);

    if include_json {
        let json = serde_json::to_string_pretty(&report.analysis)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let json_path = out_dir.join(format!("analysis_{}.json", stamp));
        fs::write(&json_path, json)?;
        written.push(json_path);
    }

    Ok(written)
}
