//! Transcript discovery: well-known file names first, built-in sample last.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File names checked in the working directory, in priority order.
pub const TRANSCRIPT_CANDIDATES: &[&str] = &[
    "tutoring_transcript.txt",
    "Tutoring_Transcript_File.txt",
    "transcript.txt",
];

/// Built-in session used when no transcript file is present, so the pipeline
/// can always be exercised end to end.
pub const SAMPLE_TRANSCRIPT: &str = "\
Tutoring Session Transcript - SAT Math
Duration: 55 minutes
Session type: test preparation, the day before test

6:00 - Tutor: Good evening! Ready for the final review session?
6:02 - Student: I think so. I was sick earlier this week but I'm feeling better.
6:04 - Tutor: Glad you're back. Let's start with ratio problems. What do you think the first step is?
6:06 - Student: Set up the proportion? I know we divide both sides.
6:08 - Tutor: That's right. Now try this median question from the practice set.
6:10 - Student: I got 42 on my calculator... wait, that's wrong.
6:12 - Tutor: Think about it again. Remember to order the values first.
6:14 - Student: Oh yeah, that makes sense. The median is 38.
6:16 - Tutor: Well done. Your formula work is much stronger now.
6:18 - Student: Got it. I'm practicing the histogram section tonight.

ACTION ITEM: Review the Kaplan practice sections 2 and 3
ACTION ITEM: Lay out calculator, pencils, and admission ticket tonight
ACTION ITEM: Wake up by 6:30 and leave the house by 7:15
";

/// Where a transcript came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptSource {
    File(PathBuf),
    BuiltInSample,
}

/// First candidate file that exists under `dir`, if any.
pub fn find_transcript(dir: &Path) -> Option<PathBuf> {
    TRANSCRIPT_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Read an explicitly named transcript. I/O errors propagate; a missing file
/// the caller asked for by name is a real error, not a fallback case.
pub fn load_transcript_from(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Scan `dir` for a transcript. Unreadable candidates are skipped with a
/// warning; when nothing is found the built-in sample is returned.
pub fn discover_transcript(dir: &Path) -> (String, TranscriptSource) {
    for name in TRANSCRIPT_CANDIDATES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(text) => return (text, TranscriptSource::File(path)),
            Err(err) => warn!(
                "scribe: could not read {} ({}), trying next candidate",
                path.display(),
                err
            ),
        }
    }
    (SAMPLE_TRANSCRIPT.to_string(), TranscriptSource::BuiltInSample)
}
