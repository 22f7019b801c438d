//! Read back a previously saved transcript file.
//!
//! Validates the JSON structure on load, so a truncated or hand-edited
//! transcript fails with a specific message instead of surfacing downstream.

use std::path::PathBuf;

use crate::transcript::Transcript;

/// Handles the `read` command: loads a transcript JSON file and prints it
/// back to stdout.
pub fn handle_read(transcript_path: PathBuf) -> Result<(), anyhow::Error> {
    tracing::info!("Reading transcript from {}", transcript_path.display());

    let transcript = Transcript::from_file(&transcript_path)?;
    tracing::debug!(
        "Loaded transcript: {} chars, {} words",
        transcript.text.len(),
        transcript.words.len()
    );

    println!("{}", transcript.to_json_pretty());
    Ok(())
}
