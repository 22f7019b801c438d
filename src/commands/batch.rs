//! Batch transcription command.
//!
//! Resolves the input path to a set of media files, transcribes them all
//! concurrently and writes each transcript next to its source file. The
//! structured `BatchResult` is printed to stdout as JSON; per-file errors are
//! part of the result, never a process failure.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::batch::{aggregate, dispatch, BatchResult};
use crate::batch::aggregate::write_transcript;
use crate::config;
use crate::media;
use crate::transcription::{AssemblyAiClient, Transcribe};

/// Handles the `batch` command: wires up the AssemblyAI client from config
/// and environment, runs the batch and prints the result JSON.
pub async fn handle_batch(
    input_path: PathBuf,
    language_code: Option<String>,
    recursive: bool,
) -> Result<(), anyhow::Error> {
    tracing::info!("=== batchscribe batch ===");
    tracing::info!("Input: {} (recursive: {recursive})", input_path.display());

    let config = config::BatchscribeConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {e}");
        anyhow::anyhow!("Configuration error: {e}")
    })?;
    let language_code = language_code.unwrap_or_else(|| config.default_language.clone());

    let api_key = config::assemblyai_api_key()?;
    let client = AssemblyAiClient::new(api_key, config.assemblyai.clone())
        .map_err(|e| anyhow::anyhow!("Failed to create AssemblyAI client: {e}"))?;

    let result = run_batch(Arc::new(client), &input_path, &language_code, recursive).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Runs one batch against an injected transcription client.
///
/// The three path-level conditions (invalid path, unsupported format, no
/// files found) short-circuit into a failure result before anything is
/// dispatched. Everything located is attempted exactly once.
pub async fn run_batch(
    client: Arc<dyn Transcribe>,
    input_path: &Path,
    language_code: &str,
    recursive: bool,
) -> BatchResult {
    let files = match media::locate(input_path, recursive) {
        Ok(files) => files,
        Err(error) => {
            tracing::error!("{error}");
            return BatchResult::from_scan_error(&error);
        }
    };

    tracing::info!("Located {} media file(s)", files.len());
    let outcomes = dispatch(client, &files, language_code).await;
    aggregate(&files, outcomes, write_transcript)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{BatchData, BatchStatus, FileOutcome};
    use crate::transcript::Transcript;
    use crate::transcription::TranscriptionError;
    use async_trait::async_trait;

    /// Mock client that fails any file whose name contains "bad".
    struct MockClient;

    #[async_trait]
    impl Transcribe for MockClient {
        async fn transcribe(
            &self,
            audio_path: &Path,
            _language_code: &str,
        ) -> Result<Transcript, TranscriptionError> {
            let name = audio_path.file_stem().unwrap().to_string_lossy();
            if name.contains("bad") {
                return Err(TranscriptionError::Remote(format!("failed on {name}")));
            }
            Ok(Transcript {
                text: format!("transcript of {name}"),
                words: vec![],
            })
        }
    }

    fn touch(path: &Path) {
        std::fs::write(path, b"").unwrap();
    }

    #[tokio::test]
    async fn test_two_of_three_succeed_is_partial() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["one.mp3", "two.wav", "bad.flac"] {
            touch(&dir.path().join(name));
        }

        let result = run_batch(Arc::new(MockClient), dir.path(), "en", false).await;

        assert_eq!(result.status, BatchStatus::PartialSuccess);
        match result.data {
            BatchData::Outcomes(outcomes) => {
                assert_eq!(outcomes.len(), 3);
                assert_eq!(outcomes.iter().filter(|o| !o.is_success()).count(), 1);
            }
            other => panic!("expected outcomes, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_writes_transcript_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("talk.mp3");
        touch(&file);

        let result = run_batch(Arc::new(MockClient), &file, "en", false).await;

        assert_eq!(result.status, BatchStatus::Success);
        let json_path = dir.path().join("transcript.json");
        let saved = Transcript::from_file(&json_path).unwrap();
        assert_eq!(saved.text, "transcript of talk");

        match result.data {
            BatchData::Outcomes(outcomes) => match &outcomes[0] {
                FileOutcome::Success { json_path: recorded, .. } => {
                    assert_eq!(recorded, &json_path);
                }
                other => panic!("expected success, got {other:?}"),
            },
            other => panic!("expected outcomes, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_same_directory_files_share_last_written_transcript() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("alpha.mp3"));
        touch(&dir.path().join("omega.mp3"));

        let result = run_batch(Arc::new(MockClient), dir.path(), "en", false).await;
        assert_eq!(result.status, BatchStatus::Success);

        // Both files resolve to the same sibling transcript.json; the last
        // file in located order wins deterministically.
        let saved = Transcript::from_file(&dir.path().join("transcript.json")).unwrap();
        assert_eq!(saved.text, "transcript of omega");
    }

    #[tokio::test]
    async fn test_all_failed_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["bad1.mp3", "bad2.mp3"] {
            touch(&dir.path().join(name));
        }

        let result = run_batch(Arc::new(MockClient), dir.path(), "en", false).await;
        assert_eq!(result.status, BatchStatus::Failure);
        assert_eq!(result.message, "Transcription failed for all files.");
    }

    #[tokio::test]
    async fn test_empty_dir_short_circuits() {
        let dir = tempfile::tempdir().unwrap();

        let result = run_batch(Arc::new(MockClient), dir.path(), "en", false).await;
        assert_eq!(result.status, BatchStatus::Failure);
        assert_eq!(
            result.message,
            format!("No supported media files found in {}", dir.path().display())
        );
        assert_eq!(result.data, BatchData::Outcomes(Vec::new()));
    }

    #[tokio::test]
    async fn test_unsupported_single_file_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notice.txt");
        touch(&file);

        let result = run_batch(Arc::new(MockClient), &file, "en", false).await;
        assert_eq!(result.status, BatchStatus::Failure);
        assert_eq!(result.data, BatchData::RejectedExtension("txt".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_path_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let result = run_batch(Arc::new(MockClient), &missing, "en", false).await;
        assert_eq!(result.status, BatchStatus::Failure);
        assert_eq!(result.data, BatchData::Outcomes(Vec::new()));
    }
}
