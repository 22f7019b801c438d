//! Concurrent fan-out of transcription calls.
//!
//! Every file's transcription is issued at once; no file waits for another.
//! The central contract is partial failure isolation: one file's error (even
//! a panicked task) becomes that file's outcome and never aborts the rest.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::transcript::Transcript;
use crate::transcription::{Transcribe, TranscriptionError};

/// Transcribes all `files` concurrently, returning one outcome per file in
/// the same order as the input regardless of completion order.
///
/// The language code is forwarded unchanged; validation and fallback are the
/// client's responsibility.
pub async fn dispatch(
    client: Arc<dyn Transcribe>,
    files: &[PathBuf],
    language_code: &str,
) -> Vec<Result<Transcript, TranscriptionError>> {
    let mut set = JoinSet::new();

    for (index, file) in files.iter().enumerate() {
        let client = Arc::clone(&client);
        let file = file.clone();
        let language_code = language_code.to_string();
        set.spawn(async move {
            let outcome = client.transcribe(&file, &language_code).await;
            (index, outcome)
        });
    }

    // Outcomes are paired with their input index, never with completion
    // order, so the result lines up with `files` after the join point.
    let mut outcomes: Vec<Option<Result<Transcript, TranscriptionError>>> =
        (0..files.len()).map(|_| None).collect();

    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = Some(outcome),
            Err(e) => {
                // A panicked task loses its index; fill the gap after the
                // loop so the remaining files still report normally.
                tracing::error!("Transcription task panicked: {e}");
            }
        }
    }

    outcomes
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| {
                Err(TranscriptionError::Task(
                    "task panicked before producing an outcome".to_string(),
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::time::Duration;

    /// Mock client: fails files whose name contains "bad", and sleeps per
    /// the number in the file name (e.g. "slow-300.mp3" sleeps 300ms).
    struct MockClient;

    #[async_trait]
    impl Transcribe for MockClient {
        async fn transcribe(
            &self,
            audio_path: &Path,
            _language_code: &str,
        ) -> Result<Transcript, TranscriptionError> {
            let name = audio_path.file_stem().unwrap().to_string_lossy();
            if let Some(ms) = name.split('-').nth(1).and_then(|s| s.parse::<u64>().ok()) {
                tokio::time::sleep(Duration::from_millis(ms)).await;
            }
            if name.contains("bad") {
                return Err(TranscriptionError::Remote(format!("failed on {name}")));
            }
            Ok(Transcript {
                text: name.to_string(),
                words: vec![],
            })
        }
    }

    #[tokio::test]
    async fn test_one_outcome_per_file() {
        let files = vec![
            PathBuf::from("/tmp/a.mp3"),
            PathBuf::from("/tmp/b.mp3"),
            PathBuf::from("/tmp/c.mp3"),
        ];
        let outcomes = dispatch(Arc::new(MockClient), &files, "en").await;
        assert_eq!(outcomes.len(), files.len());
        assert!(outcomes.iter().all(|o| o.is_ok()));
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_others() {
        let files = vec![
            PathBuf::from("/tmp/a.mp3"),
            PathBuf::from("/tmp/bad.mp3"),
            PathBuf::from("/tmp/c.mp3"),
        ];
        let outcomes = dispatch(Arc::new(MockClient), &files, "en").await;
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].is_err());
        assert!(outcomes[2].is_ok());
    }

    #[tokio::test]
    async fn test_order_matches_input_not_completion() {
        // First file is slow, second is fast; the slow file's outcome must
        // still come first.
        let files = vec![
            PathBuf::from("/tmp/slow-200.mp3"),
            PathBuf::from("/tmp/fast-0.mp3"),
        ];
        let outcomes = dispatch(Arc::new(MockClient), &files, "en").await;
        assert_eq!(outcomes[0].as_ref().unwrap().text, "slow-200");
        assert_eq!(outcomes[1].as_ref().unwrap().text, "fast-0");
    }

    #[tokio::test]
    async fn test_empty_input() {
        let outcomes = dispatch(Arc::new(MockClient), &[], "en").await;
        assert!(outcomes.is_empty());
    }
}
