//! Reduction of per-file outcomes into a single batch result.
//!
//! Runs after the dispatch join point, so transcript writes happen
//! sequentially in input order. When several files share a directory they
//! share one `transcript.json` output path; the sequential pass makes that
//! collision deterministic last-write-wins (the last located file in the
//! directory keeps its transcript).

use std::path::{Path, PathBuf};

use super::{BatchData, BatchResult, BatchStatus, FileOutcome};
use crate::transcript::{Transcript, TranscriptError};
use crate::transcription::TranscriptionError;

/// File name of the transcript written next to each source media file.
pub const TRANSCRIPT_FILE_NAME: &str = "transcript.json";

const MSG_SUCCESS: &str = "Transcription complete.";
const MSG_PARTIAL: &str = "Transcription complete with some failures.";
const MSG_FAILURE: &str = "Transcription failed for all files.";

/// Returns the output path for a source media file: a sibling named
/// `transcript.json` in the same directory.
pub fn transcript_path(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) => parent.join(TRANSCRIPT_FILE_NAME),
        None => PathBuf::from(TRANSCRIPT_FILE_NAME),
    }
}

/// Reduces per-file outcomes into a `BatchResult`, persisting each
/// successful transcript through `write`.
///
/// `files` and `outcomes` are paired positionally and must have the same
/// length; `data` preserves the input file order. A failed write is terminal
/// for that file, with no retry.
pub fn aggregate<W>(
    files: &[PathBuf],
    outcomes: Vec<Result<Transcript, TranscriptionError>>,
    mut write: W,
) -> BatchResult
where
    W: FnMut(&Path, &Transcript) -> Result<(), TranscriptError>,
{
    debug_assert_eq!(files.len(), outcomes.len());

    let mut recorded = Vec::with_capacity(files.len());
    for (file, outcome) in files.iter().zip(outcomes) {
        let outcome = match outcome {
            Err(error) => {
                tracing::error!("Transcription failed for {}: {error}", file.display());
                FileOutcome::Failure {
                    file: file.clone(),
                    error: error.to_string(),
                }
            }
            Ok(transcript) => {
                let json_path = transcript_path(file);
                match write(&json_path, &transcript) {
                    Ok(()) => {
                        tracing::info!("Transcription saved to {}", json_path.display());
                        FileOutcome::Success {
                            file: file.clone(),
                            json_path,
                        }
                    }
                    Err(cause) => {
                        let error = format!("write failed to {}: {cause}", json_path.display());
                        tracing::error!("{error}");
                        FileOutcome::Failure {
                            file: file.clone(),
                            error,
                        }
                    }
                }
            }
        };
        recorded.push(outcome);
    }

    let succeeded = recorded.iter().filter(|o| o.is_success()).count();
    let (status, message) = if succeeded == recorded.len() && !recorded.is_empty() {
        (BatchStatus::Success, MSG_SUCCESS)
    } else if succeeded == 0 {
        (BatchStatus::Failure, MSG_FAILURE)
    } else {
        (BatchStatus::PartialSuccess, MSG_PARTIAL)
    };

    BatchResult {
        status,
        message: message.to_string(),
        data: BatchData::Outcomes(recorded),
    }
}

/// Default persistence: writes the transcript as pretty-printed JSON.
pub fn write_transcript(path: &Path, transcript: &Transcript) -> Result<(), TranscriptError> {
    transcript.save_to_file(path)
}
