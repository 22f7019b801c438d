//! Transcription client for speech-to-text conversion.
//!
//! The batch layer depends only on the `Transcribe` trait; the production
//! implementation talks to AssemblyAI. Keeping the client behind a trait lets
//! the dispatcher be driven by mocks in tests and keeps credential handling
//! at the process entry point.

pub mod assemblyai;
pub mod language;

use std::path::Path;

use async_trait::async_trait;

use crate::transcript::Transcript;

pub use assemblyai::AssemblyAiClient;
pub use language::Language;

/// Errors from a single transcription attempt.
///
/// These are per-file errors: the batch layer records them as that file's
/// outcome and continues with the remaining files.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("Failed to read audio file {path}: {source}")]
    ReadFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Network(String),
    #[error("AssemblyAI API error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse AssemblyAI response: {0}")]
    InvalidResponse(String),
    #[error("AssemblyAI transcription failed: {0}")]
    Remote(String),
    #[error("Transcription timed out after {0} seconds")]
    Timeout(u64),
    #[error("Transcription task failed: {0}")]
    Task(String),
}

/// Asynchronous speech-to-text transcription of a single media file.
#[async_trait]
pub trait Transcribe: Send + Sync {
    /// Transcribes `audio_path` in the requested language.
    ///
    /// Unsupported language codes are resolved by the implementation, which
    /// falls back to the default language rather than failing.
    async fn transcribe(
        &self,
        audio_path: &Path,
        language_code: &str,
    ) -> Result<Transcript, TranscriptionError>;
}
