//! Transcript data model and JSON persistence.
//!
//! A transcript is the full text of a media file plus word-level timing
//! information. Transcripts are written as pretty-printed JSON next to the
//! source media and can be loaded back with `Transcript::from_file`, which
//! validates the expected structure.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised when persisting or loading a transcript JSON file.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Transcript file not found: {0}")]
    NotFound(PathBuf),
    #[error("Invalid JSON in transcript file: {0}")]
    InvalidJson(PathBuf),
    #[error("Missing required field '{field}' in transcript file: {path}")]
    MissingField { field: &'static str, path: PathBuf },
    #[error("Malformed transcript file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
    #[error("Failed to serialize transcript: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single word in a transcript with timing information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The transcribed text of the word
    pub text: String,
    /// Start time of the word in milliseconds
    pub start: u64,
    /// End time of the word in milliseconds
    pub end: u64,
    /// Confidence score of the transcription (0.0-1.0)
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Speaker identifier if available
    #[serde(default)]
    pub speaker: Option<String>,
    /// Audio channel identifier if available
    #[serde(default)]
    pub channel: Option<String>,
}

fn default_confidence() -> f64 {
    1.0
}

impl Word {
    /// Checks the word invariants: `start <= end` and confidence within [0, 1].
    fn check(&self) -> Result<(), String> {
        if self.start > self.end {
            return Err(format!(
                "word '{}' has start {} after end {}",
                self.text, self.start, self.end
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "word '{}' has confidence {} outside [0, 1]",
                self.text, self.confidence
            ));
        }
        Ok(())
    }
}

/// Complete transcript of an audio or video file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// The complete transcript text
    pub text: String,
    /// Individual words with timing information
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Transcript {
    /// Serializes the transcript as pretty-printed (2-space indented) JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Writes the transcript as UTF-8 JSON to `path`, creating parent
    /// directories as needed. A serialization failure propagates rather than
    /// persisting an empty file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), TranscriptError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a transcript from a JSON file, validating its structure.
    ///
    /// # Errors
    /// - `NotFound` if the file does not exist
    /// - `InvalidJson` if the file cannot be parsed as JSON
    /// - `MissingField` if the top-level `text` or `words` field is absent
    /// - `Malformed` if a word violates its timing or confidence invariants
    pub fn from_file(path: &Path) -> Result<Self, TranscriptError> {
        if !path.exists() {
            return Err(TranscriptError::NotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|_| TranscriptError::InvalidJson(path.to_path_buf()))?;

        for field in ["text", "words"] {
            if value.get(field).is_none() {
                return Err(TranscriptError::MissingField {
                    field,
                    path: path.to_path_buf(),
                });
            }
        }

        let transcript: Transcript =
            serde_json::from_value(value).map_err(|e| TranscriptError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        for word in &transcript.words {
            if let Err(reason) = word.check() {
                return Err(TranscriptError::Malformed {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }

        Ok(transcript)
    }
}
