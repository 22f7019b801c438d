//! Batch transcription: concurrent dispatch and result aggregation.
//!
//! A batch covers one invocation over one or more located media files. Each
//! file resolves to a terminal `FileOutcome`, and the set of outcomes is
//! reduced to a single `BatchResult` the caller can serialize as-is.

pub mod aggregate;
pub mod dispatch;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::media::ScanError;

pub use aggregate::aggregate;
pub use dispatch::dispatch;

/// Overall classification of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Success,
    PartialSuccess,
    Failure,
}

/// Terminal state recorded for one file within a batch. Never mutated once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Success { file: PathBuf, json_path: PathBuf },
    Failure { file: PathBuf, error: String },
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Success { .. })
    }
}

/// Payload of a batch result.
///
/// Normally the ordered list of per-file outcomes. A single-file format
/// rejection instead carries the bare rejected extension, preserving the
/// established response contract for that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchData {
    Outcomes(Vec<FileOutcome>),
    RejectedExtension(String),
}

/// Structured result of a batch transcription run.
///
/// Always returned to the caller, whatever combination of per-file failures
/// occurred; errors never escape the batch operation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub status: BatchStatus,
    pub message: String,
    pub data: BatchData,
}

impl BatchResult {
    /// Builds the failure result for a path-level condition that
    /// short-circuits before any file is dispatched.
    pub fn from_scan_error(error: &ScanError) -> Self {
        let data = match error {
            ScanError::UnsupportedFormat { extension, .. } => {
                BatchData::RejectedExtension(extension.clone())
            }
            _ => BatchData::Outcomes(Vec::new()),
        };
        Self {
            status: BatchStatus::Failure,
            message: error.to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_outcome_serializes_tagged_on_status() {
        let outcome = FileOutcome::Failure {
            file: PathBuf::from("/tmp/a.mp3"),
            error: "boom".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["error"], "boom");
    }

    #[test]
    fn test_unsupported_format_carries_extension() {
        let error = ScanError::UnsupportedFormat {
            path: PathBuf::from("/tmp/notice.txt"),
            extension: "txt".to_string(),
        };
        let result = BatchResult::from_scan_error(&error);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["data"], "txt");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .ends_with("has an unsupported format."));
    }

    #[test]
    fn test_no_files_found_message_and_empty_data() {
        let error = ScanError::NoFilesFound(PathBuf::from("/tmp/empty_dir"));
        let result = BatchResult::from_scan_error(&error);
        assert_eq!(result.status, BatchStatus::Failure);
        assert_eq!(
            result.message,
            "No supported media files found in /tmp/empty_dir"
        );
        assert_eq!(result.data, BatchData::Outcomes(Vec::new()));
    }

    #[test]
    fn test_invalid_path_has_empty_data() {
        let error = ScanError::InvalidInputPath(Path::new("/nope").to_path_buf());
        let result = BatchResult::from_scan_error(&error);
        assert_eq!(result.status, BatchStatus::Failure);
        assert_eq!(result.data, BatchData::Outcomes(Vec::new()));
    }
}
