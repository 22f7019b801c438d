//! Media file discovery for batch transcription.
//!
//! Resolves an input path (single file or directory) into the set of media
//! files eligible for transcription, filtered by a fixed extension allowlist.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Media file extensions accepted for transcription (lowercase, no dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "mp4", "wav", "ogg", "flac", "m4a", "webm"];

/// Path-level conditions that prevent a batch from being dispatched.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid input path: {0}")]
    InvalidInputPath(PathBuf),
    #[error("File {path} has an unsupported format.")]
    UnsupportedFormat { path: PathBuf, extension: String },
    #[error("No supported media files found in {0}")]
    NoFilesFound(PathBuf),
}

/// Returns true if `extension` (case-insensitive, with or without a leading
/// dot) is in the supported allowlist.
pub fn is_supported_extension(extension: &str) -> bool {
    let normalized = extension.trim_start_matches('.').to_lowercase();
    SUPPORTED_EXTENSIONS.contains(&normalized.as_str())
}

/// Resolves `root` into the list of media files to transcribe.
///
/// A regular file resolves to itself if its extension is supported. A
/// directory is scanned for supported files, either direct children only or
/// the full subtree when `recursive` is set. The returned order is whatever
/// the filesystem yields; callers must not rely on it.
///
/// # Errors
/// - `UnsupportedFormat` for a single file outside the allowlist
/// - `NoFilesFound` when a directory scan matches nothing
/// - `InvalidInputPath` when `root` is neither a file nor a directory
pub fn locate(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    if root.is_file() {
        let extension = root
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if is_supported_extension(&extension) {
            return Ok(vec![root.to_path_buf()]);
        }
        return Err(ScanError::UnsupportedFormat {
            path: root.to_path_buf(),
            extension,
        });
    }

    if root.is_dir() {
        // BTreeSet both deduplicates overlapping matches and keeps the
        // result order deterministic for a given file set.
        let mut found = BTreeSet::new();
        scan_dir(root, recursive, &mut found)?;
        if found.is_empty() {
            return Err(ScanError::NoFilesFound(root.to_path_buf()));
        }
        return Ok(found.into_iter().collect());
    }

    Err(ScanError::InvalidInputPath(root.to_path_buf()))
}

fn scan_dir(dir: &Path, recursive: bool, found: &mut BTreeSet<PathBuf>) -> Result<(), ScanError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|_| ScanError::InvalidInputPath(dir.to_path_buf()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if recursive {
                scan_dir(&path, recursive, found)?;
            }
            continue;
        }
        if !path.is_file() {
            continue;
        }
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if is_supported_extension(&extension) {
            found.insert(path);
        }
    }

    Ok(())
}
