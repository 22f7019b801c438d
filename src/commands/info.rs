//! Print supported languages and media formats.

use crate::media::SUPPORTED_EXTENSIONS;
use crate::transcription::Language;

/// Handles the `info` command.
pub fn handle_info() {
    println!("batchscribe — batch media transcription");

    let languages = Language::all()
        .iter()
        .map(|l| format!("{} ({})", l.code(), l.name()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Supported languages: {languages}");

    println!("Supported formats: {}", SUPPORTED_EXTENSIONS.join(", "));
}
