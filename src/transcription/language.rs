//! Supported transcription languages.
//!
//! Language codes are validated by the transcription client, never by the
//! batch layer. Unknown codes fall back to English with a warning.

use serde::{Deserialize, Serialize};

/// Default language used when an unsupported code is requested.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// A language supported by the transcription provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Nl,
    Ja,
    Ko,
    Zh,
    Ru,
}

impl Language {
    /// Returns the ISO 639-1 code sent to the transcription API.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Nl => "nl",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Zh => "zh",
            Language::Ru => "ru",
        }
    }

    /// Returns the English display name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
            Language::It => "Italian",
            Language::Pt => "Portuguese",
            Language::Nl => "Dutch",
            Language::Ja => "Japanese",
            Language::Ko => "Korean",
            Language::Zh => "Chinese",
            Language::Ru => "Russian",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            "it" => Some(Language::It),
            "pt" => Some(Language::Pt),
            "nl" => Some(Language::Nl),
            "ja" => Some(Language::Ja),
            "ko" => Some(Language::Ko),
            "zh" => Some(Language::Zh),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    /// Resolves a requested language code, silently falling back to the
    /// default when the code is unsupported.
    pub fn resolve(code: &str) -> Self {
        Language::from_code(code).unwrap_or_else(|| {
            tracing::warn!(
                "Unsupported language code: {code}. Using default: {}",
                DEFAULT_LANGUAGE.code()
            );
            DEFAULT_LANGUAGE
        })
    }

    pub fn all() -> &'static [Self] {
        &[
            Language::En,
            Language::Es,
            Language::Fr,
            Language::De,
            Language::It,
            Language::Pt,
            Language::Nl,
            Language::Ja,
            Language::Ko,
            Language::Zh,
            Language::Ru,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(*language));
        }
    }

    #[test]
    fn test_serializes_as_wire_code() {
        assert_eq!(serde_json::to_value(Language::En).unwrap(), "en");
        assert_eq!(serde_json::to_value(Language::Zh).unwrap(), "zh");
        assert_eq!(
            serde_json::from_value::<Language>(serde_json::json!("de")).unwrap(),
            Language::De
        );
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        assert_eq!(Language::resolve("es"), Language::Es);
        assert_eq!(Language::resolve("xx"), Language::En);
        assert_eq!(Language::resolve(""), Language::En);
    }
}
