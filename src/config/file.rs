//! Configuration file management for batchscribe.
//!
//! Settings are loaded from a TOML file in the user's config directory.
//! A missing file yields the defaults; a malformed file is an error rather
//! than a silent fallback.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// AssemblyAI request and polling options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyAiConfig {
    /// Base URL of the AssemblyAI API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Add punctuation and capitalization to the transcript
    #[serde(default = "default_true")]
    pub punctuate: bool,
    /// Apply text formatting (e.g. numerals) to the transcript
    #[serde(default = "default_true")]
    pub format_text: bool,
    /// Seconds between polls for a submitted transcription
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Maximum number of poll attempts before giving up
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
}

fn default_base_url() -> String {
    "https://api.assemblyai.com/v2".to_string()
}

fn default_true() -> bool {
    true
}

fn default_poll_interval_secs() -> u64 {
    3
}

fn default_max_poll_attempts() -> u32 {
    100
}

impl Default for AssemblyAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            punctuate: true,
            format_text: true,
            poll_interval_secs: default_poll_interval_secs(),
            max_poll_attempts: default_max_poll_attempts(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchscribeConfig {
    /// Language code used when the caller does not specify one
    #[serde(default = "default_language")]
    pub default_language: String,
    /// AssemblyAI client options
    #[serde(default)]
    pub assemblyai: AssemblyAiConfig,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for BatchscribeConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            assemblyai: AssemblyAiConfig::default(),
        }
    }
}

impl BatchscribeConfig {
    /// Returns the path of the configuration file
    /// (`~/.config/batchscribe/batchscribe.toml`).
    pub fn path() -> Result<PathBuf, anyhow::Error> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("batchscribe").join("batchscribe.toml"))
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, anyhow::Error> {
        let path = Self::path()?;
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {e}", path.display()))?;
        let config = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file {}: {e}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BatchscribeConfig::default();
        assert_eq!(config.default_language, "en");
        assert_eq!(config.assemblyai.base_url, "https://api.assemblyai.com/v2");
        assert!(config.assemblyai.punctuate);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: BatchscribeConfig = toml::from_str(
            r#"
            default_language = "de"

            [assemblyai]
            punctuate = false
            "#,
        )
        .unwrap();
        assert_eq!(config.default_language, "de");
        assert!(!config.assemblyai.punctuate);
        assert!(config.assemblyai.format_text);
        assert_eq!(config.assemblyai.poll_interval_secs, 3);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: BatchscribeConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_language, "en");
        assert_eq!(config.assemblyai.max_poll_attempts, 100);
    }
}
