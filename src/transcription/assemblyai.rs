//! AssemblyAI transcription client.
//!
//! AssemblyAI uses an upload→transcribe→poll pattern rather than a single
//! synchronous request:
//! 1. Upload the audio binary data to get an upload URL
//! 2. Submit a transcription request with the upload URL and options
//! 3. Poll for the completed transcript
//!
//! Word-level timings (start/end in milliseconds, confidence, speaker and
//! channel labels where the API provides them) are mapped into the crate's
//! `Transcript` model.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Language, Transcribe, TranscriptionError};
use crate::config::AssemblyAiConfig;
use crate::transcript::{Transcript, Word};

/// Request body for the transcription endpoint
#[derive(Debug, Serialize)]
struct TranscriptRequest {
    audio_url: String,
    language_code: String,
    punctuate: bool,
    format_text: bool,
}

/// Response from the upload endpoint
#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

/// A word entry in the poll response
#[derive(Debug, Deserialize)]
struct WordResponse {
    text: String,
    start: u64,
    end: u64,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    speaker: Option<String>,
    #[serde(default)]
    channel: Option<String>,
}

/// Response from the transcription endpoint (both submit and poll)
#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: String,
    text: Option<String>,
    words: Option<Vec<WordResponse>>,
    error: Option<String>,
}

/// Client for the AssemblyAI speech-to-text API.
///
/// Constructed once at the process entry point with resolved credentials and
/// shared across a batch via `Arc`.
pub struct AssemblyAiClient {
    client: reqwest::Client,
    api_key: String,
    config: AssemblyAiConfig,
}

impl AssemblyAiClient {
    /// Creates a client with connection pooling and request timeouts.
    pub fn new(api_key: String, config: AssemblyAiConfig) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| TranscriptionError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    async fn upload(&self, audio_data: Vec<u8>) -> Result<String, TranscriptionError> {
        tracing::debug!("Uploading audio to AssemblyAI...");
        let response = self
            .client
            .post(format!("{}/upload", self.config.base_url))
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/octet-stream")
            .body(audio_data)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Audio uploaded successfully");
        Ok(upload.upload_url)
    }

    async fn submit(
        &self,
        upload_url: String,
        language: Language,
    ) -> Result<String, TranscriptionError> {
        let request = TranscriptRequest {
            audio_url: upload_url,
            language_code: language.code().to_string(),
            punctuate: self.config.punctuate,
            format_text: self.config.format_text,
        };

        tracing::debug!("Submitting transcription request...");
        let response = self
            .client
            .post(format!("{}/transcript", self.config.base_url))
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let transcript: TranscriptResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Transcription submitted, id: {}", transcript.id);
        Ok(transcript.id)
    }

    async fn poll(&self, transcript_id: &str) -> Result<Transcript, TranscriptionError> {
        let poll_url = format!("{}/transcript/{transcript_id}", self.config.base_url);
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            if attempts > self.config.max_poll_attempts {
                return Err(TranscriptionError::Timeout(
                    u64::from(self.config.max_poll_attempts) * self.config.poll_interval_secs,
                ));
            }

            let response = self
                .client
                .get(&poll_url)
                .header("Authorization", &self.api_key)
                .send()
                .await
                .map_err(network_error)?;

            if !response.status().is_success() {
                return Err(api_error(response).await);
            }

            let result: TranscriptResponse = response
                .json()
                .await
                .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

            tracing::debug!(
                "Poll attempt {}/{}: status={}, id={}",
                attempts,
                self.config.max_poll_attempts,
                result.status,
                result.id
            );

            match result.status.as_str() {
                "completed" => {
                    let text = result.text.ok_or_else(|| {
                        TranscriptionError::InvalidResponse(
                            "completed status but no transcript text".to_string(),
                        )
                    })?;
                    let words = result
                        .words
                        .unwrap_or_default()
                        .into_iter()
                        .map(|w| Word {
                            text: w.text,
                            start: w.start,
                            end: w.end,
                            confidence: w.confidence.unwrap_or(1.0),
                            speaker: w.speaker,
                            channel: w.channel,
                        })
                        .collect();
                    tracing::debug!("Transcription completed: {} chars", text.len());
                    return Ok(Transcript { text, words });
                }
                "error" => {
                    let error = result
                        .error
                        .unwrap_or_else(|| "Unknown transcription error".to_string());
                    return Err(TranscriptionError::Remote(error));
                }
                _ => {
                    // Still queued or processing.
                    tokio::time::sleep(Duration::from_secs(self.config.poll_interval_secs)).await;
                }
            }
        }
    }
}

#[async_trait]
impl Transcribe for AssemblyAiClient {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language_code: &str,
    ) -> Result<Transcript, TranscriptionError> {
        let language = Language::resolve(language_code);
        tracing::info!(
            "Transcribing {} (language: {})",
            audio_path.display(),
            language.name()
        );

        let audio_data =
            std::fs::read(audio_path).map_err(|source| TranscriptionError::ReadFile {
                path: audio_path.to_path_buf(),
                source,
            })?;

        let upload_url = self.upload(audio_data).await?;
        let transcript_id = self.submit(upload_url, language).await?;
        self.poll(&transcript_id).await
    }
}

/// Maps reqwest transport errors to human-readable network errors.
fn network_error(e: reqwest::Error) -> TranscriptionError {
    let message = if e.is_connect() {
        "Failed to connect to AssemblyAI API server. Check your internet connection.".to_string()
    } else if e.is_timeout() {
        "Request to AssemblyAI timed out. The API server is not responding.".to_string()
    } else {
        format!("AssemblyAI network error: {e}")
    };
    TranscriptionError::Network(message)
}

/// Converts a non-success HTTP response into a typed API error.
async fn api_error(response: reqwest::Response) -> TranscriptionError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = match status {
        401 => "AssemblyAI API key is invalid or expired.".to_string(),
        403 => "You don't have permission to use AssemblyAI's API. Check your API key and account status.".to_string(),
        429 => "Too many requests to AssemblyAI. You've hit the API rate limit.".to_string(),
        500 | 502 | 503 | 504 => "AssemblyAI API server is experiencing issues. Please try again later.".to_string(),
        _ => body,
    };
    TranscriptionError::Api { status, message }
}
