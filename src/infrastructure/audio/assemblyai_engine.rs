use std::io::Write;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::io::ReaderStream;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::config::TranscriptionSettings;
use crate::domain::{Sentiment, SentimentSegment, Transcript, Word};

/// AssemblyAI speech-to-text engine: upload, create a transcript job, poll
/// until the provider reports completed or error. No retries; a failed call
/// surfaces immediately and the caller decides whether to fall back to a
/// typed answer.
pub struct AssemblyAiEngine {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    poll_deadline: Duration,
}

impl AssemblyAiEngine {
    pub fn new(settings: &TranscriptionSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            poll_interval: Duration::from_millis(settings.poll_interval_ms),
            poll_deadline: Duration::from_millis(settings.poll_deadline_ms),
        }
    }

    async fn upload(&self, audio: &[u8], mime_hint: &str) -> Result<String, TranscriptionError> {
        // The upload is streamed from a file handle, not a memory buffer; the
        // staged copy is removed on drop whichever way this returns.
        let mut staged = tempfile::Builder::new()
            .prefix("answer-audio-")
            .suffix(extension_for(mime_hint))
            .tempfile()
            .map_err(|e| TranscriptionError::Transport(format!("staging: {}", e)))?;
        staged
            .write_all(audio)
            .and_then(|_| staged.flush())
            .map_err(|e| TranscriptionError::Transport(format!("staging: {}", e)))?;

        let file = tokio::fs::File::open(staged.path())
            .await
            .map_err(|e| TranscriptionError::Transport(format!("staging: {}", e)))?;
        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));

        tracing::debug!(bytes = audio.len(), "Uploading audio to AssemblyAI");

        let response = self
            .client
            .post(format!("{}/v2/upload", self.base_url))
            .header("authorization", &self.api_key)
            .header("content-type", "application/octet-stream")
            .body(body)
            .send()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("upload request: {}", e)))?;
        let response = require_success(response, "upload").await?;

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("upload response: {}", e)))?;

        Ok(uploaded.upload_url)
    }

    async fn request_transcript(&self, audio_url: &str) -> Result<String, TranscriptionError> {
        let request_body = TranscriptRequest {
            audio_url,
            speech_model: "best",
            language_code: "en",
            disfluencies: true,
            sentiment_analysis: true,
        };

        let response = self
            .client
            .post(format!("{}/v2/transcript", self.base_url))
            .header("authorization", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("transcript request: {}", e)))?;
        let response = require_success(response, "transcript request").await?;

        let created: TranscriptResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("transcript response: {}", e)))?;

        Ok(created.id)
    }

    async fn poll_transcript(
        &self,
        transcript_id: &str,
    ) -> Result<TranscriptResponse, TranscriptionError> {
        let started = Instant::now();
        loop {
            let response = self
                .client
                .get(format!("{}/v2/transcript/{}", self.base_url, transcript_id))
                .header("authorization", &self.api_key)
                .send()
                .await
                .map_err(|e| TranscriptionError::Transport(format!("poll request: {}", e)))?;
            let response = require_success(response, "poll").await?;

            let transcript: TranscriptResponse = response
                .json()
                .await
                .map_err(|e| TranscriptionError::Transport(format!("poll response: {}", e)))?;

            match transcript.status.as_str() {
                "completed" => return Ok(transcript),
                "error" => {
                    return Err(TranscriptionError::Provider(
                        transcript
                            .error
                            .unwrap_or_else(|| "unspecified provider error".to_string()),
                    ));
                }
                _ => {}
            }

            if started.elapsed() >= self.poll_deadline {
                return Err(TranscriptionError::Transport(format!(
                    "transcript {} not ready after {:?}",
                    transcript_id, self.poll_deadline
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl TranscriptionEngine for AssemblyAiEngine {
    async fn transcribe(
        &self,
        audio: &[u8],
        mime_hint: &str,
    ) -> Result<Transcript, TranscriptionError> {
        if self.api_key.trim().is_empty() {
            return Err(TranscriptionError::MissingApiKey);
        }

        let audio_url = self.upload(audio, mime_hint).await?;
        let transcript_id = self.request_transcript(&audio_url).await?;

        tracing::debug!(transcript_id = %transcript_id, "Waiting for AssemblyAI transcript");

        let completed = self.poll_transcript(&transcript_id).await?;
        let transcript = completed.into_transcript();

        tracing::info!(
            chars = transcript.text.len(),
            words = transcript.words.len(),
            "AssemblyAI transcription completed"
        );

        Ok(transcript)
    }
}

async fn require_success(
    response: reqwest::Response,
    operation: &str,
) -> Result<reqwest::Response, TranscriptionError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(TranscriptionError::Transport(format!(
        "{} status {}: {}",
        operation, status, body
    )))
}

fn extension_for(mime_hint: &str) -> &'static str {
    match mime_hint {
        "audio/wav" | "audio/x-wav" => ".wav",
        "audio/mpeg" | "audio/mp3" => ".mp3",
        "audio/mp4" | "audio/m4a" | "audio/x-m4a" => ".m4a",
        "audio/ogg" => ".ogg",
        _ => ".webm",
    }
}

#[derive(Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
    speech_model: &'a str,
    language_code: &'a str,
    disfluencies: bool,
    sentiment_analysis: bool,
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct TranscriptResponse {
    id: String,
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    words: Option<Vec<WireWord>>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    audio_duration: Option<f64>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    sentiment_analysis_results: Option<Vec<WireSentimentResult>>,
}

#[derive(Deserialize)]
struct WireWord {
    text: String,
    start: u64,
    end: u64,
    confidence: f64,
    #[serde(default)]
    speaker: Option<String>,
}

#[derive(Deserialize)]
struct WireSentimentResult {
    text: String,
    sentiment: Sentiment,
    confidence: f64,
    start: u64,
    end: u64,
}

impl TranscriptResponse {
    /// Maps the provider shape into the domain transcript; no provider field
    /// names or optionality leak past this point.
    fn into_transcript(self) -> Transcript {
        let words = self
            .words
            .unwrap_or_default()
            .into_iter()
            .map(|w| Word {
                text: w.text,
                start_ms: w.start,
                end_ms: w.end,
                confidence: w.confidence,
                speaker: w.speaker,
            })
            .collect();

        let sentiment = self.sentiment_analysis_results.map(|results| {
            results
                .into_iter()
                .map(|r| SentimentSegment {
                    text: r.text,
                    sentiment: r.sentiment,
                    confidence: r.confidence,
                    start_ms: r.start,
                    end_ms: r.end,
                })
                .collect()
        });

        Transcript {
            text: self.text.unwrap_or_default(),
            words,
            confidence: self.confidence.unwrap_or(0.0),
            audio_duration_seconds: self.audio_duration.unwrap_or(0.0),
            sentiment,
        }
    }
}
