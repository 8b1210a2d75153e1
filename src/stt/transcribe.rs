//! Wire types for the Google `v1/speech:recognize` REST call.
//!
//! [`RecognizeRequest`] is built from [`SttConfig`] plus the base64-encoded
//! recording; [`RecognizeResponse`] is what comes back.  Only the fields the
//! service reads are modelled.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::config::SttConfig;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Recognition settings sent with every request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: String,
    pub sample_rate_hertz: u32,
    pub language_code: String,
    pub enable_automatic_punctuation: bool,
    pub model: String,
}

impl From<&SttConfig> for RecognitionConfig {
    fn from(config: &SttConfig) -> Self {
        Self {
            encoding: config.encoding.clone(),
            sample_rate_hertz: config.sample_rate_hertz,
            language_code: config.language_code.clone(),
            enable_automatic_punctuation: config.enable_automatic_punctuation,
            model: config.model.clone(),
        }
    }
}

/// Inline audio payload.
#[derive(Debug, Clone, Serialize)]
pub struct RecognitionAudio {
    /// Base64 (standard alphabet) encoded file content.
    pub content: String,
}

/// Body of `POST /v1/speech:recognize`.
#[derive(Debug, Clone, Serialize)]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

impl RecognizeRequest {
    pub fn new(config: &SttConfig, audio: &[u8]) -> Self {
        Self {
            config: RecognitionConfig::from(config),
            audio: RecognitionAudio {
                content: base64::engine::general_purpose::STANDARD.encode(audio),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// One recognition hypothesis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f32>,
}

/// One consecutive chunk of recognised audio.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechRecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

/// Body returned by `POST /v1/speech:recognize`.
///
/// The provider omits `results` entirely when nothing was recognised.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}

impl RecognizeResponse {
    /// Top alternative of every result, joined with single spaces.
    ///
    /// Results without alternatives are skipped.
    pub fn transcript(&self) -> String {
        self.results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
