//! Google Cloud Speech-to-Text REST client.
//!
//! All connection details come from [`SttConfig`]; nothing is hardcoded
//! beyond the `/v1/speech:recognize` path.

use async_trait::async_trait;

use crate::config::SttConfig;
use crate::stt::engine::{SpeechToText, SttError};
use crate::stt::transcribe::{RecognizeRequest, RecognizeResponse};

/// Calls `POST {base_url}/v1/speech:recognize` with the recording inline.
///
/// The API key is attached as the `key` query parameter only when one is
/// configured (directly or via `GOOGLE_API_KEY`).
pub struct GoogleSpeechClient {
    client: reqwest::Client,
    config: SttConfig,
    api_key: Option<String>,
}

impl std::fmt::Debug for GoogleSpeechClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSpeechClient")
            .field("base_url", &self.config.base_url)
            .field("language_code", &self.config.language_code)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl GoogleSpeechClient {
    /// Build a client from the STT section of the application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`.
    pub fn from_config(config: &SttConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("stt: cannot build HTTP client ({e}); using defaults without timeout");
                reqwest::Client::new()
            });

        Self {
            client,
            api_key: config.resolved_api_key(),
            config: config.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/speech:recognize",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl SpeechToText for GoogleSpeechClient {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, SttError> {
        if audio.is_empty() {
            return Err(SttError::EmptyAudio);
        }

        let body = RecognizeRequest::new(&self.config, audio);
        let mut req = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = self.api_key.as_deref() {
            req = req.query(&[("key", key)]);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SttError::Api {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| SttError::Parse(e.to_string()))?;

        let transcript = parsed.transcript();
        if transcript.is_empty() {
            return Err(SttError::EmptyTranscript);
        }
        log::debug!("stt: recognised {} chars", transcript.len());
        Ok(transcript)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
