//! STT (Speech-to-Text) provider module.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │               SpeechToText (async trait)             │
//! │                                                      │
//! │   ┌─────────────┐    ┌────────────────────┐          │
//! │   │  SttConfig   │───▶│ GoogleSpeechClient │          │
//! │   └─────────────┘    └─────────┬──────────┘          │
//! │                                │                     │
//! │                                ▼                     │
//! │                  POST /v1/speech:recognize           │
//! │                  audio bytes → transcript            │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use speech_tutor::config::SttConfig;
//! use speech_tutor::stt::{GoogleSpeechClient, SpeechToText};
//!
//! # async fn example() {
//! let client = GoogleSpeechClient::from_config(&SttConfig::default());
//! let wav = std::fs::read("attempt.wav").unwrap();
//! let text = client.transcribe(&wav).await.unwrap();
//! println!("{text}");
//! # }
//! ```

pub mod engine;
pub mod google;
pub mod transcribe;

use std::sync::Arc;

use crate::config::{SttConfig, SttProvider};

// ── Public re-exports ──────────────────────────────────────────────────────

pub use engine::{DisabledSpeechClient, SpeechToText, SttError};
pub use google::GoogleSpeechClient;
pub use transcribe::{RecognitionConfig, RecognizeRequest, RecognizeResponse};

#[cfg(test)]
pub use engine::MockSpeechToText;

/// Build the provider selected in `config`.
pub fn from_config(config: &SttConfig) -> Arc<dyn SpeechToText> {
    match config.provider {
        SttProvider::Google => {
            if config.resolved_api_key().is_none() {
                log::warn!("stt: no API key configured; requests will likely be rejected");
            }
            Arc::new(GoogleSpeechClient::from_config(config))
        }
        SttProvider::Disabled => {
            log::warn!("stt: provider disabled; every evaluation will report a failed transcription");
            Arc::new(DisabledSpeechClient)
        }
    }
}
