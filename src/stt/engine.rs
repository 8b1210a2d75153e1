//! Core speech-to-text trait and error type.
//!
//! [`SpeechToText`] is the capability the evaluation pipeline is built
//! against.  It is object-safe and `Send + Sync` so it can be held behind an
//! `Arc<dyn SpeechToText>` and shared by every concurrent request.
//!
//! Implementations:
//!
//! * [`GoogleSpeechClient`](crate::stt::GoogleSpeechClient): production REST
//!   client.
//! * [`DisabledSpeechClient`]: always fails; used when no provider is
//!   configured so the service still starts.
//! * [`MockSpeechToText`] (test-only): returns a pre-configured response.

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// SttError
// ---------------------------------------------------------------------------

/// All errors that can arise from a speech-to-text provider.
#[derive(Debug, Clone, Error)]
pub enum SttError {
    /// The supplied audio contained no bytes.
    #[error("audio is empty")]
    EmptyAudio,

    /// HTTP transport or connection error.
    #[error("STT request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("STT request timed out")]
    Timeout,

    /// The provider answered with a non-success status.
    #[error("STT provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider's response could not be parsed.
    #[error("failed to parse STT response: {0}")]
    Parse(String),

    /// The provider recognised nothing in the recording.
    #[error("no speech recognised")]
    EmptyTranscript,

    /// No provider is configured.
    #[error("speech-to-text is disabled")]
    Disabled,

    /// Reading the recording from disk failed.
    #[error("cannot read audio: {0}")]
    Io(String),
}

impl From<reqwest::Error> for SttError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SttError::Timeout
        } else if e.is_decode() {
            SttError::Parse(e.to_string())
        } else {
            SttError::Request(e.to_string())
        }
    }
}

impl From<std::io::Error> for SttError {
    fn from(e: std::io::Error) -> Self {
        SttError::Io(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// SpeechToText trait
// ---------------------------------------------------------------------------

/// Converts one complete recorded utterance into text.
///
/// `audio` is the raw content of the uploaded recording (a WAV file in the
/// configured encoding and sample rate).  The implementation must not retain
/// the buffer beyond the call.
///
/// Retries, if any, belong inside the implementation; callers treat every
/// `Err(_)` the same way.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe `audio` and return the recognised text.
    async fn transcribe(&self, audio: &[u8]) -> Result<String, SttError>;
}

// Compile-time assertion: Box<dyn SpeechToText> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechToText>) {}
};

// ---------------------------------------------------------------------------
// DisabledSpeechClient
// ---------------------------------------------------------------------------

/// Stand-in provider that always reports [`SttError::Disabled`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSpeechClient;

#[async_trait]
impl SpeechToText for DisabledSpeechClient {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String, SttError> {
        Err(SttError::Disabled)
    }
}

// ---------------------------------------------------------------------------
// MockSpeechToText  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response without any network
/// access.
#[cfg(test)]
pub struct MockSpeechToText {
    response: Result<String, SttError>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockSpeechToText {
    /// Create a mock that always returns `Ok(text)`.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: SttError) -> Self {
        Self {
            response: Err(error),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of times `transcribe` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechToText for MockSpeechToText {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, SttError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if audio.is_empty() {
            return Err(SttError::EmptyAudio);
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const AUDIO: &[u8] = b"RIFF....WAVEfmt ";

    #[tokio::test]
    async fn mock_ok_returns_configured_text() {
        let engine = MockSpeechToText::ok("I like apples");
        assert_eq!(engine.transcribe(AUDIO).await.unwrap(), "I like apples");
        assert_eq!(engine.calls(), 1);
    }

    #[tokio::test]
    async fn mock_err_returns_configured_error() {
        let engine = MockSpeechToText::err(SttError::Timeout);
        let err = engine.transcribe(AUDIO).await.unwrap_err();
        assert!(matches!(err, SttError::Timeout));
    }

    #[tokio::test]
    async fn mock_rejects_empty_audio() {
        let engine = MockSpeechToText::ok("text");
        let err = engine.transcribe(&[]).await.unwrap_err();
        assert!(matches!(err, SttError::EmptyAudio));
    }

    #[tokio::test]
    async fn disabled_client_always_fails() {
        let err = DisabledSpeechClient.transcribe(AUDIO).await.unwrap_err();
        assert!(matches!(err, SttError::Disabled));
    }

    #[tokio::test]
    async fn box_dyn_speech_to_text_compiles() {
        let engine: Box<dyn SpeechToText> = Box::new(MockSpeechToText::ok("ok"));
        assert!(engine.transcribe(AUDIO).await.is_ok());
    }

    #[test]
    fn api_error_display_includes_status() {
        let e = SttError::Api {
            status: 403,
            message: "quota exceeded".into(),
        };
        let text = e.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("quota exceeded"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.wav");
        let e: SttError = io.into();
        assert!(matches!(e, SttError::Io(ref m) if m.contains("missing.wav")));
    }
}
