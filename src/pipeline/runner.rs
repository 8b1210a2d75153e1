//! Evaluation orchestrator: drives one recording through STT and scoring.
//!
//! [`SpeechEvaluator`] holds the injected [`SpeechToText`] provider and is
//! cheap to share: every call to [`evaluate`](SpeechEvaluator::evaluate) is
//! independent and keeps no state between requests.
//!
//! # Flow
//!
//! ```text
//! Started
//!   └─▶ Transcribing: tokio::spawn(stt.transcribe(audio))
//!         ├─ Err / panic / blank transcript → TranscriptionFailed (zero scores)
//!         └─ transcript                     → Scoring
//!               └─▶ score_transcript(transcript, expected) → Completed
//! ```
//!
//! A failed transcription is a normal outcome, never an `Err`.

use std::path::Path;
use std::sync::Arc;

use crate::scoring::{score_transcript, SpeechEvaluationResult};
use crate::stt::{SpeechToText, SttError};

use super::state::EvaluationState;

// ---------------------------------------------------------------------------
// EvaluationOutcome
// ---------------------------------------------------------------------------

/// Everything one evaluation produced, including how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationOutcome {
    /// Terminal state reached (`Completed` or `TranscriptionFailed`).
    pub state: EvaluationState,
    /// What the provider recognised, when it recognised anything.
    pub transcript: Option<String>,
    /// The scores returned to the caller.
    pub result: SpeechEvaluationResult,
}

// ---------------------------------------------------------------------------
// SpeechEvaluator
// ---------------------------------------------------------------------------

/// Scores a learner's recording against the line they were asked to say.
///
/// ```rust,no_run
/// use speech_tutor::config::AppConfig;
/// use speech_tutor::pipeline::SpeechEvaluator;
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let evaluator = SpeechEvaluator::new(speech_tutor::stt::from_config(&config.stt));
///
/// let wav = std::fs::read("attempt.wav").unwrap();
/// let result = evaluator.evaluate(&wav, "I like apples").await;
/// println!("{} - {}", result.overall_score, result.feedback);
/// # }
/// ```
#[derive(Clone)]
pub struct SpeechEvaluator {
    stt: Arc<dyn SpeechToText>,
}

impl std::fmt::Debug for SpeechEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechEvaluator").finish_non_exhaustive()
    }
}

impl SpeechEvaluator {
    pub fn new(stt: Arc<dyn SpeechToText>) -> Self {
        Self { stt }
    }

    /// Evaluate `audio` against `expected_text` and return only the scores.
    pub async fn evaluate(&self, audio: &[u8], expected_text: &str) -> SpeechEvaluationResult {
        self.run(audio, expected_text).await.result
    }

    /// Read a recording from disk and evaluate it.
    ///
    /// An unreadable file is reported the same way as a failed transcription.
    pub async fn evaluate_file(
        &self,
        path: impl AsRef<Path>,
        expected_text: &str,
    ) -> SpeechEvaluationResult {
        let path = path.as_ref();
        match read_recording(path).await {
            Ok(audio) => self.evaluate(&audio, expected_text).await,
            Err(e) => {
                log::warn!("evaluate: {}: {e}", path.display());
                SpeechEvaluationResult::transcription_failed()
            }
        }
    }

    /// Evaluate and report the terminal state and transcript as well.
    pub async fn run(&self, audio: &[u8], expected_text: &str) -> EvaluationOutcome {
        let mut run = Run::default();

        run.advance(EvaluationState::Transcribing);
        let transcript = match self.transcribe(audio).await {
            Some(text) => text,
            None => {
                run.advance(EvaluationState::TranscriptionFailed);
                return EvaluationOutcome {
                    state: run.state,
                    transcript: None,
                    result: SpeechEvaluationResult::transcription_failed(),
                };
            }
        };

        run.advance(EvaluationState::Scoring);
        log::debug!("evaluate: recognised {transcript:?}, expected {expected_text:?}");
        let result = score_transcript(&transcript, expected_text);

        run.advance(EvaluationState::Completed);
        log::debug!(
            "evaluate: accuracy={:.1} pronunciation={:.1} fluency={:.1} overall={:.1}",
            result.accuracy,
            result.pronunciation,
            result.fluency,
            result.overall_score
        );

        EvaluationOutcome {
            state: run.state,
            transcript: Some(transcript),
            result,
        }
    }

    /// Run the provider on its own task so that a panic inside it is
    /// contained.  `None` means "no transcript".
    async fn transcribe(&self, audio: &[u8]) -> Option<String> {
        let stt = Arc::clone(&self.stt);
        let audio = audio.to_vec();

        match tokio::spawn(async move { stt.transcribe(&audio).await }).await {
            Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
            Ok(Ok(_)) => {
                log::warn!("evaluate: provider returned a blank transcript");
                None
            }
            Ok(Err(e)) => {
                log::warn!("evaluate: transcription failed: {e}");
                None
            }
            Err(e) => {
                log::error!("evaluate: transcription task aborted: {e}");
                None
            }
        }
    }
}

async fn read_recording(path: &Path) -> Result<Vec<u8>, SttError> {
    Ok(tokio::fs::read(path).await?)
}

// ---------------------------------------------------------------------------
// Per-call state tracking
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Run {
    state: EvaluationState,
}

impl Run {
    fn advance(&mut self, next: EvaluationState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} → {}",
            self.state,
            next
        );
        log::debug!("evaluate: {} → {}", self.state, next);
        self.state = next;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
