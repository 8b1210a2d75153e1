//! Evaluation state machine.
//!
//! ```text
//! Started ──▶ Transcribing ──empty / error──▶ TranscriptionFailed
//!                          ──transcript────▶ Scoring ──▶ Completed
//! ```
//!
//! `TranscriptionFailed` and `Completed` are terminal.  There is no retry
//! edge: a failed transcription is reported, not repeated.

/// States of one speech evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationState {
    /// The request has been accepted; nothing has run yet.
    #[default]
    Started,

    /// The speech-to-text provider is processing the recording.
    Transcribing,

    /// The provider failed or recognised nothing.  Terminal.
    TranscriptionFailed,

    /// A transcript is available; sub-scores and feedback are being computed.
    Scoring,

    /// The result has been assembled.  Terminal.
    Completed,
}

impl EvaluationState {
    /// Returns `true` for states with no outgoing transition.
    ///
    /// ```
    /// use speech_tutor::pipeline::EvaluationState;
    ///
    /// assert!(!EvaluationState::Started.is_terminal());
    /// assert!(!EvaluationState::Transcribing.is_terminal());
    /// assert!(!EvaluationState::Scoring.is_terminal());
    /// assert!(EvaluationState::TranscriptionFailed.is_terminal());
    /// assert!(EvaluationState::Completed.is_terminal());
    /// ```
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EvaluationState::TranscriptionFailed | EvaluationState::Completed
        )
    }

    /// Whether the machine may move from `self` to `next`.
    pub fn can_transition_to(&self, next: EvaluationState) -> bool {
        use EvaluationState::*;
        matches!(
            (self, next),
            (Started, Transcribing)
                | (Transcribing, TranscriptionFailed)
                | (Transcribing, Scoring)
                | (Scoring, Completed)
        )
    }

    /// A short human-readable label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationState::Started => "started",
            EvaluationState::Transcribing => "transcribing",
            EvaluationState::TranscriptionFailed => "transcription-failed",
            EvaluationState::Scoring => "scoring",
            EvaluationState::Completed => "completed",
        }
    }
}

impl std::fmt::Display for EvaluationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
