//! Score value types returned by the evaluation pipeline.

use serde::{Deserialize, Serialize};

/// Weight of accuracy in [`SubScores::overall`].
pub const ACCURACY_WEIGHT: f64 = 0.4;
/// Weight of pronunciation in [`SubScores::overall`].
pub const PRONUNCIATION_WEIGHT: f64 = 0.4;
/// Weight of fluency in [`SubScores::overall`].
pub const FLUENCY_WEIGHT: f64 = 0.2;

/// Feedback shown when no transcript could be obtained.
pub const APOLOGY_FEEDBACK: &str = "Sorry, I couldn't hear you. Please try again.";

// ---------------------------------------------------------------------------
// SubScores
// ---------------------------------------------------------------------------

/// The three independent scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubScores {
    pub accuracy: f64,
    pub pronunciation: f64,
    pub fluency: f64,
}

impl SubScores {
    /// Weighted score reported to the learner: `0.4·a + 0.4·p + 0.2·f`.
    pub fn overall(&self) -> f64 {
        ACCURACY_WEIGHT * self.accuracy
            + PRONUNCIATION_WEIGHT * self.pronunciation
            + FLUENCY_WEIGHT * self.fluency
    }

    /// Unweighted mean used only to pick the feedback tier.
    ///
    /// Intentionally not [`overall`](Self::overall): the two formulas can
    /// place the same attempt in different bands.
    pub fn tier_average(&self) -> f64 {
        (self.accuracy + self.pronunciation + self.fluency) / 3.0
    }
}

// ---------------------------------------------------------------------------
// SpeechEvaluationResult
// ---------------------------------------------------------------------------

/// Outcome of one evaluation, serialised as the public JSON contract
/// `{accuracy, pronunciation, fluency, overall_score, feedback}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechEvaluationResult {
    pub accuracy: f64,
    pub pronunciation: f64,
    pub fluency: f64,
    pub overall_score: f64,
    pub feedback: String,
}

impl SpeechEvaluationResult {
    /// Assemble a result from sub-scores and generated feedback.
    pub fn new(scores: SubScores, feedback: String) -> Self {
        Self {
            accuracy: scores.accuracy,
            pronunciation: scores.pronunciation,
            fluency: scores.fluency,
            overall_score: scores.overall(),
            feedback,
        }
    }

    /// All-zero result with the apology message, for failed transcriptions.
    pub fn transcription_failed() -> Self {
        Self {
            accuracy: 0.0,
            pronunciation: 0.0,
            fluency: 0.0,
            overall_score: 0.0,
            feedback: APOLOGY_FEEDBACK.to_string(),
        }
    }
}
