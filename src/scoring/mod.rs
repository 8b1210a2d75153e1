//! Pure scoring of a recognised transcript against the expected line.
//!
//! # Flow
//!
//! ```text
//! recognised ─┬─▶ accuracy_score      (tokenised, multiset overlap)
//! expected  ──┼─▶ pronunciation_score (Jaro-Winkler on whole strings)
//!             └─▶ fluency_score       (word-count ratio)
//!                        │
//!                        ▼
//!                   SubScores ──▶ overall (0.4 / 0.4 / 0.2)
//!                        │
//!                        ▼
//!               generate_feedback ──▶ SpeechEvaluationResult
//! ```
//!
//! Nothing here performs I/O; every function is deterministic and safe to
//! call from any thread.

pub mod accuracy;
pub mod feedback;
pub mod fluency;
pub mod normalize;
pub mod pronunciation;
pub mod result;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use accuracy::{accuracy_from_tokens, accuracy_score};
pub use feedback::{generate_feedback, missed_words, FeedbackTier};
pub use fluency::{fluency_from_ratio, fluency_score};
pub use normalize::{tokenize, word_count};
pub use pronunciation::pronunciation_score;
pub use result::{SpeechEvaluationResult, SubScores, APOLOGY_FEEDBACK};

/// Compute the three sub-scores for one transcript.
pub fn sub_scores(recognized: &str, expected: &str) -> SubScores {
    SubScores {
        accuracy: accuracy_score(recognized, expected),
        pronunciation: pronunciation_score(recognized, expected),
        fluency: fluency_score(recognized, expected),
    }
}

/// Score `recognized` against `expected` and attach feedback.
///
/// ```
/// use speech_tutor::scoring::score_transcript;
///
/// let r = score_transcript("I like apples", "I like apples");
/// assert_eq!(r.overall_score, 100.0);
/// ```
pub fn score_transcript(recognized: &str, expected: &str) -> SpeechEvaluationResult {
    let scores = sub_scores(recognized, expected);
    let feedback = generate_feedback(&scores, recognized, expected);
    SpeechEvaluationResult::new(scores, feedback)
}
