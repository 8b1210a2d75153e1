//! Tiered, child-friendly feedback text.
//!
//! The feedback always opens with one encouragement sentence chosen by
//! [`FeedbackTier`], then adds up to three hints for whichever sub-score is
//! below [`HINT_THRESHOLD`].

use std::collections::HashSet;

use super::result::SubScores;

/// Sub-scores below this value trigger their hint sentence.
pub const HINT_THRESHOLD: f64 = 70.0;

/// How many missed words the accuracy hint names at most.
pub const MAX_MISSED_WORDS: usize = 3;

const PRONUNCIATION_HINT: &str = "Try to say each word a little more clearly.";
const FLUENCY_HINT: &str = "Try to speak at a natural pace, not too fast and not too slow.";

// ---------------------------------------------------------------------------
// FeedbackTier
// ---------------------------------------------------------------------------

/// Encouragement band selected from [`SubScores::tier_average`].
///
/// | Tier        | Average      |
/// |-------------|--------------|
/// | `Excellent` | ≥ 90         |
/// | `Good`      | ≥ 70, < 90   |
/// | `Fair`      | ≥ 50, < 70   |
/// | `Retry`     | < 50         |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Excellent,
    Good,
    Fair,
    Retry,
}

impl FeedbackTier {
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Self::Excellent
        } else if average >= 70.0 {
            Self::Good
        } else if average >= 50.0 {
            Self::Fair
        } else {
            Self::Retry
        }
    }

    /// The encouragement sentence for this tier.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work! 👏",
            Self::Good => "Nice try! Keep practicing and you'll get even better. 👍",
            Self::Fair => "You're doing well! Let's practice a little more. 😊",
            Self::Retry => "Thanks for trying! Let's say it again slowly together. ⭐",
        }
    }
}

// ---------------------------------------------------------------------------
// Feedback generation
// ---------------------------------------------------------------------------

/// Build the feedback string for one evaluated attempt.
///
/// The result is never empty: it always contains the tier sentence.
///
/// ```
/// use speech_tutor::scoring::{generate_feedback, FeedbackTier, SubScores};
///
/// let perfect = SubScores { accuracy: 100.0, pronunciation: 100.0, fluency: 100.0 };
/// let text = generate_feedback(&perfect, "I like apples", "I like apples");
/// assert_eq!(text, FeedbackTier::Excellent.message());
/// ```
pub fn generate_feedback(scores: &SubScores, recognized: &str, expected: &str) -> String {
    let mut sentences: Vec<String> =
        vec![FeedbackTier::from_average(scores.tier_average()).message().to_string()];

    if scores.accuracy < HINT_THRESHOLD {
        let missed = missed_words(recognized, expected);
        if !missed.is_empty() {
            let shown: Vec<&str> = missed
                .iter()
                .take(MAX_MISSED_WORDS)
                .map(String::as_str)
                .collect();
            sentences.push(format!("Let's practice these words: '{}'.", shown.join(", ")));
        }
    }

    if scores.pronunciation < HINT_THRESHOLD {
        sentences.push(PRONUNCIATION_HINT.to_string());
    }

    if scores.fluency < HINT_THRESHOLD {
        sentences.push(FLUENCY_HINT.to_string());
    }

    sentences.join(" ")
}

/// Expected words that never appear in the recognised text.
///
/// Words are compared case-insensitively after a plain whitespace split, so
/// punctuation stays attached (`"apples."` and `"apples"` differ).  Each
/// missed word is listed once, in the order it first appears in `expected`.
pub fn missed_words(recognized: &str, expected: &str) -> Vec<String> {
    let heard: HashSet<String> = simple_words(recognized).collect();
    let mut seen = HashSet::new();

    simple_words(expected)
        .filter(|w| !heard.contains(w))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

fn simple_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: f64) -> SubScores {
        SubScores {
            accuracy: score,
            pronunciation: score,
            fluency: score,
        }
    }

    // ---- FeedbackTier::from_average ---

    #[test]
    fn tier_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(FeedbackTier::from_average(100.0), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::from_average(90.0), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::from_average(89.99), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_average(70.0), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_average(69.99), FeedbackTier::Fair);
        assert_eq!(FeedbackTier::from_average(50.0), FeedbackTier::Fair);
        assert_eq!(FeedbackTier::from_average(49.99), FeedbackTier::Retry);
        assert_eq!(FeedbackTier::from_average(0.0), FeedbackTier::Retry);
    }

    #[test]
    fn tier_messages_are_distinct_and_non_empty() {
        let tiers = [
            FeedbackTier::Excellent,
            FeedbackTier::Good,
            FeedbackTier::Fair,
            FeedbackTier::Retry,
        ];
        let messages: HashSet<&str> = tiers.iter().map(|t| t.message()).collect();
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().all(|m| !m.is_empty()));
    }

    // ---- generate_feedback: tier sentence ---

    #[test]
    fn feedback_starts_with_tier_sentence_at_each_boundary() {
        let cases = [
            (90.0, FeedbackTier::Excellent),
            (89.9, FeedbackTier::Good),
            (70.0, FeedbackTier::Good),
            (69.9, FeedbackTier::Fair),
            (50.0, FeedbackTier::Fair),
            (49.9, FeedbackTier::Retry),
        ];
        for (score, tier) in cases {
            let text = generate_feedback(&uniform(score), "a b c", "a b c");
            assert!(
                text.starts_with(tier.message()),
                "score {score}: {text:?}"
            );
        }
    }

    #[test]
    fn perfect_attempt_gets_praise_only() {
        let text = generate_feedback(&uniform(100.0), "I like apples", "I like apples");
        assert_eq!(text, FeedbackTier::Excellent.message());
    }

    #[test]
    fn tier_uses_unweighted_average() {
        // Weighted overall = 0.4*100 + 0.4*100 + 0.2*55 = 91 (Excellent),
        // unweighted average = 85 (Good).
        let scores = SubScores {
            accuracy: 100.0,
            pronunciation: 100.0,
            fluency: 55.0,
        };
        let text = generate_feedback(&scores, "x", "x");
        assert!(text.starts_with(FeedbackTier::Good.message()), "{text}");
    }

    // ---- generate_feedback: hints ---

    #[test]
    fn low_accuracy_names_missed_word() {
        let scores = SubScores {
            accuracy: 66.7,
            pronunciation: 98.0,
            fluency: 100.0,
        };
        let text = generate_feedback(&scores, "I like apple", "I like apples");
        assert!(text.contains("'apples'"), "{text}");
        assert!(!text.contains(PRONUNCIATION_HINT));
        assert!(!text.contains(FLUENCY_HINT));
    }

    #[test]
    fn missed_word_list_is_capped_at_three() {
        let scores = SubScores {
            accuracy: 0.0,
            pronunciation: 80.0,
            fluency: 80.0,
        };
        let text = generate_feedback(&scores, "", "one two three four five");
        assert!(text.contains("'one, two, three'"), "{text}");
        assert!(!text.contains("four"));
    }

    #[test]
    fn low_accuracy_without_missed_words_adds_nothing() {
        // All expected words appear (as a set), but accuracy was reported low.
        let scores = SubScores {
            accuracy: 50.0,
            pronunciation: 90.0,
            fluency: 90.0,
        };
        let text = generate_feedback(&scores, "very good", "very very good");
        assert_eq!(text, FeedbackTier::Good.message());
    }

    #[test]
    fn all_hints_in_order() {
        let scores = uniform(10.0);
        let text = generate_feedback(&scores, "cat", "dog");
        let expected = format!(
            "{} Let's practice these words: 'dog'. {} {}",
            FeedbackTier::Retry.message(),
            PRONUNCIATION_HINT,
            FLUENCY_HINT
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn threshold_70_is_not_low() {
        let text = generate_feedback(&uniform(70.0), "cat", "dog");
        assert_eq!(text, FeedbackTier::Good.message());
    }

    #[test]
    fn feedback_never_empty() {
        for score in [0.0, 25.0, 49.0, 50.0, 75.0, 95.0] {
            assert!(!generate_feedback(&uniform(score), "", "").is_empty());
        }
    }

    // ---- missed_words ---

    #[test]
    fn missed_words_is_case_insensitive() {
        assert!(missed_words("HELLO there", "hello There").is_empty());
    }

    #[test]
    fn missed_words_deduplicates_in_order() {
        assert_eq!(
            missed_words("", "big red big dog"),
            vec!["big", "red", "dog"]
        );
    }

    #[test]
    fn missed_words_keeps_attached_punctuation() {
        assert_eq!(
            missed_words("hi tom", "Hi, Tom. I like apples."),
            vec!["hi,", "tom.", "i", "like", "apples."]
        );
        assert!(missed_words("Hello, Tom.", "hello, tom.").is_empty());
    }

    #[test]
    fn practice_hint_lists_first_three_raw_words() {
        let scores = SubScores {
            accuracy: 0.0,
            pronunciation: 100.0,
            fluency: 100.0,
        };
        let text = generate_feedback(&scores, "hi tom", "Hi, Tom. I like apples.");
        assert!(text.contains("'hi,, tom., i'"), "{text}");
    }
}
