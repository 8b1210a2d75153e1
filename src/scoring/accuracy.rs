//! Word-overlap accuracy between the recognised and expected lines.

use std::collections::HashMap;

use super::normalize::tokenize;

/// Percentage of expected words found in the recognised text.
///
/// Matching uses multiset semantics: every recognised occurrence can satisfy
/// at most one expected occurrence, so saying "apple" once does not cover
/// "apple apple".  Returns `0.0` when `expected` has no words.
///
/// ```
/// use speech_tutor::scoring::accuracy_score;
///
/// let score = accuracy_score("I like apple", "I like apples");
/// assert!((score - 200.0 / 3.0).abs() < 1e-9);
/// ```
pub fn accuracy_score(recognized: &str, expected: &str) -> f64 {
    accuracy_from_tokens(&tokenize(recognized), &tokenize(expected))
}

/// [`accuracy_score`] over already-tokenised input.
pub fn accuracy_from_tokens(recognized: &[String], expected: &[String]) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }

    let mut available: HashMap<&str, usize> = HashMap::with_capacity(recognized.len());
    for token in recognized {
        *available.entry(token.as_str()).or_insert(0) += 1;
    }

    let matching = expected
        .iter()
        .filter(|token| match available.get_mut(token.as_str()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
        .count();

    (matching as f64 / expected.len() as f64 * 100.0).min(100.0)
}
