//! Text normalisation shared by the accuracy scorer.
//!
//! Both the recognised transcript and the expected line go through the same
//! [`tokenize`] so that their tokens are comparable: lower-cased, split on
//! whitespace and punctuation.  Apostrophes inside a word are kept
//! (`"don't"` stays one token) because STT providers emit contractions as
//! single words.

use std::sync::LazyLock;

use regex::Regex;

/// A run of letters/digits, optionally joined by inner apostrophes.
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").expect("word pattern is valid")
});

/// Lower-case `text` and split it into word tokens, preserving order.
///
/// Empty or punctuation-only input yields an empty vector.
///
/// ```
/// use speech_tutor::scoring::tokenize;
///
/// assert_eq!(tokenize("I like apples."), vec!["i", "like", "apples"]);
/// assert!(tokenize("  ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().replace('’', "'"))
        .collect()
}

/// Number of whitespace-separated words, used by the fluency heuristic.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn punctuation_is_a_separator() {
        assert_eq!(
            tokenize("Hi, Tom! How are you?"),
            vec!["hi", "tom", "how", "are", "you"]
        );
        assert_eq!(tokenize("red,green"), vec!["red", "green"]);
    }

    #[test]
    fn contractions_stay_whole() {
        assert_eq!(tokenize("I don't know"), vec!["i", "don't", "know"]);
        assert_eq!(tokenize("It’s fine"), vec!["it's", "fine"]);
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("?!.").is_empty());
    }

    #[test]
    fn digits_are_tokens() {
        assert_eq!(tokenize("I am 7 years old"), vec!["i", "am", "7", "years", "old"]);
    }

    #[test]
    fn word_count_splits_on_whitespace_only() {
        assert_eq!(word_count("I like apples."), 3);
        assert_eq!(word_count("  spaced   out  "), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("red,green"), 1);
    }
}
