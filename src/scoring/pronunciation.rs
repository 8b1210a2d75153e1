//! Surface-orthography pronunciation proxy.
//!
//! There is no acoustic model here: the recognised and expected lines are
//! compared as whole lower-cased strings with Jaro-Winkler similarity.  A
//! partially misrecognised word ("apple" for "apples") still earns most of
//! the credit, unlike in the accuracy scorer.

/// Jaro-Winkler similarity of the lower-cased lines, scaled to `[0, 100]`.
///
/// Two empty strings are identical and score `100.0`; one empty string
/// against a non-empty one scores `0.0`.
pub fn pronunciation_score(recognized: &str, expected: &str) -> f64 {
    let recognized = recognized.to_lowercase();
    let expected = expected.to_lowercase();
    (strsim::jaro_winkler(&recognized, &expected) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(pronunciation_score("I like apples", "I like apples"), 100.0);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(pronunciation_score("I LIKE APPLES", "i like apples"), 100.0);
    }

    #[test]
    fn both_empty_scores_100() {
        assert_eq!(pronunciation_score("", ""), 100.0);
    }

    #[test]
    fn one_empty_scores_0() {
        assert_eq!(pronunciation_score("", "hello"), 0.0);
        assert_eq!(pronunciation_score("hello", ""), 0.0);
    }

    #[test]
    fn near_miss_is_forgiving() {
        let score = pronunciation_score("I like apple", "I like apples");
        assert!(score > 90.0 && score < 100.0, "{score}");
    }

    #[test]
    fn unrelated_text_scores_low() {
        let near = pronunciation_score("I like apple", "I like apples");
        let far = pronunciation_score("zebra", "I like apples");
        assert!(far < near);
        assert!(far < 70.0, "{far}");
    }
}
