//! Length-ratio fluency heuristic.
//!
//! This is a pacing proxy only: it compares how many words were recognised
//! against how many were expected and knows nothing about timing or pauses.

use super::normalize::word_count;

/// Lower edge of the ratio band that earns the high (80–100) curve.
pub const BAND_LOW: f64 = 0.8;
/// Upper edge of the ratio band that earns the high (80–100) curve.
pub const BAND_HIGH: f64 = 1.2;

/// Fluency in `[0, 100]` from the recognised/expected word-count ratio.
///
/// Inside `[0.8, 1.2]` the score is `80 + 20·(1 − |1 − ratio|)`, peaking at
/// exactly 100 for equal lengths.  Outside the band it falls to
/// `60·(1 − min(1, |ratio − 1|))`, reaching 0 once the lengths differ by a
/// factor of two or more.  The curve is discontinuous at the band edges.
pub fn fluency_score(recognized: &str, expected: &str) -> f64 {
    let expected_len = word_count(expected);
    let ratio = if expected_len == 0 {
        0.0
    } else {
        word_count(recognized) as f64 / expected_len as f64
    };
    fluency_from_ratio(ratio)
}

/// The fluency curve as a function of the word-count ratio.
pub fn fluency_from_ratio(ratio: f64) -> f64 {
    let deviation = (1.0 - ratio).abs();
    let score = if (BAND_LOW..=BAND_HIGH).contains(&ratio) {
        80.0 + 20.0 * (1.0 - deviation)
    } else {
        60.0 * (1.0 - deviation.min(1.0))
    };
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn equal_lengths_score_exactly_100() {
        assert_eq!(fluency_from_ratio(1.0), 100.0);
        assert_eq!(fluency_score("one two three", "uno dos tres"), 100.0);
    }

    #[test]
    fn band_edges_score_96() {
        assert!(approx(fluency_from_ratio(0.8), 96.0));
        assert!(approx(fluency_from_ratio(1.2), 96.0));
    }

    #[test]
    fn just_outside_band_drops_to_low_curve() {
        // ratio 0.75 → 60 * (1 - 0.25) = 45
        assert!(approx(fluency_score("a b c", "a b c d"), 45.0));
        // ratio 1.25 → 45
        assert!(approx(fluency_score("a b c d e", "a b c d"), 45.0));
    }

    #[test]
    fn two_thirds_ratio() {
        // ratio 2/3 → 60 * (1 - 1/3) = 40
        assert!(approx(fluency_score("I like", "I like apples"), 40.0));
    }

    #[test]
    fn large_mismatch_floors_at_zero() {
        assert_eq!(fluency_from_ratio(2.0), 0.0);
        assert_eq!(fluency_from_ratio(5.0), 0.0);
        assert_eq!(fluency_from_ratio(0.0), 0.0);
    }

    #[test]
    fn empty_expected_scores_zero() {
        assert_eq!(fluency_score("some words here", ""), 0.0);
        assert_eq!(fluency_score("", ""), 0.0);
    }

    #[test]
    fn punctuation_attached_words_count_once() {
        assert_eq!(fluency_score("I like apples.", "I like apples"), 100.0);
    }

    #[test]
    fn always_within_range() {
        for i in 0..=40 {
            let ratio = i as f64 * 0.1;
            let s = fluency_from_ratio(ratio);
            assert!((0.0..=100.0).contains(&s), "ratio {ratio} → {s}");
        }
    }
}
