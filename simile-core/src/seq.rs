//! Fuzzy sequence equality by thresholded LCS length
//!
//! A pair of sequences is "fuzzy equal" when their LCS covers at least
//! 80% of the longer sequence. All three matching tiers reduce to this
//! single decision, differing only in how they tokenize their inputs
//! and which equivalence predicate they hand down to the LCS engine.

use crate::lcs::{lcs_len, lcs_len_with};

/// Fraction of the longer sequence the LCS must cover for a match.
pub const MATCH_THRESHOLD: f64 = 0.8;

/// True when `seq1` and `seq2` are fuzzy equal under the element type's
/// own equality.
///
/// Two empty sequences trivially match: the threshold over a longest
/// length of zero is zero. Callers that need empty inputs rejected
/// guard before calling (the word and sentence tiers do).
pub fn seq_match<T: PartialEq>(seq1: &[T], seq2: &[T]) -> bool {
    threshold_met(lcs_len(seq1, seq2), seq1.len(), seq2.len())
}

/// True when `seq1` and `seq2` are fuzzy equal with `eq` layered on top
/// of strict element equality (see [`lcs_len_with`]).
pub fn seq_match_with<T, F>(seq1: &[T], seq2: &[T], eq: F) -> bool
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    threshold_met(lcs_len_with(seq1, seq2, eq), seq1.len(), seq2.len())
}

fn threshold_met(lcs: usize, len1: usize, len2: usize) -> bool {
    let longest = len1.max(len2) as f64;
    lcs >= (longest * MATCH_THRESHOLD).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical_sequences_match() {
        assert!(seq_match(&chars("color"), &chars("color")));
    }

    #[test]
    fn test_near_miss_clears_threshold() {
        // lcs("quick", "qwick") = 4, threshold = floor(5 * 0.8) = 4
        assert!(seq_match(&chars("quick"), &chars("qwick")));
        // lcs("color", "colour") = 5, threshold = floor(6 * 0.8) = 4
        assert!(seq_match(&chars("color"), &chars("colour")));
    }

    #[test]
    fn test_below_threshold() {
        // lcs("cat", "dog") = 0
        assert!(!seq_match(&chars("cat"), &chars("dog")));
    }

    #[test]
    fn test_both_empty_is_degenerate_match() {
        assert!(seq_match::<char>(&[], &[]));
    }

    #[test]
    fn test_one_empty_fails_for_nonempty_other() {
        // threshold = floor(3 * 0.8) = 2 > lcs = 0
        assert!(!seq_match(&chars("cat"), &[]));
    }

    #[test]
    fn test_threshold_uses_longer_length() {
        // "ab" vs "abcdef": lcs = 2, threshold = floor(6 * 0.8) = 4
        assert!(!seq_match(&chars("ab"), &chars("abcdef")));
    }

    #[test]
    fn test_with_predicate() {
        let a = ["Fox", "Dog"];
        let b = ["fox", "dog"];
        assert!(!seq_match(&a, &b));
        assert!(seq_match_with(&a, &b, |x, y| x.eq_ignore_ascii_case(y)));
    }
}
