//! Fuzzy text equality through layered longest-common-subsequence matching
//!
//! Two pieces of text are "fuzzy equal" when their longest common
//! subsequence covers at least 80% of the longer of the two. This crate
//! applies that one decision at three escalating granularities:
//!
//! - **Word**: character-level LCS over lower-cased, alpha-stripped words,
//!   memoized per unordered word pair for the process lifetime.
//! - **Sentence**: word-level LCS where element equality is itself a
//!   recursive fuzzy word match.
//! - **Text**: sentence-level LCS over fragment splits of decreasing
//!   strictness (sentence punctuation, phrase punctuation, bare alphabetic
//!   runs), short-circuiting on the first tier that matches.
//!
//! # Example
//!
//! ```rust
//! use simile_core::{sentence_match, word_match};
//!
//! assert!(word_match("Cat", "cat!"));
//! assert!(word_match("color", "colour"));
//! assert!(sentence_match("the quick brown fox", "the qwick brown fox"));
//! ```
//!
//! The free functions share one process-wide [`FuzzyMatcher`] (and thus
//! one word-pair cache). Embedders that want an isolated cache construct
//! their own [`FuzzyMatcher`].

#![warn(missing_docs)]

pub mod cache;
pub mod lcs;
pub mod matcher;
pub mod seq;
pub mod split;

use std::fmt::Display;
use std::sync::OnceLock;

pub use cache::WordCache;
pub use lcs::{lcs_len, lcs_len_with};
pub use matcher::FuzzyMatcher;
pub use seq::{seq_match, seq_match_with, MATCH_THRESHOLD};
pub use split::{alpha_seq, char_seq, phrase_seq, sentence_seq, strip_non_alpha, word_seq};

/// The process-wide matcher backing the free functions.
fn default_matcher() -> &'static FuzzyMatcher {
    static MATCHER: OnceLock<FuzzyMatcher> = OnceLock::new();
    MATCHER.get_or_init(FuzzyMatcher::new)
}

/// Fuzzy equality of two single words. See [`FuzzyMatcher::word_match`].
pub fn word_match(word1: &str, word2: &str) -> bool {
    default_matcher().word_match(word1, word2)
}

/// Fuzzy equality of two sentences. See [`FuzzyMatcher::sentence_match`].
pub fn sentence_match(sent1: &str, sent2: &str) -> bool {
    default_matcher().sentence_match(sent1, sent2)
}

/// Fuzzy equality of two multi-sentence texts. See
/// [`FuzzyMatcher::text_match`].
pub fn text_match(text1: &str, text2: &str) -> bool {
    default_matcher().text_match(text1, text2)
}

/// Fuzzy equality at whichever granularity applies. See
/// [`FuzzyMatcher::lang_match`].
pub fn lang_match(input1: &str, input2: &str) -> bool {
    default_matcher().lang_match(input1, input2)
}

/// Fuzzy equality over the display form of any two values. See
/// [`FuzzyMatcher::any_match`].
pub fn any_match<A: Display, B: Display>(value1: A, value2: B) -> bool {
    default_matcher().any_match(value1, value2)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests in this binary run in parallel and all free functions feed
    // the same process-wide cache, so assertions here stay insensitive
    // to interleaving; the exact no-recompute accounting is covered in
    // matcher::tests against a private instance.
    #[test]
    fn test_free_functions_share_one_cache() {
        assert!(word_match("color", "colour"));
        assert!(word_match("colour", "color"));
        assert!(default_matcher().cache_len() >= 1);
    }

    #[test]
    fn test_crate_surface_round_trip() {
        let a = char_seq("ABCBDAB");
        let b = char_seq("BDCABA");
        assert_eq!(lcs_len(&a, &b), 4);
        assert!(text_match("Hi! Bye.", "Hi, Bye"));
        assert!(lang_match("Cat", "cat"));
        assert!(any_match(7, "7"));
    }
}
