//! The three escalating fuzzy-match tiers
//!
//! A [`FuzzyMatcher`] decides fuzzy equality at three granularities,
//! each built on the one below it:
//!
//! - **word**: character-level LCS over normalized words, memoized;
//! - **sentence**: word-level LCS where element equality is itself a
//!   recursive word match;
//! - **text**: sentence-level LCS over progressively looser fragment
//!   splits, short-circuiting on the first tier that matches.
//!
//! All methods take `&self` and are safe to call from multiple threads;
//! the only shared state is the word-pair cache.

use std::fmt::Display;

use tracing::{debug, trace};

use crate::cache::WordCache;
use crate::seq::{seq_match, seq_match_with};
use crate::split::{
    alpha_seq, char_seq, phrase_seq, sentence_seq, strip_non_alpha, word_seq,
};

/// Layered fuzzy text matcher owning a word-pair memoization cache.
///
/// Construct one per process (or use the crate-level free functions,
/// which share a single process-wide instance) so that repeated word
/// comparisons amortize across calls.
#[derive(Debug, Default)]
pub struct FuzzyMatcher {
    cache: WordCache,
}

impl FuzzyMatcher {
    /// Create a matcher with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuzzy equality of two single words.
    ///
    /// Both inputs are lower-cased and stripped to ASCII letters before
    /// comparison; a word that normalizes to nothing never matches.
    /// Identical normalized words match without touching the cache.
    pub fn word_match(&self, word1: &str, word2: &str) -> bool {
        let word1 = strip_non_alpha(&word1.to_lowercase());
        let word2 = strip_non_alpha(&word2.to_lowercase());
        if word1.is_empty() || word2.is_empty() {
            return false;
        }
        if word1 == word2 {
            return true;
        }
        if let Some(matched) = self.cache.get(&word1, &word2) {
            return matched;
        }
        let matched = seq_match(&char_seq(&word1), &char_seq(&word2));
        trace!(%word1, %word2, matched, "memoizing word pair");
        self.cache.insert(&word1, &word2, matched);
        matched
    }

    /// Fuzzy equality of two sentences.
    ///
    /// Word sequences are compared by LCS where "equal" words are
    /// decided by [`FuzzyMatcher::word_match`]. Empty inputs never
    /// match.
    pub fn sentence_match(&self, sent1: &str, sent2: &str) -> bool {
        if sent1.is_empty() || sent2.is_empty() {
            return false;
        }
        let sent1 = sent1.to_lowercase();
        let sent2 = sent2.to_lowercase();
        seq_match_with(&word_seq(&sent1), &word_seq(&sent2), |a, b| {
            self.word_match(a, b)
        })
    }

    /// Fuzzy equality of two multi-sentence texts.
    ///
    /// Escalates through three fragment splits — sentence delimiters,
    /// then phrase delimiters, then bare alphabetic runs — and returns
    /// true on the first split whose fragment sequences fuzzy-match.
    /// Coarse splits catch texts with preserved structure; the final
    /// alpha-only pass tolerates completely different punctuation.
    pub fn text_match(&self, text1: &str, text2: &str) -> bool {
        if seq_match_with(&sentence_seq(text1), &sentence_seq(text2), |a, b| {
            self.sentence_match(a, b)
        }) {
            return true;
        }
        debug!("sentence fragments differ, retrying on phrase fragments");
        if seq_match_with(&phrase_seq(text1), &phrase_seq(text2), |a, b| {
            self.sentence_match(a, b)
        }) {
            return true;
        }
        debug!("phrase fragments differ, retrying on alphabetic fragments");
        seq_match_with(&alpha_seq(text1), &alpha_seq(text2), |a, b| {
            self.sentence_match(a, b)
        })
    }

    /// Fuzzy equality at whichever granularity applies.
    ///
    /// Tries the word, sentence, and text tiers in order and returns
    /// true on the first success. For callers that do not know in
    /// advance whether their inputs are words, sentences, or texts.
    pub fn lang_match(&self, input1: &str, input2: &str) -> bool {
        self.word_match(input1, input2)
            || self.sentence_match(input1, input2)
            || self.text_match(input1, input2)
    }

    /// [`FuzzyMatcher::lang_match`] over the display form of any two
    /// values.
    pub fn any_match<A: Display, B: Display>(&self, value1: A, value2: B) -> bool {
        self.lang_match(&value1.to_string(), &value2.to_string())
    }

    /// Number of word pairs memoized so far.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Word-pair lookups answered without recomputation.
    pub fn cache_hits(&self) -> u64 {
        self.cache.hits()
    }

    /// Word-pair lookups that had to compute a fresh result.
    pub fn cache_misses(&self) -> u64 {
        self.cache.misses()
    }
}
