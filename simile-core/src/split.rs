//! String normalization and splitting primitives
//!
//! A fixed rule set of character-class splits shared by the matching
//! tiers. All splits keep the delimited substrings — including empty
//! ones produced by adjacent delimiters — and drop the delimiters
//! themselves; splitting the empty string yields a single empty
//! fragment. The patterns are compiled once on first use.

use std::sync::OnceLock;

use regex::Regex;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn sentence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[;!.?]+").expect("sentence pattern is valid"))
}

fn phrase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[:;,!.?]+").expect("phrase pattern is valid"))
}

fn non_alpha_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-zA-Z]").expect("non-alpha pattern is valid"))
}

fn non_alpha_keep_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z\s]").expect("non-alpha pattern is valid"))
}

/// Decompose a string into its character sequence.
pub fn char_seq(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Split on runs of whitespace into word tokens.
pub fn word_seq(s: &str) -> Vec<&str> {
    whitespace_re().split(s).collect()
}

/// Split on runs of sentence-ending punctuation (`;`, `!`, `.`, `?`)
/// into sentence fragments.
pub fn sentence_seq(s: &str) -> Vec<&str> {
    sentence_re().split(s).collect()
}

/// Split on runs of the broader phrase punctuation class
/// (`:`, `;`, `,`, `!`, `.`, `?`) into phrase fragments.
pub fn phrase_seq(s: &str) -> Vec<&str> {
    phrase_re().split(s).collect()
}

/// Split on every character that is not an ASCII letter or whitespace.
///
/// The class is deliberately unquantified, so a run of punctuation
/// yields empty fragments between its characters. This is the loosest
/// tokenization the text tier falls back to.
pub fn alpha_seq(s: &str) -> Vec<&str> {
    non_alpha_keep_space_re().split(s).collect()
}

/// Remove every character that is not an ASCII letter.
///
/// Used to normalize single words before comparison; whitespace gets
/// no exception here.
pub fn strip_non_alpha(s: &str) -> String {
    non_alpha_re().replace_all(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_seq() {
        assert_eq!(char_seq("cat"), vec!['c', 'a', 't']);
        assert_eq!(char_seq(""), Vec::<char>::new());
    }

    #[test]
    fn test_word_seq_collapses_whitespace_runs() {
        assert_eq!(word_seq("the quick\t brown\n fox"), vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_word_seq_keeps_leading_empty_token() {
        assert_eq!(word_seq(" hello"), vec!["", "hello"]);
    }

    #[test]
    fn test_split_of_empty_string_is_one_empty_fragment() {
        assert_eq!(word_seq(""), vec![""]);
        assert_eq!(sentence_seq(""), vec![""]);
        assert_eq!(phrase_seq(""), vec![""]);
        assert_eq!(alpha_seq(""), vec![""]);
    }

    #[test]
    fn test_sentence_seq() {
        assert_eq!(
            sentence_seq("Hi! How are you? Fine."),
            vec!["Hi", " How are you", " Fine", ""]
        );
        // A run of terminators is one delimiter.
        assert_eq!(sentence_seq("wait... what"), vec!["wait", " what"]);
    }

    #[test]
    fn test_phrase_seq_adds_colon_and_comma() {
        assert_eq!(phrase_seq("one, two: three"), vec!["one", " two", " three"]);
    }

    #[test]
    fn test_alpha_seq_is_unquantified() {
        // Adjacent delimiters produce empty fragments.
        assert_eq!(alpha_seq("Hi!! Bye"), vec!["Hi", "", " Bye"]);
        assert_eq!(alpha_seq("a1b"), vec!["a", "b"]);
    }

    #[test]
    fn test_strip_non_alpha() {
        assert_eq!(strip_non_alpha("cat!"), "cat");
        assert_eq!(strip_non_alpha("c4t tail"), "cttail");
        assert_eq!(strip_non_alpha("!!!"), "");
    }
}
