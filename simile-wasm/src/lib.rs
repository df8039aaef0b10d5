//! WebAssembly bindings for simile fuzzy text matching
//!
//! Exposes the four host-callable entry points under the names the
//! JavaScript side expects: `WordMatch`, `SentenceMatch`, `TextMatch`,
//! and `LCS`. Each is a pure request/response call taking two strings;
//! the word-pair cache lives in `simile-core`'s process-wide matcher
//! and persists for the lifetime of the wasm instance.
//!
//! This crate is a thin adapter: host value conversion happens at the
//! `wasm-bindgen` ABI, and nothing here knows anything about matching
//! beyond which core function to call.

use wasm_bindgen::prelude::*;

use simile_core::char_seq;

/// Install the console panic hook as soon as the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Fuzzy equality of two single words.
#[wasm_bindgen(js_name = WordMatch)]
pub fn word_match(word1: &str, word2: &str) -> bool {
    simile_core::word_match(word1, word2)
}

/// Fuzzy equality of two sentences.
#[wasm_bindgen(js_name = SentenceMatch)]
pub fn sentence_match(sent1: &str, sent2: &str) -> bool {
    simile_core::sentence_match(sent1, sent2)
}

/// Fuzzy equality of two multi-sentence texts.
#[wasm_bindgen(js_name = TextMatch)]
pub fn text_match(text1: &str, text2: &str) -> bool {
    simile_core::text_match(text1, text2)
}

/// Longest-common-subsequence length over the character sequences of
/// two strings.
#[wasm_bindgen(js_name = LCS)]
pub fn lcs(seq1: &str, seq2: &str) -> u32 {
    simile_core::lcs_len(&char_seq(seq1), &char_seq(seq2)) as u32
}
