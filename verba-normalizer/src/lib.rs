#![forbid(unsafe_code)]
#![deny(dead_code, unused_imports, unused_mut, missing_docs)]
//! # verba-normalizer
//!
//! turns raw words into the bounded keys Verba aggregates on.

/// Maximum length of a normalized word, in code points.
pub const MAX_WORD_LENGTH: usize = 10;

/// Lowercase a word and truncate it to [`MAX_WORD_LENGTH`] code points.
///
/// Lowercasing is the standard Unicode mapping, so "Ё" becomes "ё" and is
/// never merged into "е". Truncation happens after lowercasing and counts
/// code points, not bytes. Whitespace is kept: a word with leading spaces
/// keeps them in its key. Only a word that is empty or entirely whitespace
/// has no key at all, and yields `None`.
pub fn normalize<T: ToString>(word: T) -> Option<String> {
    let word = word.to_string();

    if word.trim().is_empty() {
        return None;
    }

    Some(word.to_lowercase().chars().take(MAX_WORD_LENGTH).collect())
}
