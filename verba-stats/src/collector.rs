use ahash::RandomState;
use rayon::prelude::*;
use std::collections::HashMap;
use verba_error::{ArgumentError, Error, ErrorType};
use verba_normalizer::normalize;

/// Structure containing the occurrence count of every word seen so far.
///
/// Each collector owns its map outright. Two collectors never share
/// state, and there is no process-wide default instance.
#[derive(Debug, Default, Clone)]
pub struct WordsStatistics {
    /// Occurrences, keyed by normalized word.
    data: HashMap<String, usize, RandomState>,
}

impl WordsStatistics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    ///
    /// `None` is rejected with [`ErrorType::InvalidArgument`] and leaves
    /// the collector untouched. A word that is empty or entirely
    /// whitespace is accepted but recorded nowhere. Every other word is
    /// normalized (lowercased, truncated to 10 code points) and counted
    /// under its normalized key, so words colliding after normalization
    /// share a single count.
    pub fn add_word(&mut self, word: Option<&str>) -> Result<(), Error> {
        let word = word.ok_or_else(|| {
            Error::new(
                ErrorType::InvalidArgument(ArgumentError::MissingWord),
                None,
                Some("`add_word` requires a word".to_string()),
            )
        })?;

        if let Some(key) = normalize(word) {
            if let Some(counter) = self.data.get_mut(&key) {
                *counter += 1;
            } else {
                self.data.insert(key, 1);
            }
        }

        Ok(())
    }

    /// Ranks every recorded word into a fresh `(occurrence, word)` list.
    ///
    /// Ordered by occurrence descending, then by word in code-point
    /// lexicographic order. The collector is not modified: calling this
    /// twice without an intervening [`Self::add_word`] yields equal lists.
    pub fn statistics(&self) -> Vec<(usize, String)> {
        let mut ranking: Vec<(usize, String)> = self
            .data
            .iter()
            .map(|(word, occurrence)| (*occurrence, word.clone()))
            .collect();

        ranking.par_sort_unstable_by(|a, b| {
            b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1))
        });

        ranking
    }
}
