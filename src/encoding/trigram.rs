//! Word splitting and letter-trigram extraction.
//!
//! Each whitespace-separated word is wrapped in boundary markers
//! (`word` -> `_word_`) and sliced into every overlapping three-character
//! window, left to right. A marked word of `L` characters yields `L - 2`
//! trigrams; the shortest marked word (`_a_`) yields exactly one.

use serde::{Deserialize, Serialize};

/// Marker used when none is configured.
pub const DEFAULT_MARKER: char = '_';

/// Characters per trigram.
pub const TRIGRAM_LEN: usize = 3;

/// Splits free text into marked words and slices them into trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramExtractor {
    marker: char,
}

impl Default for TrigramExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl TrigramExtractor {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Splits every text on whitespace, flattening in text-then-word order.
    pub fn words<'a, S: AsRef<str>>(&self, texts: &'a [S]) -> Vec<&'a str> {
        texts
            .iter()
            .flat_map(|text| text.as_ref().split_whitespace())
            .collect()
    }

    /// Wraps a word in boundary markers.
    pub fn mark(&self, word: &str) -> String {
        let mut marked = String::with_capacity(word.len() + 2 * self.marker.len_utf8());
        marked.push(self.marker);
        marked.push_str(word);
        marked.push(self.marker);
        marked
    }

    /// Every contiguous three-character slice of an already marked word.
    pub fn word_trigrams(marked: &str) -> Vec<String> {
        let chars: Vec<char> = marked.chars().collect();
        chars
            .windows(TRIGRAM_LEN)
            .map(|window| window.iter().collect())
            .collect()
    }

    /// Trigrams of all words in `texts`, in word order then left to right.
    pub fn extract<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        self.words(texts)
            .into_iter()
            .flat_map(|word| Self::word_trigrams(&self.mark(word)))
            .collect()
    }
}
