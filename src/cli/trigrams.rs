//! Trigrams subcommand - inspect word hashing of free text.

use clap::Parser;
use color_eyre::Result;
use serde::Serialize;

use crate::encoding::{TrigramExtractor, DEFAULT_MARKER};

use super::OutputFormat;

/// Show the trigrams extracted from text.
#[derive(Parser)]
pub struct TrigramsCommand {
    /// Texts to split into marked words and trigrams.
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Boundary marker affixed to each word.
    #[arg(short, long, default_value_t = DEFAULT_MARKER)]
    pub marker: char,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Trigrams of a single marked word.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct WordTrigrams {
    word: String,
    trigrams: Vec<String>,
}

/// One entry per word of `texts`, in text-then-word order.
fn word_trigrams<S: AsRef<str>>(extractor: &TrigramExtractor, texts: &[S]) -> Vec<WordTrigrams> {
    extractor
        .words(texts)
        .into_iter()
        .map(|word| {
            let marked = extractor.mark(word);
            WordTrigrams {
                trigrams: TrigramExtractor::word_trigrams(&marked),
                word: marked,
            }
        })
        .collect()
}

impl TrigramsCommand {
    /// Run the trigrams command.
    pub fn run(&self) -> Result<()> {
        let extractor = TrigramExtractor::new(self.marker);
        let words = word_trigrams(&extractor, &self.texts);

        tracing::debug!(words = words.len(), "Extracted trigrams");
        println!("{}", self.format.render(&words, true)?);
        Ok(())
    }
}
