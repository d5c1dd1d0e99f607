//! Layout command handler.

use color_eyre::Result;
use serde::Serialize;

use crate::encoding::{EntityEncoder, Vocabularies};
use crate::models::SegmentSpan;

use super::{App, OutputFormat};

/// Vector layout summary for the configured vocabularies.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct LayoutReport {
    marker: char,
    len: usize,
    segments: Vec<SegmentSpan>,
}

impl LayoutReport {
    fn new(encoder: &EntityEncoder) -> Self {
        let layout = encoder.layout();
        Self {
            marker: encoder.extractor().marker(),
            len: layout.len(),
            segments: layout.spans(),
        }
    }
}

impl App {
    /// Run the layout command to describe the encoded vector shape.
    pub fn run_layout(&self, format: OutputFormat) -> Result<()> {
        let config = self.load_config()?;
        let vocabularies = Vocabularies::from_config(&config.vocabulary)?;
        let encoder = EntityEncoder::new(vocabularies, config.encoding.extractor());

        let report = LayoutReport::new(&encoder);
        println!("{}", format.render(&report, true)?);
        Ok(())
    }
}
