//! Encode subcommand - entities from JSON to feature vectors.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use crate::config::Config;
use crate::encoding::{EntityEncoder, Vocabularies};
use crate::error::AppError;
use crate::models::Entity;

use super::OutputFormat;

/// Encode entities from a JSON file.
#[derive(Parser)]
pub struct EncodeCommand {
    /// JSON file holding one entity object or an array of entities ("-" for stdin).
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Parse an input document into entities.
///
/// The document is either an array of entities or a single entity object.
/// The shape is picked from the top-level JSON value, so a malformed entity
/// reports its own serde error.
pub(crate) fn parse_entities(content: &str) -> Result<Vec<Entity>, AppError> {
    let document: serde_json::Value = serde_json::from_str(content)?;

    let entities = if document.is_array() {
        serde_json::from_value::<Vec<Entity>>(document)?
    } else {
        vec![serde_json::from_value::<Entity>(document)?]
    };

    Ok(entities)
}

impl EncodeCommand {
    /// Run the encode command.
    pub fn run(&self, config: &Config) -> Result<()> {
        let vocabularies = Vocabularies::from_config(&config.vocabulary)?;
        let encoder = EntityEncoder::new(vocabularies, config.encoding.extractor());

        let content = self.read_input()?;
        let entities = parse_entities(&content)?;
        tracing::info!(
            entities = entities.len(),
            vector_len = encoder.layout().len(),
            "Encoding entities"
        );

        let vectors = encoder.encode_all(&entities)?;
        println!("{}", self.format.render(&vectors, self.pretty)?);

        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        if self.input.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            return Ok(content);
        }

        std::fs::read_to_string(&self.input).map_err(|e| {
            color_eyre::eyre::eyre!("Could not read {}: {}", self.input.display(), e)
        })
    }
}
