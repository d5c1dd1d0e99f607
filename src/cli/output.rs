//! Output formatting for command results.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON format (default).
    #[default]
    Json,
    /// TOON (Token-Oriented Object Notation) - more compact for large batches.
    Toon,
}

impl OutputFormat {
    /// Render a value in this format.
    pub fn render<T: Serialize>(&self, value: &T, pretty: bool) -> color_eyre::Result<String> {
        let rendered = match self {
            OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Toon => serde_toon::to_string(value)
                .map_err(|e| color_eyre::eyre::eyre!("TOON serialization error: {}", e))?,
        };
        Ok(rendered)
    }
}
