//! CLI module for Wordhash.
//!
//! Subcommands:
//! - `encode`: Encode entities from a JSON file into feature vectors
//! - `layout`: Show the vector layout for the configured vocabularies
//! - `trigrams`: Show the trigrams extracted from some text

mod encode;
mod layout;
mod output;
mod trigrams;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

pub use encode::EncodeCommand;
pub use output::OutputFormat;
pub use trigrams::TrigramsCommand;

/// Wordhash - trigram word hashing for knowledge graph entities
#[derive(Parser)]
#[command(name = "wordhash")]
#[command(about = "Encode entities as fixed-length trigram and label count vectors")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file layered above the user and project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode entities from a JSON file
    Encode(EncodeCommand),

    /// Show the segment layout of encoded vectors
    Layout {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show the trigrams extracted from text
    Trigrams(TrigramsCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Encode(ref cmd) => cmd.run(&self.load_config()?),
            Command::Layout { format } => self.run_layout(format),
            Command::Trigrams(ref cmd) => cmd.run(),
        }
    }

    /// Load configuration, honouring `--config` when given.
    fn load_config(&self) -> color_eyre::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_with(path)?,
            None => Config::load()?,
        };
        Ok(config)
    }
}
