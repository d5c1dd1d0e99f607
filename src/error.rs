//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::VocabularyKind;

/// Application-level errors for Wordhash.
#[derive(Error, Debug)]
pub enum AppError {
    // Encoding errors
    #[error("Unknown {vocabulary} token: {token:?}")]
    UnknownToken {
        vocabulary: VocabularyKind,
        token: String,
    },

    #[error("Duplicate {vocabulary} vocabulary entry {token:?} at positions {first} and {duplicate}")]
    DuplicateVocabularyEntry {
        vocabulary: VocabularyKind,
        token: String,
        first: usize,
        duplicate: usize,
    },

    #[error("Entity #{index}: {source}")]
    Entity {
        index: usize,
        #[source]
        source: Box<AppError>,
    },

    // Input errors
    #[error("Failed to read vocabulary file {path:?}: {source}")]
    VocabularyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid vocabulary file {path:?}: {source}")]
    InvalidVocabularyFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Wraps an error raised while encoding the `index`-th entity of a batch.
    pub fn in_entity(self, index: usize) -> Self {
        AppError::Entity {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, unwrapping any batch context.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Entity { source, .. } => source.root(),
            other => other,
        }
    }
}
