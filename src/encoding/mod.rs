//! Trigram word hashing for entities.
//!
//! - `vocabulary`: frozen token-to-index mappings
//! - `trigram`: word splitting, boundary marking and trigram slicing
//! - `count`: count vectors over a vocabulary
//! - `encoder`: assembles the five entity segments into one vector

pub mod count;
pub mod encoder;
pub mod trigram;
pub mod vocabulary;

pub use count::{count_vector, hashed_vector, onehot_vector};
pub use encoder::EntityEncoder;
pub use trigram::{TrigramExtractor, DEFAULT_MARKER, TRIGRAM_LEN};
pub use vocabulary::{IndexMapping, Vocabularies, VocabularyKind};
