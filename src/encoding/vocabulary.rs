//! Vocabulary indexing.
//!
//! A vocabulary is an ordered list of unique tokens. Its position in the list
//! is the token's index in the output vector, so the mapping is built once and
//! never mutated afterwards.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::config::VocabularyConfig;
use crate::error::AppError;

/// The closed vocabularies an entity is encoded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    /// Letter trigrams of boundary-marked words.
    Trigram,
    /// Relation labels.
    Relation,
    /// Entity type labels.
    EntityType,
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VocabularyKind::Trigram => "trigram",
            VocabularyKind::Relation => "relation",
            VocabularyKind::EntityType => "entity type",
        };
        f.write_str(name)
    }
}

/// Frozen token-to-position mapping for one vocabulary.
#[derive(Debug, Clone)]
pub struct IndexMapping {
    kind: VocabularyKind,
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl IndexMapping {
    /// Builds the mapping from an ordered token sequence.
    ///
    /// Fails with [`AppError::DuplicateVocabularyEntry`] if a token repeats.
    pub fn new<I, S>(kind: VocabularyKind, tokens: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(tokens.len());

        for (position, token) in tokens.iter().enumerate() {
            match index.entry(token.clone()) {
                Entry::Occupied(existing) => {
                    return Err(AppError::DuplicateVocabularyEntry {
                        vocabulary: kind,
                        token: token.clone(),
                        first: *existing.get(),
                        duplicate: position,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        tracing::debug!(vocabulary = %kind, size = tokens.len(), "Built index mapping");

        Ok(Self {
            kind,
            tokens,
            index,
        })
    }

    pub fn kind(&self) -> VocabularyKind {
        self.kind
    }

    /// Number of tokens, which is also the length of the segment it indexes.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Looks up a token's position.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Looks up a token's position, failing if the vocabulary lacks it.
    pub fn index_of(&self, token: &str) -> Result<usize, AppError> {
        self.get(token).ok_or_else(|| AppError::UnknownToken {
            vocabulary: self.kind,
            token: token.to_string(),
        })
    }

    /// Reverse lookup: the token stored at `index`.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Tokens in index order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// The three mappings an encoder needs, built together at startup.
#[derive(Debug, Clone)]
pub struct Vocabularies {
    pub trigrams: IndexMapping,
    pub relations: IndexMapping,
    pub types: IndexMapping,
}

impl Vocabularies {
    /// Builds all three mappings from in-memory token lists.
    pub fn new<T, R, E>(trigrams: T, relations: R, types: E) -> Result<Self, AppError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Ok(Self {
            trigrams: IndexMapping::new(VocabularyKind::Trigram, trigrams)?,
            relations: IndexMapping::new(VocabularyKind::Relation, relations)?,
            types: IndexMapping::new(VocabularyKind::EntityType, types)?,
        })
    }

    /// Loads every configured vocabulary source and builds the mappings.
    pub fn from_config(config: &VocabularyConfig) -> Result<Self, AppError> {
        let vocabularies = Self::new(
            config.trigrams.load()?,
            config.relations.load()?,
            config.types.load()?,
        )?;

        tracing::info!(
            trigrams = vocabularies.trigrams.len(),
            relations = vocabularies.relations.len(),
            types = vocabularies.types.len(),
            "Loaded vocabularies"
        );

        Ok(vocabularies)
    }
}
