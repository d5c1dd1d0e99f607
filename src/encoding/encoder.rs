//! Entity vector assembly.

use std::sync::Arc;

use crate::encoding::count::{hashed_vector, onehot_vector};
use crate::encoding::trigram::TrigramExtractor;
use crate::encoding::vocabulary::Vocabularies;
use crate::error::AppError;
use crate::models::{Entity, FeatureVector, Layout, Segment};

/// Encodes entities into fixed-length feature vectors.
///
/// The vocabularies are shared read-only, so an encoder is cheap to clone
/// and safe to use from several threads at once.
#[derive(Debug, Clone)]
pub struct EntityEncoder {
    vocabularies: Arc<Vocabularies>,
    extractor: TrigramExtractor,
    layout: Layout,
}

impl EntityEncoder {
    pub fn new(vocabularies: impl Into<Arc<Vocabularies>>, extractor: TrigramExtractor) -> Self {
        let vocabularies = vocabularies.into();
        let layout = Layout::new(
            vocabularies.trigrams.len(),
            vocabularies.relations.len(),
            vocabularies.types.len(),
        );

        Self {
            vocabularies,
            extractor,
            layout,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn vocabularies(&self) -> &Vocabularies {
        &self.vocabularies
    }

    pub fn extractor(&self) -> &TrigramExtractor {
        &self.extractor
    }

    /// Encodes one entity.
    ///
    /// Any token missing from its vocabulary fails the whole entity.
    pub fn encode(&self, entity: &Entity) -> Result<FeatureVector, AppError> {
        let trigrams = &self.vocabularies.trigrams;

        let segments = [
            hashed_vector(&[entity.name.as_str()], &self.extractor, trigrams)?,
            hashed_vector(&[entity.description.as_str()], &self.extractor, trigrams)?,
            hashed_vector(&entity.connections, &self.extractor, trigrams)?,
            onehot_vector(&entity.relations, &self.vocabularies.relations)?,
            onehot_vector(&entity.types, &self.vocabularies.types)?,
        ];

        for (segment, counts) in Segment::ALL.iter().zip(&segments) {
            tracing::debug!(
                segment = %segment,
                nonzero = counts.iter().filter(|&&c| c > 0).count(),
                total = counts.iter().sum::<u32>(),
                "Encoded segment"
            );
        }

        let vector = FeatureVector::from_segments(self.layout, segments);
        tracing::debug!(len = vector.len(), "Encoded entity");
        Ok(vector)
    }

    /// Encodes entities in input order, stopping at the first failure.
    pub fn encode_all(&self, entities: &[Entity]) -> Result<Vec<FeatureVector>, AppError> {
        entities
            .iter()
            .enumerate()
            .map(|(index, entity)| self.encode(entity).map_err(|e| e.in_entity(index)))
            .collect()
    }
}
