//! Entity record to be encoded.

use serde::{Deserialize, Serialize};

/// A knowledge-graph entity in its five-field input form.
///
/// Every field may be empty. `name` and `description` are free text;
/// `connections` are words (usually the names of connected entities);
/// `relations` and `types` are labels from closed vocabularies.
///
/// Unknown keys are rejected: a misspelled field would otherwise encode as an
/// all-zero segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entity {
    /// Human-readable name, possibly several words.
    #[serde(default)]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Connected entities.
    #[serde(default)]
    pub connections: Vec<String>,
    /// Relation labels of the entity's edges.
    #[serde(default)]
    pub relations: Vec<String>,
    /// Entity type labels.
    #[serde(default)]
    pub types: Vec<String>,
}

impl Entity {
    /// Creates an entity with a name and description and no labels.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_relations<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relations = relations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }
}
