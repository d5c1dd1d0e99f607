//! Domain models: input entities and encoded vectors.

mod entity;
mod vector;

pub use entity::Entity;
pub use vector::{FeatureVector, Layout, Segment, SegmentSpan};
