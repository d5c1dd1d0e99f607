//! Feature vector layout.
//!
//! An encoded entity is five count segments laid end to end:
//!
//! ```text
//! | name trigrams | description trigrams | connection trigrams | relations | types |
//! ```
//!
//! The three text segments are each `num_trigrams` long. Lengths depend only
//! on the vocabularies, so every entity encoded under one configuration has
//! the same total length.

use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};

/// One segment of the feature vector, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Name,
    Description,
    Connections,
    Relations,
    Types,
}

impl Segment {
    /// All segments in the order they appear in the vector.
    pub const ALL: [Segment; 5] = [
        Segment::Name,
        Segment::Description,
        Segment::Connections,
        Segment::Relations,
        Segment::Types,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Name => "name",
            Segment::Description => "description",
            Segment::Connections => "connections",
            Segment::Relations => "relations",
            Segment::Types => "types",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of one segment inside the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentSpan {
    pub segment: Segment,
    pub offset: usize,
    pub len: usize,
}

impl SegmentSpan {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Segment sizes derived from the vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub num_trigrams: usize,
    pub num_relations: usize,
    pub num_types: usize,
}

impl Layout {
    pub fn new(num_trigrams: usize, num_relations: usize, num_types: usize) -> Self {
        Self {
            num_trigrams,
            num_relations,
            num_types,
        }
    }

    /// Total vector length: `3 * num_trigrams + num_relations + num_types`.
    pub fn len(&self) -> usize {
        3 * self.num_trigrams + self.num_relations + self.num_types
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of a single segment.
    pub fn segment_len(&self, segment: Segment) -> usize {
        match segment {
            Segment::Name | Segment::Description | Segment::Connections => self.num_trigrams,
            Segment::Relations => self.num_relations,
            Segment::Types => self.num_types,
        }
    }

    /// Spans of all segments in layout order.
    pub fn spans(&self) -> Vec<SegmentSpan> {
        let mut offset = 0;
        Segment::ALL
            .iter()
            .map(|&segment| {
                let len = self.segment_len(segment);
                let span = SegmentSpan {
                    segment,
                    offset,
                    len,
                };
                offset += len;
                span
            })
            .collect()
    }

    /// Index range covered by `segment`.
    pub fn range(&self, segment: Segment) -> Range<usize> {
        let offset: usize = Segment::ALL
            .iter()
            .take_while(|&&s| s != segment)
            .map(|&s| self.segment_len(s))
            .sum();
        offset..offset + self.segment_len(segment)
    }
}

/// A fixed-length encoded entity.
///
/// Serializes as a plain array of counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    layout: Layout,
    values: Vec<u32>,
}

impl FeatureVector {
    /// Concatenates segment vectors given in layout order.
    ///
    /// Callers build each segment against the same layout, so the lengths
    /// always line up.
    pub(crate) fn from_segments(layout: Layout, segments: [Vec<u32>; 5]) -> Self {
        let mut values = Vec::with_capacity(layout.len());
        for segment in segments {
            values.extend(segment);
        }
        debug_assert_eq!(values.len(), layout.len());
        Self { layout, values }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }

    /// Counts belonging to one segment.
    pub fn segment(&self, segment: Segment) -> &[u32] {
        &self.values[self.layout.range(segment)]
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.values
    }
}

impl Serialize for FeatureVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.values.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_len() {
        let layout = Layout::new(18, 3, 2);
        assert_eq!(layout.len(), 59);
    }

    #[test]
    fn test_layout_ranges() {
        let layout = Layout::new(18, 3, 2);
        assert_eq!(layout.range(Segment::Name), 0..18);
        assert_eq!(layout.range(Segment::Description), 18..36);
        assert_eq!(layout.range(Segment::Connections), 36..54);
        assert_eq!(layout.range(Segment::Relations), 54..57);
        assert_eq!(layout.range(Segment::Types), 57..59);
    }

    #[test]
    fn test_spans_match_ranges() {
        let layout = Layout::new(4, 0, 1);
        for span in layout.spans() {
            assert_eq!(span.range(), layout.range(span.segment));
        }
        assert_eq!(layout.spans().last().map(|s| s.range().end), Some(layout.len()));
    }

    #[test]
    fn test_feature_vector_segments() {
        let layout = Layout::new(2, 1, 1);
        let vector = FeatureVector::from_segments(
            layout,
            [vec![1, 0], vec![0, 2], vec![0, 0], vec![3], vec![4]],
        );

        assert_eq!(vector.len(), 8);
        assert_eq!(vector.segment(Segment::Description), &[0, 2]);
        assert_eq!(vector.segment(Segment::Types), &[4]);
        assert_eq!(serde_json::to_string(&vector).unwrap(), "[1,0,0,2,0,0,3,4]");
    }
}
