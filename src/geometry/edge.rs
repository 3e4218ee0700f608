// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edge type: the run of segments along one side of the center square.
//!
//! An edge stores its segments in whatever order it was given. Everything
//! that reads an edge geometrically (validation, canonical keys, the compact
//! codec) works on the sorted view returned by [`Edge::sorted`].

use crate::geometry::Segment;
use std::fmt;

/// One side of a corona: a sequence of segments.
///
/// A well-formed edge is a *walk*: its sorted segments start at offset 0,
/// each one begins where the previous one ends, and the last one reaches
/// at least the center length. This is checked by the validator, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Edge(Vec<Segment>);

impl Edge {
    /// Create an edge from segments in any order.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Segments in the order they were given.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments on the edge.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the edge has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Segments sorted by `(offset, size)`.
    pub fn sorted(&self) -> Vec<Segment> {
        let mut segs = self.0.clone();
        segs.sort();
        segs
    }

    /// End of the last segment in sorted order, or None for an empty edge.
    pub fn coverage(&self) -> Option<i64> {
        self.0.iter().max().map(|seg| seg.end())
    }

    /// Return a new edge with `segment` appended.
    pub fn with(&self, segment: Segment) -> Self {
        let mut segs = Vec::with_capacity(self.0.len() + 1);
        segs.extend_from_slice(&self.0);
        segs.push(segment);
        Self(segs)
    }
}

impl FromIterator<Segment> for Edge {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Segment>> for Edge {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for Edge {
    /// Sorted segments joined by commas, e.g. "1^0,2^1".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.sorted().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_display() {
        let edge = Edge::new(vec![Segment::new(2, 1), Segment::new(1, 0)]);
        assert_eq!(edge.segments()[0], Segment::new(2, 1));
        assert_eq!(edge.sorted(), vec![Segment::new(1, 0), Segment::new(2, 1)]);
        assert_eq!(edge.to_string(), "1^0,2^1");
    }

    #[test]
    fn test_coverage() {
        assert_eq!(Edge::default().coverage(), None);
        let edge: Edge = [Segment::new(1, 0), Segment::new(4, 1)].into_iter().collect();
        assert_eq!(edge.coverage(), Some(5));
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let base = Edge::new(vec![Segment::new(1, 0)]);
        let longer = base.with(Segment::new(3, 1));
        assert_eq!(base.len(), 1);
        assert_eq!(longer.len(), 2);
        assert_eq!(longer.to_string(), "1^0,3^1");
    }
}
