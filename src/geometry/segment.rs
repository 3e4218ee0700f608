// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Segment type: one square tile placed along an edge.

use std::cmp::Ordering;
use std::fmt;

/// A square of side `size` placed along an edge, starting `offset` units
/// from the corner the edge shares with the center square.
///
/// Segments are plain values. Nothing here checks that `size` is allowed
/// or that `offset` lies within the center; that is the validator's job,
/// so malformed parsed input can still be represented and diagnosed.
///
/// Segments order by `(offset, size)`, the order in which an edge is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Side length of the square.
    pub size: u32,
    /// Distance from the edge's starting corner.
    pub offset: i64,
}

impl Segment {
    /// Create a new segment.
    pub const fn new(size: u32, offset: i64) -> Self {
        Self { size, offset }
    }

    /// Offset just past the far side of this square, saturating at `i64::MAX`.
    pub fn end(self) -> i64 {
        self.offset.saturating_add(i64::from(self.size))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset
            .cmp(&other.offset)
            .then(self.size.cmp(&other.size))
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Segment {
    /// Compact form "size^offset".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.size, self.offset)
    }
}
