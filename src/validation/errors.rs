// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Failure types for corona validation.

use crate::geometry::Segment;
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter};

/// The first rule a corona breaks, with where it breaks it.
///
/// Each variant corresponds to exactly one reason string (see
/// [`FailureKind::reason`]). Edge indices are positions in the corona's
/// edge list; segments are reported as they appear after sorting.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro, EnumDiscriminants)]
#[strum_discriminants(name(FailureKind), derive(Hash, EnumIter, EnumCountMacro))]
pub enum ValidationFailure {
    /// Center is zero or negative.
    NonPositiveCenter { center: i64 },

    /// Corona does not have exactly four edges.
    EdgeCount { count: usize },

    /// Edge has no segments.
    EmptyEdge { edge: usize },

    /// Segment size is zero or not in the allowed set.
    InvalidSegmentSize { edge: usize, segment: Segment },

    /// Segment offset is negative or beyond the center.
    OffsetOutOfRange { edge: usize, segment: Segment },

    /// A center-sized segment sits at offset 0.
    CenterSizedAligned { edge: usize, segment: Segment },

    /// Two neighbouring segments have the same size.
    EqualAdjacentSizes {
        edge: usize,
        first: Segment,
        second: Segment,
    },

    /// First segment does not start at offset 0.
    DoesNotStartAtZero { edge: usize, first: Segment },

    /// A segment does not begin where the previous one ends.
    InvalidEdgeWalk {
        edge: usize,
        previous: Segment,
        next: Segment,
    },

    /// Edge ends short of the center length.
    DoesNotReachCenter { edge: usize, coverage: i64 },

    /// A unit square is flanked on both sides by something larger than 1.
    ///
    /// `before` is the previous segment's size, or the previous edge's
    /// overhang for a first segment; `after` is the next segment's size, or
    /// the next edge's first size for a last segment.
    IsolatedUnitSquare {
        edge: usize,
        segment: usize,
        before: i64,
        after: i64,
    },
}

impl ValidationFailure {
    /// Which rule failed.
    pub fn kind(&self) -> FailureKind {
        FailureKind::from(self)
    }

    /// Fixed reason string for this failure.
    pub fn reason(&self) -> &'static str {
        self.kind().reason()
    }

    /// Index of the edge the failure is located on, if any.
    pub fn edge(&self) -> Option<usize> {
        match self {
            ValidationFailure::NonPositiveCenter { .. } | ValidationFailure::EdgeCount { .. } => {
                None
            }
            ValidationFailure::EmptyEdge { edge }
            | ValidationFailure::InvalidSegmentSize { edge, .. }
            | ValidationFailure::OffsetOutOfRange { edge, .. }
            | ValidationFailure::CenterSizedAligned { edge, .. }
            | ValidationFailure::EqualAdjacentSizes { edge, .. }
            | ValidationFailure::DoesNotStartAtZero { edge, .. }
            | ValidationFailure::InvalidEdgeWalk { edge, .. }
            | ValidationFailure::DoesNotReachCenter { edge, .. }
            | ValidationFailure::IsolatedUnitSquare { edge, .. } => Some(*edge),
        }
    }
}

impl FailureKind {
    /// Fixed reason string reported for this kind of failure.
    pub fn reason(self) -> &'static str {
        match self {
            FailureKind::NonPositiveCenter => "center must be a positive integer",
            FailureKind::EdgeCount => "edges must have length 4",
            FailureKind::EmptyEdge => "edge empty",
            FailureKind::InvalidSegmentSize => "invalid segment size",
            FailureKind::OffsetOutOfRange => "offset out of range",
            FailureKind::CenterSizedAligned => "not unilateral (center-sized aligned)",
            FailureKind::EqualAdjacentSizes => "not unilateral (equal adjacent sizes)",
            FailureKind::DoesNotStartAtZero => "edge does not start at 0",
            FailureKind::InvalidEdgeWalk => "invalid edge walk",
            FailureKind::DoesNotReachCenter => "edge does not reach center length",
            FailureKind::IsolatedUnitSquare => "isolated 1x1 square trapped by larger squares",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = self.reason();
        match self {
            ValidationFailure::NonPositiveCenter { center } => {
                write!(f, "{} (center {})", reason, center)
            }
            ValidationFailure::EdgeCount { count } => {
                write!(f, "{} (found {})", reason, count)
            }
            ValidationFailure::EmptyEdge { edge } => {
                write!(f, "{} (edge {})", reason, edge)
            }
            ValidationFailure::InvalidSegmentSize { edge, segment }
            | ValidationFailure::OffsetOutOfRange { edge, segment }
            | ValidationFailure::CenterSizedAligned { edge, segment } => {
                write!(f, "{} (edge {}, segment {})", reason, edge, segment)
            }
            ValidationFailure::EqualAdjacentSizes {
                edge,
                first,
                second,
            } => {
                write!(f, "{} (edge {}, segments {} {})", reason, edge, first, second)
            }
            ValidationFailure::DoesNotStartAtZero { edge, first } => {
                write!(f, "{} (edge {}, first segment {})", reason, edge, first)
            }
            ValidationFailure::InvalidEdgeWalk { edge, previous, next } => {
                write!(
                    f,
                    "{} (edge {}, {} then {})",
                    reason, edge, previous, next
                )
            }
            ValidationFailure::DoesNotReachCenter { edge, coverage } => {
                write!(f, "{} (edge {}, reaches {})", reason, edge, coverage)
            }
            ValidationFailure::IsolatedUnitSquare {
                edge,
                segment,
                before,
                after,
            } => {
                write!(
                    f,
                    "{} (edge {}, segment {}, before {}, after {})",
                    reason, edge, segment, before, after
                )
            }
        }
    }
}
