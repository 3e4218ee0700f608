// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Corona validation.
//!
//! [`validate`] runs a fixed sequence of checks and reports the first rule
//! broken as a [`ValidationFailure`]. An invalid corona is an ordinary
//! outcome (most enumeration candidates are invalid), so it is returned as a
//! value rather than raised.
//!
//! ## Check order
//!
//! 1. Center is positive.
//! 2. Exactly four edges.
//! 3. Each edge in turn, on its sorted segments: non-empty; per segment,
//!    allowed size, offset within `[0, center]`, not center-sized at
//!    offset 0; no equal neighbours; starts at 0; contiguous; reaches the
//!    center length.
//! 4. Corner gaps across all edges (see [`check_corner_gaps`]).

pub mod errors;

pub use errors::{FailureKind, ValidationFailure};

use crate::geometry::constants::NEDGES;
use crate::geometry::{Corona, Segment, SizeSet};

/// Check a corona against every rule, stopping at the first failure.
///
/// Never panics, whatever the field values.
pub fn validate(corona: &Corona, allowed_sizes: SizeSet) -> Result<(), ValidationFailure> {
    let center = corona.center;

    if center <= 0 {
        return Err(ValidationFailure::NonPositiveCenter { center });
    }

    if corona.edges.len() != NEDGES {
        return Err(ValidationFailure::EdgeCount {
            count: corona.edges.len(),
        });
    }

    let sorted_edges: Vec<Vec<Segment>> = corona.edges.iter().map(|e| e.sorted()).collect();

    for (edge, segs) in sorted_edges.iter().enumerate() {
        check_edge(edge, segs, center, allowed_sizes)?;
    }

    check_corner_gaps(&sorted_edges, center)
}

/// Per-edge checks on sorted segments.
fn check_edge(
    edge: usize,
    segs: &[Segment],
    center: i64,
    allowed_sizes: SizeSet,
) -> Result<(), ValidationFailure> {
    let (Some(&first), Some(&last)) = (segs.first(), segs.last()) else {
        return Err(ValidationFailure::EmptyEdge { edge });
    };

    for &segment in segs {
        if segment.size == 0 || !allowed_sizes.contains(segment.size) {
            return Err(ValidationFailure::InvalidSegmentSize { edge, segment });
        }
        if segment.offset < 0 || segment.offset > center {
            return Err(ValidationFailure::OffsetOutOfRange { edge, segment });
        }
        if i64::from(segment.size) == center && segment.offset == 0 {
            return Err(ValidationFailure::CenterSizedAligned { edge, segment });
        }
    }

    for pair in segs.windows(2) {
        if pair[0].size == pair[1].size {
            return Err(ValidationFailure::EqualAdjacentSizes {
                edge,
                first: pair[0],
                second: pair[1],
            });
        }
    }

    if first.offset != 0 {
        return Err(ValidationFailure::DoesNotStartAtZero { edge, first });
    }

    for pair in segs.windows(2) {
        if pair[1].offset != pair[0].end() {
            return Err(ValidationFailure::InvalidEdgeWalk {
                edge,
                previous: pair[0],
                next: pair[1],
            });
        }
    }

    let coverage = last.end();
    if coverage < center {
        return Err(ValidationFailure::DoesNotReachCenter { edge, coverage });
    }

    Ok(())
}

/// Reject any unit square boxed in by larger neighbours.
///
/// Each edge's overhang (`coverage - center`) sticks out past the corner and
/// borders the first square of the next edge, so the flanks of a unit square
/// can come from neighbouring edges:
/// - before: previous square on this edge, or the previous edge's overhang
///   for the first square;
/// - after: next square on this edge, or the next edge's first square for
///   the last one.
///
/// A lone unit square on an edge is both first and last and takes both
/// flanks from the neighbouring edges.
///
/// Requires every edge to be non-empty and already checked.
fn check_corner_gaps(sorted_edges: &[Vec<Segment>], center: i64) -> Result<(), ValidationFailure> {
    let overhangs: Vec<i64> = sorted_edges
        .iter()
        .map(|segs| segs.last().map_or(0, |last| last.end() - center))
        .collect();

    for (edge, segs) in sorted_edges.iter().enumerate() {
        let prev_edge = (edge + NEDGES - 1) % NEDGES;
        let next_edge = (edge + 1) % NEDGES;

        for (i, seg) in segs.iter().enumerate() {
            if seg.size != 1 {
                continue;
            }

            let before = if i == 0 {
                overhangs[prev_edge]
            } else {
                i64::from(segs[i - 1].size)
            };

            let after = if i == segs.len() - 1 {
                sorted_edges[next_edge]
                    .first()
                    .map_or(0, |s| i64::from(s.size))
            } else {
                i64::from(segs[i + 1].size)
            };

            if before > 1 && after > 1 {
                return Err(ValidationFailure::IsolatedUnitSquare {
                    edge,
                    segment: i,
                    before,
                    after,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Edge;

    fn corona(center: i64, edges: &[&[(u32, i64)]]) -> Corona {
        Corona {
            center,
            edges: edges
                .iter()
                .map(|segs| segs.iter().map(|&(s, o)| Segment::new(s, o)).collect())
                .collect(),
        }
    }

    fn kind(c: &Corona) -> Option<FailureKind> {
        validate(c, SizeSet::default()).err().map(|f| f.kind())
    }

    #[test]
    fn test_valid_single_segment_edges() {
        let c = corona(2, &[&[(3, 0)], &[(3, 0)], &[(3, 0)], &[(3, 0)]]);
        assert_eq!(validate(&c, SizeSet::default()), Ok(()));

        let c = corona(1, &[&[(2, 0)], &[(3, 0)], &[(4, 0)], &[(2, 0)]]);
        assert_eq!(validate(&c, SizeSet::default()), Ok(()));
    }

    #[test]
    fn test_center_checked_first() {
        // Edge count is also wrong, but center is reported
        let c = corona(0, &[&[(2, 0)]]);
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::NonPositiveCenter { center: 0 })
        );
        let c = corona(-1, &[&[(2, 0)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(kind(&c), Some(FailureKind::NonPositiveCenter));
    }

    #[test]
    fn test_edge_count() {
        let c = corona(1, &[&[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::EdgeCount { count: 3 })
        );
        let c = corona(1, &[]);
        assert_eq!(kind(&c), Some(FailureKind::EdgeCount));
    }

    #[test]
    fn test_empty_edge() {
        let mut c = corona(1, &[&[(2, 0)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        c.edges[2] = Edge::default();
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::EmptyEdge { edge: 2 })
        );
    }

    #[test]
    fn test_segment_size() {
        let c = corona(1, &[&[(0, 0)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(kind(&c), Some(FailureKind::InvalidSegmentSize));

        let c = corona(1, &[&[(2, 0)], &[(5, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::InvalidSegmentSize {
                edge: 1,
                segment: Segment::new(5, 0)
            })
        );

        // Allowed under a wider size set
        assert_eq!(
            validate(&c, SizeSet::from_sizes(&[1, 2, 3, 4, 5]).unwrap()),
            Ok(())
        );
    }

    #[test]
    fn test_offset_out_of_range() {
        let c = corona(1, &[&[(2, 2)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(kind(&c), Some(FailureKind::OffsetOutOfRange));
        let c = corona(1, &[&[(2, -1)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(kind(&c), Some(FailureKind::OffsetOutOfRange));
    }

    #[test]
    fn test_center_sized_aligned() {
        let c = corona(1, &[&[(1, 0)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::CenterSizedAligned {
                edge: 0,
                segment: Segment::new(1, 0)
            })
        );
        let c = corona(2, &[&[(2, 0)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(kind(&c), Some(FailureKind::CenterSizedAligned));
    }

    #[test]
    fn test_equal_adjacent_sizes() {
        let c = corona(2, &[&[(2, 0), (2, 2)], &[(3, 0)], &[(3, 0)], &[(3, 0)]]);
        // 2^0 is center-sized and aligned, which is checked per segment first
        assert_eq!(kind(&c), Some(FailureKind::CenterSizedAligned));

        let c = corona(3, &[&[(1, 0), (1, 1)], &[(4, 0)], &[(4, 0)], &[(4, 0)]]);
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::EqualAdjacentSizes {
                edge: 0,
                first: Segment::new(1, 0),
                second: Segment::new(1, 1)
            })
        );
    }

    #[test]
    fn test_does_not_start_at_zero() {
        let c = corona(1, &[&[(2, 1)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(kind(&c), Some(FailureKind::DoesNotStartAtZero));
    }

    #[test]
    fn test_invalid_edge_walk() {
        let c = corona(3, &[&[(2, 0), (4, 3)], &[(4, 0)], &[(4, 0)], &[(4, 0)]]);
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::InvalidEdgeWalk {
                edge: 0,
                previous: Segment::new(2, 0),
                next: Segment::new(4, 3)
            })
        );
    }

    #[test]
    fn test_does_not_reach_center() {
        let c = corona(3, &[&[(2, 0)], &[(2, 0)], &[(2, 0)], &[(2, 0)]]);
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::DoesNotReachCenter {
                edge: 0,
                coverage: 2
            })
        );
    }

    #[test]
    fn test_segment_order_is_irrelevant() {
        let c = corona(2, &[&[(2, 1), (1, 0)], &[(3, 0)], &[(3, 0)], &[(3, 0)]]);
        assert_eq!(validate(&c, SizeSet::default()), Ok(()));
    }

    #[test]
    fn test_isolated_unit_square_across_corner() {
        // Edge 3 overhangs by 3, edge 0 continues with a 2
        let c = corona(
            2,
            &[
                &[(1, 0), (2, 1)],
                &[(1, 0), (2, 1)],
                &[(1, 0), (4, 1)],
                &[(1, 0), (4, 1)],
            ],
        );
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::IsolatedUnitSquare {
                edge: 0,
                segment: 0,
                before: 3,
                after: 2
            })
        );
    }

    #[test]
    fn test_unit_square_next_to_unit_overhang() {
        // Every overhang is 1, so no unit square is boxed in
        let c = corona(
            2,
            &[
                &[(1, 0), (2, 1)],
                &[(1, 0), (2, 1)],
                &[(1, 0), (2, 1)],
                &[(1, 0), (2, 1)],
            ],
        );
        assert_eq!(validate(&c, SizeSet::default()), Ok(()));
    }

    #[test]
    fn test_unit_square_inside_edge() {
        // 1^2 sits between 2^0 and 3^3 on the same edge
        let c = corona(
            4,
            &[
                &[(2, 0), (1, 2), (3, 3)],
                &[(3, 0), (2, 3)],
                &[(3, 0), (2, 3)],
                &[(3, 0), (2, 3)],
            ],
        );
        assert_eq!(
            validate(&c, SizeSet::default()),
            Err(ValidationFailure::IsolatedUnitSquare {
                edge: 0,
                segment: 1,
                before: 2,
                after: 3
            })
        );
    }

    #[test]
    fn test_lone_unit_square_uses_both_neighbouring_edges() {
        // A lone 1^0 can only reach a center of 1, where it is center-sized
        // aligned; any larger center trips the coverage check first.
        let c = corona(2, &[&[(1, 0)], &[(3, 0)], &[(3, 0)], &[(3, 0)]]);
        assert_eq!(kind(&c), Some(FailureKind::DoesNotReachCenter));

        // With only the corner check left, both flanks come from neighbours
        let edges = vec![
            vec![Segment::new(1, 0)],
            vec![Segment::new(3, 0)],
            vec![Segment::new(3, 0)],
            vec![Segment::new(4, 0)],
        ];
        assert_eq!(
            check_corner_gaps(&edges, 1),
            Err(ValidationFailure::IsolatedUnitSquare {
                edge: 0,
                segment: 0,
                before: 3,
                after: 3
            })
        );
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let c = corona(2, &[&[(2, 1), (1, 0)], &[(3, 0)], &[(3, 0)], &[(3, 0)]]);
        let before = c.clone();
        let _ = validate(&c, SizeSet::default());
        assert_eq!(c, before);
    }
}
