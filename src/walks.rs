// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edge walk generation.
//!
//! An edge walk is a run of segments starting at offset 0, each placed where
//! the previous one ends, stopping as soon as the run covers the center
//! length. The generator applies the two unilateral rules while walking:
//! - no segment of the center's size at offset 0;
//! - no two consecutive segments of the same size.
//!
//! The walks produced are exactly the edges that pass the per-edge checks
//! of the validator; the corner-gap rule needs all four edges and is left to
//! the enumerator.
//!
//! # Example
//!
//! ```
//! use corona_search::geometry::SizeSet;
//! use corona_search::walks::generate_edge_walks;
//!
//! let walks = generate_edge_walks(2, SizeSet::default());
//! let compact: Vec<String> = walks.iter().map(|w| w.to_string()).collect();
//! assert_eq!(compact, vec!["1^0,2^1", "1^0,3^1", "1^0,4^1", "3^0", "4^0"]);
//! ```

use crate::geometry::{Edge, Segment, SizeSet};

/// Generate every edge walk covering `center_size`.
///
/// Walks are returned in depth-first order, trying sizes in ascending order
/// at each step. A center of 0 has no walks.
pub fn generate_edge_walks(center_size: u32, allowed_sizes: SizeSet) -> Vec<Edge> {
    let mut walks = Vec::new();
    if center_size == 0 {
        return walks;
    }
    extend_walk(
        &Edge::default(),
        0,
        i64::from(center_size),
        allowed_sizes,
        &mut walks,
    );
    walks
}

/// Emit `walk` if it covers `target`, otherwise try every allowed next segment.
fn extend_walk(walk: &Edge, offset: i64, target: i64, allowed_sizes: SizeSet, walks: &mut Vec<Edge>) {
    if offset >= target {
        walks.push(walk.clone());
        return;
    }

    let last_size = walk.segments().last().map(|seg| seg.size);

    for size in allowed_sizes.iter() {
        if offset == 0 && i64::from(size) == target {
            continue;
        }
        if last_size == Some(size) {
            continue;
        }
        let segment = Segment::new(size, offset);
        extend_walk(&walk.with(segment), segment.end(), target, allowed_sizes, walks);
    }
}
