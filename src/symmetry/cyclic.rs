// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cyclic rotation keys for edge sequences.
//!
//! This module computes canonical keys for a corona's edges under the cyclic
//! group C_4 (rotations only). Mirror images are deliberately distinct: an
//! edge sequence and its reflection get different keys.

use crate::geometry::Edge;

/// Serialize one edge as its sorted `(size, offset)` pairs, e.g. `[[1,0],[2,1]]`.
pub fn edge_signature(edge: &Edge) -> String {
    let pairs: Vec<String> = edge
        .sorted()
        .iter()
        .map(|seg| format!("[{},{}]", seg.size, seg.offset))
        .collect();
    format!("[{}]", pairs.join(","))
}

/// Signatures of every left rotation of `edges`, rotation 0 first.
///
/// Rotation k lists `edges[k], edges[k+1], ...` wrapping around, with edge
/// signatures joined by `;`.
pub fn rotation_signatures(edges: &[Edge]) -> Vec<String> {
    let signatures: Vec<String> = edges.iter().map(edge_signature).collect();
    let n = signatures.len();

    (0..n)
        .map(|k| {
            (0..n)
                .map(|i| signatures[(i + k) % n].as_str())
                .collect::<Vec<_>>()
                .join(";")
        })
        .collect()
}

/// Rotation-invariant key: the lexicographically smallest rotation signature.
///
/// # Examples
///
/// ```
/// use corona_search::geometry::{Edge, Segment};
/// use corona_search::symmetry::canonical_key;
///
/// let e = |s| Edge::new(vec![Segment::new(s, 0)]);
/// let a = [e(2), e(3), e(4), e(2)];
/// let b = [e(3), e(4), e(2), e(2)];
/// assert_eq!(canonical_key(&a), canonical_key(&b));
/// assert_eq!(canonical_key(&a), "[[2,0]];[[2,0]];[[3,0]];[[4,0]]");
/// ```
pub fn canonical_key(edges: &[Edge]) -> String {
    rotation_signatures(edges)
        .into_iter()
        .min()
        .unwrap_or_default()
}

/// Number of rotations that reproduce the canonical key.
///
/// 1 for an edge sequence with no rotational symmetry, 2 for half-turn
/// symmetry, 4 when all edges are identical.
pub fn rotational_order(edges: &[Edge]) -> usize {
    let signatures = rotation_signatures(edges);
    match signatures.iter().min() {
        Some(min) => signatures.iter().filter(|s| *s == min).count(),
        None => 0,
    }
}
