// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants for corona geometry.

/// Number of edges around the center square.
///
/// Edges are numbered 0..NEDGES in cyclic order; edge `i` is followed by
/// edge `(i + 1) % NEDGES`.
pub const NEDGES: usize = 4;

/// Largest segment size a [`SizeSet`](crate::geometry::SizeSet) can hold.
///
/// Sizes are stored as bits of a u64, and bit 0 is never used.
pub const MAX_SEGMENT_SIZE: u32 = 63;

/// Allowed segment sizes when none are configured.
pub const DEFAULT_ALLOWED_SIZES: [u32; 4] = [1, 2, 3, 4];
