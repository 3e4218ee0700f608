// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for coronas.
//!
//! This module contains value types for the pieces of a corona:
//! - Segment: a square placed at an offset along an edge
//! - Edge: the segments along one side of the center
//! - Corona: a center size plus four edges in cyclic order
//! - SizeSet: bitset of allowed segment sizes

pub mod constants;
pub mod corona;
pub mod edge;
pub mod segment;
pub mod size_set;

// Re-export for convenience
pub use constants::*;
pub use corona::{Corona, CoronaError};
pub use edge::Edge;
pub use segment::Segment;
pub use size_set::{SizeSet, SizeSetError};
