// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Corona type: a center square with four bordering edges.

use crate::geometry::constants::NEDGES;
use crate::geometry::{Edge, SizeSet};
use crate::symmetry;
use crate::validation::{self, ValidationFailure};
use thiserror::Error;

/// Structural failure building a [`Corona`].
///
/// This is distinct from [`ValidationFailure`]: a value that fails here
/// cannot be interpreted as a corona at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoronaError {
    #[error("edges must have length 4")]
    EdgeCount(usize),
}

/// A center square of side `center` with edges in cyclic order.
///
/// The fields are public so that any value, well-formed or not, can be
/// represented and passed to [`Corona::validate`]. Use [`Corona::new`] when
/// the edge count should be enforced up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Corona {
    /// Side length of the center square.
    pub center: i64,
    /// Edges in cyclic order around the center.
    pub edges: Vec<Edge>,
}

impl Corona {
    /// Create a corona, rejecting any edge count other than [`NEDGES`].
    pub fn new(center: i64, edges: Vec<Edge>) -> Result<Self, CoronaError> {
        if edges.len() != NEDGES {
            return Err(CoronaError::EdgeCount(edges.len()));
        }
        Ok(Self { center, edges })
    }

    /// Create a corona from exactly four edges.
    pub fn from_edges(center: i64, edges: [Edge; NEDGES]) -> Self {
        Self {
            center,
            edges: edges.into(),
        }
    }

    /// Check every structural, geometric and adjacency rule.
    ///
    /// See [`validation::validate`].
    pub fn validate(&self, allowed_sizes: SizeSet) -> Result<(), ValidationFailure> {
        validation::validate(self, allowed_sizes)
    }

    /// True if [`Corona::validate`] reports no failure.
    pub fn is_valid(&self, allowed_sizes: SizeSet) -> bool {
        self.validate(allowed_sizes).is_ok()
    }

    /// Rotation-invariant key of this corona's edges.
    pub fn canonical_key(&self) -> String {
        symmetry::canonical_key(&self.edges)
    }
}
