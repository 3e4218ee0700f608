// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state for one enumeration.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): center size, allowed sizes and the edge walks, fixed
//!   before the search starts
//! - Tier 2 (DYNAMIC): the edge chosen for each side, the candidate corona,
//!   the canonical keys seen so far and the catalog being built
//!
//! A context belongs to exactly one enumeration. Nothing in it is shared
//! between enumerations, so independent contexts (one per center size, say)
//! can run side by side.

use crate::geometry::constants::NEDGES;
use crate::geometry::{Corona, Edge, SizeSet};
use crate::state::statistics::Statistics;
use crate::walks::generate_edge_walks;
use std::collections::HashSet;

/// Immutable precomputed data (Tier 1: MEMO).
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Side length of the center square.
    pub center: u32,

    /// Segment sizes edges may use.
    pub allowed_sizes: SizeSet,

    /// Every edge walk for this center, in generation order.
    ///
    /// Choice `i` on any side picks `walks[i]`.
    pub walks: Vec<Edge>,
}

impl MemoizedData {
    /// Generate the edge walks for `center`.
    pub fn new(center: u32, allowed_sizes: SizeSet) -> Self {
        let walks = generate_edge_walks(center, allowed_sizes);

        tracing::debug!(
            center,
            sizes = %allowed_sizes,
            walks = walks.len(),
            "generated edge walks"
        );

        Self {
            center,
            allowed_sizes,
            walks,
        }
    }
}

/// Mutable search state (Tier 2: DYNAMIC).
///
/// No trail is needed: round `r` of the edge choice always overwrites
/// `choices[r]` before anything reads it, and the candidate is rebuilt from
/// the choices each time.
#[derive(Debug, Default)]
pub struct DynamicState {
    /// Index into `MemoizedData::walks` chosen for each side.
    pub choices: [usize; NEDGES],

    /// Corona assembled from the current choices, once it passes validation.
    pub candidate: Option<Corona>,

    /// Canonical keys of the coronas kept so far.
    pub seen: HashSet<String>,

    /// Unique coronas in the order they were found.
    pub unique: Vec<Corona>,
}

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,        // Tier 1: Immutable
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // Counters for this enumeration
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: MemoizedData,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Enumeration counters
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context for enumerating coronas around `center`.
    pub fn new(center: u32, allowed_sizes: SizeSet) -> Self {
        Self::with_memo(MemoizedData::new(center, allowed_sizes))
    }

    /// Create a context with existing MEMO data.
    pub fn with_memo(memo: MemoizedData) -> Self {
        Self {
            memo,
            state: DynamicState::default(),
            statistics: Statistics::new(),
        }
    }

    /// Record the walk chosen for side `round`.
    ///
    /// # Panics
    ///
    /// Panics if round >= NEDGES.
    pub fn set_choice(&mut self, round: usize, choice: usize) {
        assert!(round < NEDGES, "Edge round out of bounds: {}", round);
        self.state.choices[round] = choice;
    }

    /// Build the corona described by the current choices.
    pub fn current_corona(&self) -> Corona {
        let walks = &self.memo.walks;
        let choices = &self.state.choices;
        Corona::from_edges(
            i64::from(self.memo.center),
            std::array::from_fn(|side| walks[choices[side]].clone()),
        )
    }

    /// Consume the context, returning the catalog and its statistics.
    pub fn into_results(self) -> (Vec<Corona>, Statistics) {
        (self.state.unique, self.statistics)
    }
}
