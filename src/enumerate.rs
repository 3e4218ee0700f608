// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalogs of unique coronas.
//!
//! Every ordered choice of four edge walks is a candidate. Candidates that
//! fail validation are dropped, and of the valid ones only the first member
//! of each rotation class is kept. The search is the predicate program
//!
//! ```text
//! ChooseEdge (4 rounds) -> Validate -> Dedup -> Fail
//! ```
//!
//! run to exhaustion over a fresh [`SearchContext`]; the catalog is
//! collected as a side effect.

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::geometry::{Corona, SizeSet};
use crate::predicates::{ChooseEdgePredicate, DedupPredicate, FailPredicate, ValidatePredicate};
use crate::state::{Counters, Statistics};

/// Build the enumeration program.
pub fn enumeration_engine() -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(ChooseEdgePredicate))
        .add(Box::new(ValidatePredicate))
        .add(Box::new(DedupPredicate))
        .terminal(Box::new(FailPredicate))
        .build()
}

/// Every valid corona around `center_size`, one per rotation class.
///
/// Coronas are returned in the order first found, which is the
/// lexicographic order of their edge-walk indices.
///
/// # Examples
///
/// ```
/// use corona_search::enumerate::enumerate_unique_coronas;
/// use corona_search::geometry::SizeSet;
///
/// let coronas = enumerate_unique_coronas(1, SizeSet::default());
/// assert_eq!(coronas.len(), 24);
/// assert_eq!(coronas[0].to_compact(), "1|2^0|2^0|2^0|2^0");
/// ```
pub fn enumerate_unique_coronas(center_size: u32, allowed_sizes: SizeSet) -> Vec<Corona> {
    enumerate_with_statistics(center_size, allowed_sizes).0
}

/// Like [`enumerate_unique_coronas`], also returning the search counters.
pub fn enumerate_with_statistics(
    center_size: u32,
    allowed_sizes: SizeSet,
) -> (Vec<Corona>, Statistics) {
    let mut ctx = SearchContext::new(center_size, allowed_sizes);

    // FailPredicate never suspends, so the engine always comes back exhausted
    let _exhausted = enumeration_engine().search(&mut ctx);

    let (coronas, statistics) = ctx.into_results();

    tracing::info!(
        center = center_size,
        sizes = %allowed_sizes,
        candidates = statistics.get(Counters::Candidates),
        valid = statistics.get(Counters::ValidCandidates),
        unique = coronas.len(),
        "enumerated coronas"
    );

    (coronas, statistics)
}
