// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use corona_search::context::SearchContext;
use corona_search::geometry::NEDGES;
use corona_search::{Corona, Predicate, PredicateResult};

/// A predicate that fixes every side to a given edge walk index.
///
/// This is used in tests to run the validation and dedup predicates on a
/// known candidate, bypassing the ChooseEdgePredicate enumeration.
#[derive(Debug)]
pub struct FixedEdgesPredicate(pub [usize; NEDGES]);

impl Predicate for FixedEdgesPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if self.0.iter().any(|&choice| choice >= ctx.memo.walks.len()) {
            eprintln!(
                "Could not fix edges to {:?}, with only {} walks",
                &self.0,
                ctx.memo.walks.len()
            );
            return PredicateResult::Failure;
        }
        for (side, &choice) in self.0.iter().enumerate() {
            ctx.set_choice(side, choice);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "FixedEdges"
    }
}

/// Parse a compact corona, panicking on malformed test input.
pub fn corona(text: &str) -> Corona {
    text.parse()
        .unwrap_or_else(|e| panic!("bad test corona {text}: {e}"))
}

/// Compact forms of `coronas`, in order.
pub fn compact(coronas: &[Corona]) -> Vec<String> {
    coronas.iter().map(Corona::to_compact).collect()
}
