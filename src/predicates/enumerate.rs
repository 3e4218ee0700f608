// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that enumerate coronas.
//!
//! Run in sequence, followed by [`FailPredicate`](super::FailPredicate):
//!
//! 1. `ChooseEdgePredicate` picks an edge walk for each of the four sides,
//!    side 0 outermost, so candidates are visited in lexicographic order of
//!    their walk indices.
//! 2. `ValidatePredicate` builds the candidate corona and rejects it unless
//!    it passes every rule.
//! 3. `DedupPredicate` keeps the candidate only if no rotation of it has
//!    been kept already.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::constants::NEDGES;
use crate::state::Counters;
use crate::symmetry;

/// Chooses the edge walk on each side, one round per side.
///
/// Rounds 0..NEDGES offer one choice per edge walk; round NEDGES succeeds
/// once every side has been chosen.
#[derive(Debug)]
pub struct ChooseEdgePredicate;

impl Predicate for ChooseEdgePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == NEDGES {
            return PredicateResult::Success;
        }
        match ctx.memo.walks.len() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        debug_assert!(
            choice < ctx.memo.walks.len(),
            "Invalid choice {} with only {} edge walks",
            choice,
            ctx.memo.walks.len()
        );
        ctx.set_choice(round, choice);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ChooseEdge"
    }
}

/// Builds the chosen corona and fails unless it is valid.
#[derive(Debug)]
pub struct ValidatePredicate;

impl Predicate for ValidatePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let corona = ctx.current_corona();
        ctx.statistics.increment_counter(Counters::Candidates);

        match corona.validate(ctx.memo.allowed_sizes) {
            Ok(()) => {
                ctx.statistics.increment_counter(Counters::ValidCandidates);
                ctx.state.candidate = Some(corona);
                PredicateResult::Success
            }
            Err(failure) => {
                tracing::trace!(corona = %corona, %failure, "rejected candidate");
                ctx.statistics.record_rejection(&failure);
                ctx.state.candidate = None;
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Validate"
    }
}

/// Keeps the candidate if its canonical key is new.
#[derive(Debug)]
pub struct DedupPredicate;

impl Predicate for DedupPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(corona) = ctx.state.candidate.take() else {
            return PredicateResult::Failure;
        };

        let key = corona.canonical_key();
        if ctx.state.seen.contains(&key) {
            ctx.statistics.increment_counter(Counters::RotationalDuplicates);
            return PredicateResult::Failure;
        }

        if symmetry::rotational_order(&corona.edges) > 1 {
            ctx.statistics.increment_counter(Counters::SymmetricCoronas);
        }
        ctx.statistics.increment_counter(Counters::UniqueCoronas);
        ctx.state.seen.insert(key);
        ctx.state.unique.push(corona);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Dedup"
    }
}
