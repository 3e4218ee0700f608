// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the enumeration.
//! Each predicate represents a choice point or filter in the search space.
//!
//! # Organization
//!
//! - `enumerate`: ChooseEdgePredicate, ValidatePredicate, DedupPredicate
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod enumerate;

// Re-export main predicates for convenience
pub use enumerate::{ChooseEdgePredicate, DedupPredicate, ValidatePredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Placed at the end of
/// a sequence it makes the engine explore every alternative, with results
/// collected as side effects by the predicates before it.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Pauses the search so the caller can inspect the context; searching the
/// returned engine again resumes with the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
