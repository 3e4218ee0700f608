// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The engine follows a WAM-like execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A predicate that succeeds from try_pred leaves no alternatives behind, so
//! backtracking passes straight through it.
//!
//! # Example
//!
//! ```
//! use corona_search::context::SearchContext;
//! use corona_search::engine::EngineBuilder;
//! use corona_search::geometry::SizeSet;
//! use corona_search::predicates::{
//!     ChooseEdgePredicate, DedupPredicate, FailPredicate, ValidatePredicate,
//! };
//!
//! let mut ctx = SearchContext::new(1, SizeSet::default());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ChooseEdgePredicate))
//!     .add(Box::new(ValidatePredicate))
//!     .add(Box::new(DedupPredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // FailPredicate forces every branch to be explored; the search is
//! // exhausted and the engine consumed.
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.state.unique.len(), 24);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn call(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }
}

/// Builds a predicate sequence that is guaranteed to end with a terminal predicate.
///
/// ```
/// # use corona_search::engine::EngineBuilder;
/// # use corona_search::predicates::{ChooseEdgePredicate, FailPredicate};
/// let engine = EngineBuilder::new()
///     .add(Box::new(ChooseEdgePredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// An [`EngineBuilder`] whose sequence has been closed by a terminal predicate.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the sequence.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the sequence with a FAIL or SUSPEND predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,

    /// Whether the stack holds a suspended search to resume.
    suspended: bool,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
            suspended: false,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - call search() again to resume after
    ///   the suspending predicate
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are delivered through side effects on `ctx`, not through the
    /// return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without FAIL or
    /// SUSPEND, or if a retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            // Backtrack out of the suspending predicate
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;

            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }

            self.stack.push(StackEntry::call(0, 0));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted (all choices failed)
            };

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            if !entry.in_choice_mode {
                // Call mode: try_pred
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success | PredicateResult::SuccessSamePredicate => {
                        // No alternatives left: backtracking pops this entry
                        entry.in_choice_mode = true;
                        entry.num_choices = 0;
                        self.advance(result, pred_idx, round);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success | PredicateResult::SuccessSamePredicate => {
                        self.advance(result, pred_idx, round);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    /// Push the stack entry that follows a successful predicate.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn advance(&mut self, result: PredicateResult, pred_idx: usize, round: usize) {
        if result == PredicateResult::SuccessSamePredicate {
            self.stack.push(StackEntry::call(pred_idx, round + 1));
            return;
        }

        let next_index = pred_idx + 1;
        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All WAM programs must terminate with a FAIL or SUSPEND predicate."
            );
        }
        self.stack.push(StackEntry::call(next_index, 0));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}
