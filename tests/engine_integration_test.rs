// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine running corona predicates.
//!
//! These tests validate that the engine correctly:
//! - Runs the validation and dedup predicates on a fixed candidate
//! - Backtracks through deterministic predicates
//! - Suspends after each unique corona when requested

mod common;

use common::{compact, FixedEdgesPredicate};
use corona_search::context::SearchContext;
use corona_search::engine::EngineBuilder;
use corona_search::enumerate::enumeration_engine;
use corona_search::predicates::{
    ChooseEdgePredicate, DedupPredicate, FailPredicate, SuspendPredicate, ValidatePredicate,
};
use corona_search::state::Counters;
use corona_search::{enumerate_unique_coronas, FailureKind, SizeSet};

#[test]
fn test_fixed_valid_candidate() {
    // Center 2 walks: 1^0,2^1 | 1^0,3^1 | 1^0,4^1 | 3^0 | 4^0
    let mut ctx = SearchContext::new(2, SizeSet::default());
    let engine = EngineBuilder::new()
        .add(Box::new(FixedEdgesPredicate([3, 3, 3, 3])))
        .add(Box::new(ValidatePredicate))
        .add(Box::new(DedupPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(compact(&ctx.state.unique), vec!["2|3^0|3^0|3^0|3^0"]);
    assert_eq!(ctx.statistics.get(Counters::SymmetricCoronas), 1);
}

#[test]
fn test_fixed_rejected_candidate() {
    let mut ctx = SearchContext::new(2, SizeSet::default());
    let engine = EngineBuilder::new()
        .add(Box::new(FixedEdgesPredicate([0, 0, 2, 2])))
        .add(Box::new(ValidatePredicate))
        .add(Box::new(DedupPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert!(ctx.state.unique.is_empty());
    assert_eq!(ctx.statistics.get(Counters::Candidates), 1);
    assert_eq!(
        ctx.statistics.rejections(FailureKind::IsolatedUnitSquare),
        1
    );
}

#[test]
fn test_fixed_choice_out_of_range_fails() {
    let mut ctx = SearchContext::new(1, SizeSet::default());
    let engine = EngineBuilder::new()
        .add(Box::new(FixedEdgesPredicate([0, 0, 0, 9])))
        .add(Box::new(ValidatePredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::Candidates), 0);
}

#[test]
fn test_suspend_after_each_unique_corona() {
    let mut ctx = SearchContext::new(1, SizeSet::default());
    let mut engine = EngineBuilder::new()
        .add(Box::new(ChooseEdgePredicate))
        .add(Box::new(ValidatePredicate))
        .add(Box::new(DedupPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let mut suspensions = 0;
    while let Some(suspended) = engine.search(&mut ctx) {
        suspensions += 1;
        assert_eq!(ctx.state.unique.len(), suspensions);
        engine = suspended;
    }
    assert_eq!(suspensions, 24);
    assert_eq!(
        ctx.state.unique,
        enumerate_unique_coronas(1, SizeSet::default())
    );
}

#[test]
fn test_enumeration_engine_statistics() {
    let mut ctx = SearchContext::new(1, SizeSet::default());
    let engine = enumeration_engine();
    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::Candidates), 81);
}
