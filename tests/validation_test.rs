// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for parsing and validating coronas in compact form.

mod common;

use common::corona;
use corona_search::{Corona, FailureKind, ParseError, SizeSet, ValidationFailure};

fn kind(text: &str) -> Option<FailureKind> {
    corona(text)
        .validate(SizeSet::default())
        .err()
        .map(|failure| failure.kind())
}

#[test]
fn test_uniform_corona_is_valid() {
    assert_eq!(kind("2|3^0|3^0|3^0|3^0"), None);
    assert_eq!(kind("1|2^0|3^0|4^0|2^0"), None);
}

#[test]
fn test_center_sized_aligned() {
    let c = corona("1|1^0|2^0|2^0|2^0");
    let failure = c.validate(SizeSet::default()).unwrap_err();
    assert_eq!(failure.kind(), FailureKind::CenterSizedAligned);
    assert_eq!(failure.edge(), Some(0));
    assert_eq!(
        failure.reason(),
        "not unilateral (center-sized aligned)"
    );
}

#[test]
fn test_isolated_unit_square() {
    let c = corona("2|1^0,2^1|1^0,2^1|1^0,4^1|1^0,4^1");
    let failure = c.validate(SizeSet::default()).unwrap_err();
    assert_eq!(failure.kind(), FailureKind::IsolatedUnitSquare);
    assert!(matches!(
        failure,
        ValidationFailure::IsolatedUnitSquare { .. }
    ));
}

#[test]
fn test_wrong_edge_count() {
    let err = Corona::from_compact("1|2^0|2^0|2^0").unwrap_err();
    assert_eq!(err, ParseError::FieldCount(4));
    assert_eq!(err.to_string(), "Expected center + 4 edges");
}

#[test]
fn test_malformed_input() {
    assert_eq!(kind("x|2^0|2^0|2^0|2^0"), Some(FailureKind::NonPositiveCenter));
    assert!(matches!(
        Corona::from_compact("1|2^0|2-0|2^0|2^0"),
        Err(ParseError::BadToken(_))
    ));
}

#[test]
fn test_oversized_numbers_are_validation_failures() {
    assert_eq!(kind("1|99999999999^0|2^0|2^0|2^0"), Some(FailureKind::InvalidSegmentSize));
    assert_eq!(
        kind("1|2^99999999999999999999|2^0|2^0|2^0"),
        Some(FailureKind::OffsetOutOfRange)
    );
}

#[test]
fn test_whitespace_is_ignored() {
    let c = corona(" 2 | 3^0 | 3^0 | 3^0 | 3^0 ");
    assert_eq!(c.to_compact(), "2|3^0|3^0|3^0|3^0");
}

#[test]
fn test_rule_violations() {
    assert_eq!(kind("0|2^0|2^0|2^0|2^0"), Some(FailureKind::NonPositiveCenter));
    assert_eq!(kind("1|5^0|2^0|2^0|2^0"), Some(FailureKind::InvalidSegmentSize));
    assert_eq!(kind("2|3^-1|3^0|3^0|3^0"), Some(FailureKind::OffsetOutOfRange));
    assert_eq!(kind("3|1^0,1^1,4^2|4^0|4^0|4^0"), Some(FailureKind::EqualAdjacentSizes));
    assert_eq!(kind("3|4^4|4^0|4^0|4^0"), Some(FailureKind::OffsetOutOfRange));
    assert_eq!(kind("3|4^1|4^0|4^0|4^0"), Some(FailureKind::DoesNotStartAtZero));
    assert_eq!(kind("3|1^0,2^2|4^0|4^0|4^0"), Some(FailureKind::InvalidEdgeWalk));
    assert_eq!(kind("4|1^0,2^1|3^0|3^0|3^0"), Some(FailureKind::DoesNotReachCenter));
}

#[test]
fn test_restricted_sizes_reject_unlisted_size() {
    let c = corona("2|3^0|3^0|3^0|4^0");
    let sizes: SizeSet = "1,2,3".parse().unwrap();
    assert!(!c.is_valid(sizes));
    assert!(c.is_valid(SizeSet::default()));
}

#[test]
fn test_failure_display_names_reason() {
    let failure = corona("2|1^0,2^1|1^0,2^1|1^0,4^1|1^0,4^1")
        .validate(SizeSet::default())
        .unwrap_err();
    assert!(failure
        .to_string()
        .starts_with("isolated 1x1 square trapped by larger squares"));
}
