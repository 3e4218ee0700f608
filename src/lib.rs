// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration and validation of square coronas.
//!
//! A corona is a center square of integer side length surrounded by four
//! edges, each a run of axis-aligned squares (segments) of allowed sizes
//! laid along one side of the center. Edges are numbered clockwise; every
//! segment is written `size^offset`, with the offset measured from the
//! edge's starting corner.
//!
//! # Architecture
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Computed once per center size before searching:
//! - Allowed segment sizes
//! - Every edge walk covering the center
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state owned by a single enumeration:
//! - The edge walk chosen for each side
//! - Canonical keys of coronas already kept
//! - The catalog under construction and its statistics
//!
//! # Search Algorithm
//!
//! 1. **ChooseEdgePredicate**: pick a walk for each side, four rounds
//! 2. **ValidatePredicate**: reject candidates breaking an edge or corner rule
//! 3. **DedupPredicate**: keep one corona per rotation class
//!
//! The program ends with `FailPredicate`, so the engine visits every
//! candidate in lexicographic order of walk indices.
//!
//! # Example
//!
//! ```
//! use corona_search::{enumerate_unique_coronas, Corona, SizeSet};
//!
//! let coronas = enumerate_unique_coronas(2, SizeSet::default());
//! assert_eq!(coronas.len(), 34);
//!
//! let corona: Corona = "2|3^0|3^0|3^0|3^0".parse().unwrap();
//! assert!(corona.is_valid(SizeSet::default()));
//! ```

pub mod catalog;
pub mod codec;
pub mod context;
pub mod engine;
pub mod enumerate;
pub mod geometry;
pub mod predicates;
pub mod state;
pub mod symmetry;
pub mod validation;
pub mod walks;

// Re-export commonly used types
pub use catalog::{load_coronas, Catalog, CatalogError};
pub use codec::ParseError;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use enumerate::{enumerate_unique_coronas, enumerate_with_statistics};
pub use geometry::{Corona, CoronaError, Edge, Segment, SizeSet};
pub use state::Statistics;
pub use validation::{validate, FailureKind, ValidationFailure};
pub use walks::generate_edge_walks;
