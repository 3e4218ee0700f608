// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry reduction for coronas using the cyclic group C_4.
//!
//! Two coronas whose edge lists differ only by a rotation describe the same
//! shape turned a quarter (or half) turn, and share a canonical key.
//!
//! ## Module Structure
//!
//! - `cyclic`: Rotation signatures and canonical keys
//! - `mod`: Public API and re-exports

pub mod cyclic;

pub use cyclic::{canonical_key, edge_signature, rotation_signatures, rotational_order};
