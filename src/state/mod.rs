// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-enumeration bookkeeping.
//!
//! - `statistics`: counters for candidates examined, kept and rejected

pub mod statistics;

pub use statistics::{Counters, Statistics};
