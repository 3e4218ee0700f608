// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SizeSet type for representing the allowed segment sizes as a bitset.
//!
//! Bit i represents size i. Size 0 is never a member, so a segment of
//! size 0 is always rejected by a `contains` check.
//!
//! # Examples
//!
//! ```
//! use corona_search::geometry::SizeSet;
//!
//! let mut set = SizeSet::empty();
//! set.insert(3).unwrap();
//! set.insert(1).unwrap();
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "{1,3}");
//!
//! // Iteration is in ascending order
//! let sizes: Vec<u32> = set.iter().collect();
//! assert_eq!(sizes, vec![1, 3]);
//! ```

use crate::geometry::constants::{DEFAULT_ALLOWED_SIZES, MAX_SEGMENT_SIZE};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejected attempt to build a [`SizeSet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeSetError {
    /// Size is 0 or larger than [`MAX_SEGMENT_SIZE`].
    #[error("segment size {0} is outside 1..=63")]
    OutOfRange(u32),

    /// A list entry was not an unsigned integer.
    #[error("bad segment size: {0:?}")]
    Unparseable(String),

    /// The list named no sizes at all.
    #[error("at least one segment size is required")]
    Empty,
}

/// A set of allowed segment sizes represented as a bitset.
///
/// O(1) insert and contains; iteration yields sizes in ascending order,
/// which fixes the order in which edge walks are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeSet(u64);

impl SizeSet {
    /// Create an empty size set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a size set from a slice of sizes.
    pub fn from_sizes(sizes: &[u32]) -> Result<Self, SizeSetError> {
        let mut set = Self::empty();
        for &size in sizes {
            set.insert(size)?;
        }
        Ok(set)
    }

    /// Check if the set contains a specific size.
    pub fn contains(self, size: u32) -> bool {
        size <= MAX_SEGMENT_SIZE && (self.0 >> size) & 1 != 0
    }

    /// Insert a size into the set.
    pub fn insert(&mut self, size: u32) -> Result<(), SizeSetError> {
        if size == 0 || size > MAX_SEGMENT_SIZE {
            return Err(SizeSetError::OutOfRange(size));
        }
        self.0 |= 1 << size;
        Ok(())
    }

    /// Get the number of sizes in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over all sizes in the set, smallest first.
    pub fn iter(self) -> impl Iterator<Item = u32> {
        SizeSetIter {
            bits: self.0,
            index: 1,
        }
    }
}

impl Default for SizeSet {
    /// The sizes {1, 2, 3, 4}.
    fn default() -> Self {
        let mut set = Self::empty();
        for size in DEFAULT_ALLOWED_SIZES {
            set.0 |= 1 << size;
        }
        set
    }
}

/// Iterator over sizes in a SizeSet.
struct SizeSetIter {
    bits: u64,
    index: u32,
}

impl Iterator for SizeSetIter {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index <= MAX_SEGMENT_SIZE {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(idx);
            }
        }
        None
    }
}

impl fmt::Display for SizeSet {
    /// Format a size set as "{1,2,3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, size) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", size)?;
        }
        write!(f, "}}")
    }
}

impl FromStr for SizeSet {
    type Err = SizeSetError;

    /// Parse a comma separated list such as "1,2,3,4", optionally in braces
    /// as written by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('{')
            .and_then(|inner| inner.strip_suffix('}'))
            .unwrap_or(s);
        let mut set = Self::empty();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let size: u32 = part
                .parse()
                .map_err(|_| SizeSetError::Unparseable(part.to_string()))?;
            set.insert(size)?;
        }
        if set.is_empty() {
            return Err(SizeSetError::Empty);
        }
        Ok(set)
    }
}
