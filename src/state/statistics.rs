// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the
//! enumeration predicates as candidates are examined, rejected or kept.

use crate::validation::{FailureKind, ValidationFailure};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Four-edge combinations examined.
    Candidates,
    /// Candidates passing validation.
    ValidCandidates,
    /// Valid candidates kept in the catalog.
    UniqueCoronas,
    /// Valid candidates dropped as rotations of a kept corona.
    RotationalDuplicates,
    /// Kept coronas that map onto themselves under a non-trivial rotation.
    SymmetricCoronas,
}

impl Counters {
    fn label(self) -> &'static str {
        match self {
            Counters::Candidates => "candidates",
            Counters::ValidCandidates => "valid",
            Counters::UniqueCoronas => "unique",
            Counters::RotationalDuplicates => "rotational duplicates",
            Counters::SymmetricCoronas => "rotationally symmetric",
        }
    }
}

/// One slot per counter, then one per kind of validation failure.
const COUNT: usize = Counters::COUNT + ValidationFailure::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count a candidate rejected for `failure`.
    pub fn record_rejection(&mut self, failure: &ValidationFailure) {
        self.stats[Counters::COUNT + failure.kind() as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of candidates rejected for the given reason.
    pub fn rejections(&self, kind: FailureKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    /// Total number of rejected candidates.
    pub fn total_rejections(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

impl fmt::Display for Statistics {
    /// One `label: value` line per non-zero entry, counters first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            writeln!(f, "{}: {}", counter.label(), self.get(counter))?;
        }
        for kind in FailureKind::iter() {
            let n = self.rejections(kind);
            if n > 0 {
                writeln!(f, "rejected ({}): {}", kind.reason(), n)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
        assert_eq!(stats.total_rejections(), 0);
    }

    #[test]
    fn test_counters_and_rejections_are_separate() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Candidates);
        stats.increment_counter(Counters::Candidates);
        stats.record_rejection(&ValidationFailure::NonPositiveCenter { center: 0 });
        stats.record_rejection(&ValidationFailure::CenterSizedAligned {
            edge: 0,
            segment: Segment::new(1, 0),
        });
        stats.record_rejection(&ValidationFailure::CenterSizedAligned {
            edge: 3,
            segment: Segment::new(1, 0),
        });

        assert_eq!(stats.get(Counters::Candidates), 2);
        assert_eq!(stats.get(Counters::ValidCandidates), 0);
        assert_eq!(stats.rejections(FailureKind::NonPositiveCenter), 1);
        assert_eq!(stats.rejections(FailureKind::CenterSizedAligned), 2);
        assert_eq!(stats.rejections(FailureKind::IsolatedUnitSquare), 0);
        assert_eq!(stats.total_rejections(), 3);
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::UniqueCoronas);
        stats.record_rejection(&ValidationFailure::EmptyEdge { edge: 1 });
        let text = stats.to_string();
        assert!(text.contains("unique: 1\n"));
        assert!(text.contains("rejected (edge empty): 1\n"));
        assert!(!text.contains("invalid edge walk"));
    }
}
