//! # Progress
//!
//! How far through the curriculum a stage sits, as an exact ratio.
//!
//! Progress for the stage at zero-based canonical index `i` is
//! `(i + 1) / total`. An unknown slug yields the zero-progress sentinel
//! rather than an error. Ratios are compared exactly by cross-multiplication,
//! so ordering never depends on floating-point rounding.

use crate::primitives::BASIS_POINTS_SCALE;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Completed-out-of-total ratio for one stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Progress {
    /// Stages completed up to and including the current one.
    pub completed: usize,
    /// Total stages in the catalog.
    pub total: usize,
}

impl Progress {
    /// Progress at 1-based position `completed` out of `total`.
    #[must_use]
    pub const fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// The "no progress" sentinel used for unknown slugs.
    #[must_use]
    pub const fn none(total: usize) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    /// Progress as a fraction in `[0, 1]`.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed.min(self.total) as f64 / self.total as f64
    }

    /// Progress as a percentage in `[0, 100]`.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed.min(self.total) as f64 * 100.0) / self.total as f64
    }

    /// Progress in basis points (10_000 = 100%), rounded down.
    #[must_use]
    pub fn basis_points(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let completed = self.completed.min(self.total) as u64;
        (completed.saturating_mul(BASIS_POINTS_SCALE as u64) / self.total as u64) as u32
    }

    /// True once the last stage is reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }

    /// True for any known stage; false for the sentinel.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.completed > 0
    }

    fn cross(&self, other: &Self) -> (u128, u128) {
        let lhs = (self.completed as u128).saturating_mul(other.total.max(1) as u128);
        let rhs = (other.completed as u128).saturating_mul(self.total.max(1) as u128);
        (lhs, rhs)
    }
}

impl PartialEq for Progress {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(other);
        lhs == rhs
    }
}

impl Eq for Progress {}

impl PartialOrd for Progress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Progress {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.cross(other);
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage {} of {}", self.completed, self.total)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::float_arithmetic)]
mod tests {
    use super::*;

    #[test]
    fn five_of_sixteen() {
        let p = Progress::new(5, 16);
        assert_eq!(p.fraction(), 0.3125);
        assert_eq!(p.percent(), 31.25);
        assert_eq!(p.basis_points(), 3125);
        assert!(!p.is_complete());
    }

    #[test]
    fn last_stage_is_complete() {
        let p = Progress::new(16, 16);
        assert_eq!(p.fraction(), 1.0);
        assert_eq!(p.percent(), 100.0);
        assert_eq!(p.basis_points(), BASIS_POINTS_SCALE);
        assert!(p.is_complete());
    }

    #[test]
    fn sentinel_is_zero() {
        let p = Progress::none(16);
        assert_eq!(p.fraction(), 0.0);
        assert_eq!(p.basis_points(), 0);
        assert!(!p.is_started());
        assert!(!p.is_complete());
    }

    #[test]
    fn empty_total_never_divides() {
        let p = Progress::none(0);
        assert_eq!(p.fraction(), 0.0);
        assert_eq!(p.percent(), 0.0);
        assert_eq!(p.basis_points(), 0);
    }

    #[test]
    fn ordering_is_exact() {
        assert!(Progress::new(1, 3) < Progress::new(2, 3));
        assert_eq!(Progress::new(1, 2), Progress::new(8, 16));
        assert!(Progress::none(16) < Progress::new(1, 16));
    }

    #[test]
    fn display_reads_as_position() {
        assert_eq!(Progress::new(5, 16).to_string(), "Stage 5 of 16");
    }
}
