//! Readiness service - tallies check outcomes
//!
//! Pure logic with no I/O: every check is counted regardless of what the
//! others reported.

use serde::Serialize;

use crate::core::models::{CheckReport, ReadinessTier};

/// Pass count and verdict for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessSummary {
    /// Checks that passed or were skipped
    pub passed: usize,
    /// Checks that ran
    pub total: usize,
    /// Verdict
    pub tier: ReadinessTier,
}

impl ReadinessSummary {
    /// Whether every check passed
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Count passes and derive the readiness tier
#[must_use]
pub fn summarize(reports: &[CheckReport]) -> ReadinessSummary {
    let passed = reports.iter().filter(|r| r.passed()).count();
    let total = reports.len();

    ReadinessSummary {
        passed,
        total,
        tier: ReadinessTier::from_counts(passed, total),
    }
}
