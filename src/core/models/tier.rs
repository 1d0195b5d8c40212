//! Readiness tiers
//!
//! Derived from how many checks passed.

use std::fmt;

use serde::Serialize;

/// Minimum pass count for [`ReadinessTier::MostlyReady`]
pub const MOSTLY_READY_THRESHOLD: usize = 4;

/// Overall readiness verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    /// Every check passed
    Ready,
    /// Most checks passed
    MostlyReady,
    /// Too many checks failed
    NeedsWork,
}

impl ReadinessTier {
    /// Classify a pass count
    #[must_use]
    pub const fn from_counts(passed: usize, total: usize) -> Self {
        if passed >= total {
            Self::Ready
        } else if passed >= MOSTLY_READY_THRESHOLD {
            Self::MostlyReady
        } else {
            Self::NeedsWork
        }
    }

    /// Message printed under the pass count
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ready => "Portfolio is ready for deployment!",
            Self::MostlyReady => "Portfolio is mostly ready. Address the warnings above.",
            Self::NeedsWork => "Portfolio needs more work before deployment.",
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::MostlyReady => write!(f, "mostly_ready"),
            Self::NeedsWork => write!(f, "needs_work"),
        }
    }
}
