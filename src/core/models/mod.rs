//! Domain models for the readiness checker
//!
//! Plain data structures. The only I/O is [`TrackedFiles::scan`], which
//! probes for file existence.
//!
//! - [`CheckReport`] - What one readiness check found
//! - [`FailureReason`] - Why a check failed
//! - [`DeploymentInfo`] - The status artifact written for deployment
//! - [`ReadinessTier`] - Overall verdict derived from the pass count

mod check;
mod deployment;
mod tier;

pub use check::{CheckId, CheckOutcome, CheckReport, FailureReason, IoFailure, ItemLine};
pub use deployment::{DeploymentInfo, TrackedFiles};
pub use tier::ReadinessTier;
