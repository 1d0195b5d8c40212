//! Business logic services
//!
//! Pure logic that operates on text and reports passed in by the checks.
//!
//! - [`matcher`] - Exact substring matching against site content
//! - [`readiness`] - Tally check outcomes into a readiness verdict

pub mod matcher;
pub mod readiness;

pub use matcher::{count_occurrences, evaluate_requirements, find_placeholders};
pub use readiness::{ReadinessSummary, summarize};
