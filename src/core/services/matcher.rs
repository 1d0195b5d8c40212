//! Substring matcher service - matches literal needles against site content
//!
//! This module contains pure matching logic with no I/O dependencies. Every
//! match is an exact, case-sensitive substring test.

use crate::config::HtmlRequirement;

/// Test every structural requirement against the page content
///
/// # Returns
///
/// `(label, present)` for each requirement, in configured order
#[must_use]
pub fn evaluate_requirements<'a>(
    content: &str,
    requirements: &'a [HtmlRequirement],
) -> Vec<(&'a str, bool)> {
    requirements
        .iter()
        .map(|r| (r.label.as_str(), content.contains(&r.needle)))
        .collect()
}

/// Find which placeholder values are present in the content
///
/// # Returns
///
/// The placeholders found, in configured order
#[must_use]
pub fn find_placeholders<'a>(content: &str, placeholders: &'a [String]) -> Vec<&'a str> {
    placeholders
        .iter()
        .filter(|p| !p.is_empty() && content.contains(p.as_str()))
        .map(String::as_str)
        .collect()
}

/// Count non-overlapping occurrences of `needle`
///
/// An empty needle never matches.
#[must_use]
pub fn count_occurrences(content: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    content.matches(needle).count()
}
