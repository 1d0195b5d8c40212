//! HTML structure check

use crate::checks::{CheckContext, read_text};
use crate::core::models::{CheckId, CheckOutcome, CheckReport, FailureReason, ItemLine};
use crate::core::services::evaluate_requirements;
use crate::paths;

/// Check `index.html` for each structural requirement
#[must_use]
pub fn run(ctx: &CheckContext<'_>) -> CheckReport {
    let content = match read_text(&paths::index_html(ctx.root)) {
        Ok(content) => content,
        Err(err) => return CheckReport::from_error(CheckId::HtmlStructure, err),
    };

    let results = evaluate_requirements(&content, &ctx.config.html_requirements);
    let failed: Vec<String> = results
        .iter()
        .filter(|(_, ok)| !ok)
        .map(|(label, _)| (*label).to_string())
        .collect();
    let items = results
        .into_iter()
        .map(|(label, ok)| if ok { ItemLine::ok(label) } else { ItemLine::failed(label) })
        .collect();

    let outcome = if failed.is_empty() {
        CheckOutcome::Passed
    } else {
        CheckOutcome::Failed {
            reason: FailureReason::SubChecksFailed { failed },
        }
    };
    CheckReport::new(CheckId::HtmlStructure, items, outcome)
}
