//! Placeholder links check

use crate::checks::{CheckContext, read_text};
use crate::core::models::{CheckId, CheckOutcome, CheckReport, FailureReason, ItemLine};
use crate::core::services::find_placeholders;
use crate::paths;

/// Check `index.html` for contact details and links that were never filled in
#[must_use]
pub fn run(ctx: &CheckContext<'_>) -> CheckReport {
    let content = match read_text(&paths::index_html(ctx.root)) {
        Ok(content) => content,
        Err(err) => return CheckReport::from_error(CheckId::PlaceholderLinks, err),
    };

    let found = find_placeholders(&content, &ctx.config.placeholders);
    if found.is_empty() {
        return CheckReport::new(
            CheckId::PlaceholderLinks,
            vec![ItemLine::ok("No placeholder links found")],
            CheckOutcome::Passed,
        );
    }

    let items = found.iter().map(|value| ItemLine::failed(*value)).collect();
    let values = found.into_iter().map(ToString::to_string).collect();
    CheckReport::new(
        CheckId::PlaceholderLinks,
        items,
        CheckOutcome::Failed {
            reason: FailureReason::PlaceholdersFound { values },
        },
    )
}
