//! Placeholder images check

use crate::checks::{CheckContext, read_text};
use crate::core::models::{CheckId, CheckOutcome, CheckReport, FailureReason, ItemLine};
use crate::core::services::count_occurrences;
use crate::paths;

/// Count references to the placeholder image host in `index.html`
#[must_use]
pub fn run(ctx: &CheckContext<'_>) -> CheckReport {
    let content = match read_text(&paths::index_html(ctx.root)) {
        Ok(content) => content,
        Err(err) => return CheckReport::from_error(CheckId::PlaceholderImages, err),
    };

    let host = &ctx.config.placeholder_image_host;
    let count = count_occurrences(&content, host);
    if count == 0 {
        return CheckReport::new(
            CheckId::PlaceholderImages,
            vec![ItemLine::ok("No placeholder images found")],
            CheckOutcome::Passed,
        );
    }

    CheckReport::new(
        CheckId::PlaceholderImages,
        vec![ItemLine::failed(host.as_str()).with_detail(format!("{count} reference(s)"))],
        CheckOutcome::Failed {
            reason: FailureReason::PlaceholderImages { count },
        },
    )
}
