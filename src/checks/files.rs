//! Required files check

use std::fs;
use std::io;

use crate::checks::CheckContext;
use crate::core::models::{CheckId, CheckOutcome, CheckReport, FailureReason, ItemLine};
use crate::error::CheckError;

/// Check that every required file exists, reporting its size
#[must_use]
pub fn run(ctx: &CheckContext<'_>) -> CheckReport {
    let mut items = Vec::new();
    let mut missing = Vec::new();
    let mut unreadable = None;

    for name in &ctx.config.required_files {
        let path = ctx.root.join(name);
        match fs::metadata(&path) {
            Ok(meta) => items.push(ItemLine::ok(name).with_detail(format!("{} bytes", meta.len()))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                missing.push(name.clone());
                items.push(ItemLine::failed(name).with_detail("Missing"));
            },
            Err(err) => {
                log::warn!("{name} unavailable: {err}");
                items.push(ItemLine::failed(name).with_detail(err.to_string()));
                if unreadable.is_none() {
                    unreadable = Some(CheckError::Read { path, source: err });
                }
            },
        }
    }

    // Absent files take precedence; other errors keep their own classification
    let outcome = match (missing.is_empty(), unreadable) {
        (false, _) => CheckOutcome::Failed {
            reason: FailureReason::MissingFiles { files: missing },
        },
        (true, Some(err)) => CheckOutcome::Failed {
            reason: FailureReason::from(err),
        },
        (true, None) => CheckOutcome::Passed,
    };
    CheckReport::new(CheckId::RequiredFiles, items, outcome)
}
