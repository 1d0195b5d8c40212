//! Deployment info check - writes the status artifact

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::checks::CheckContext;
use crate::core::models::{CheckId, CheckOutcome, CheckReport, DeploymentInfo, ItemLine};
use crate::error::CheckError;
use crate::paths;

/// Write `deployment-info.json` stamped with the current local time
#[must_use]
pub fn run(ctx: &CheckContext<'_>) -> CheckReport {
    run_at(ctx, Local::now().naive_local())
}

/// Write `deployment-info.json` stamped with `now`
#[must_use]
pub fn run_at(ctx: &CheckContext<'_>, now: NaiveDateTime) -> CheckReport {
    match write(ctx.root, now) {
        Ok(path) => {
            log::debug!("Wrote {}", path.display());
            CheckReport::new(
                CheckId::DeploymentInfo,
                vec![ItemLine::ok(paths::DEPLOYMENT_INFO_JSON).with_detail("created")],
                CheckOutcome::Passed,
            )
        },
        Err(err) => CheckReport::from_error(CheckId::DeploymentInfo, err),
    }
}

/// Capture and write the status artifact, returning its path
pub fn write(root: &Path, now: NaiveDateTime) -> Result<PathBuf, CheckError> {
    let info = DeploymentInfo::capture(root, now);
    let json = info.to_pretty_json()?;
    let path = paths::deployment_info(root);
    fs::write(&path, json).map_err(|source| CheckError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
