//! Readiness checks
//!
//! Each check inspects the site directory and returns a [`CheckReport`].
//! Checks never return errors: anything that goes wrong is converted into a
//! failed outcome so the remaining checks still run.
//!
//! - [`files`] - Required files exist
//! - [`resume`] - The resume builder runs
//! - [`html`] - `index.html` structure
//! - [`placeholders`] - Leftover placeholder links and contact details
//! - [`images`] - Leftover placeholder images
//! - [`deployment_info`] - Writes the status artifact

pub mod deployment_info;
pub mod files;
pub mod html;
pub mod images;
pub mod placeholders;
pub mod resume;

use std::fs;
use std::path::Path;

use crate::config::CheckerConfig;
use crate::core::models::{CheckId, CheckReport};
use crate::error::CheckError;

/// Inputs shared by every check
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Site directory
    pub root: &'a Path,
    /// Needles and file lists
    pub config: &'a CheckerConfig,
    /// Resume builder to spawn, if one was found
    pub generator: Option<&'a Path>,
}

/// Run every check in order
#[must_use]
pub fn run_all(ctx: &CheckContext<'_>) -> Vec<CheckReport> {
    CheckId::ALL.iter().map(|&id| run_check(id, ctx)).collect()
}

/// Run a single check
#[must_use]
pub fn run_check(id: CheckId, ctx: &CheckContext<'_>) -> CheckReport {
    log::debug!("Running {id} check in {}", ctx.root.display());
    let report = match id {
        CheckId::RequiredFiles => files::run(ctx),
        CheckId::ResumeGeneration => resume::run(ctx),
        CheckId::HtmlStructure => html::run(ctx),
        CheckId::PlaceholderLinks => placeholders::run(ctx),
        CheckId::PlaceholderImages => images::run(ctx),
        CheckId::DeploymentInfo => deployment_info::run(ctx),
    };
    log::debug!("{id} check passed: {}", report.passed());
    report
}

/// Read a site file as UTF-8 text
pub(crate) fn read_text(path: &Path) -> Result<String, CheckError> {
    let bytes = fs::read(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| CheckError::NotUtf8 {
        path: path.to_path_buf(),
    })
}
