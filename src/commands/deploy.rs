//! Run the readiness checks and report

use std::path::PathBuf;

use chrono::Local;

use portfolio_kit::checks::{self, CheckContext, resume::locate_generator};
use portfolio_kit::config::CheckerConfig;
use portfolio_kit::core::services::summarize;
use portfolio_kit::output::{OutputMode, ReadinessReport};

/// Options for a readiness run
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Site directory
    pub dir: PathBuf,
    /// Config override file
    pub config: Option<PathBuf>,
    /// Fail the process unless every check passes
    pub strict: bool,
}

/// Run every readiness check against the site directory
pub fn deploy(options: &DeployOptions, mode: OutputMode) -> anyhow::Result<()> {
    let config = match &options.config {
        Some(path) => CheckerConfig::load(path)?,
        None => CheckerConfig::default(),
    };

    let generator = locate_generator(&config);
    match &generator {
        Some(path) => log::debug!("Using resume generator {}", path.display()),
        None => log::debug!("No resume generator found"),
    }

    let ctx = CheckContext {
        root: &options.dir,
        config: &config,
        generator: generator.as_deref(),
    };
    let reports = checks::run_all(&ctx);
    let summary = summarize(&reports);

    let report = ReadinessReport {
        site_dir: options.dir.display().to_string(),
        checks: reports,
        summary,
        prepared_at: Local::now().format("%B %d, %Y at %I:%M %p").to_string(),
    };
    report.render(mode)?;

    if options.strict && !summary.all_passed() {
        anyhow::bail!(
            "{} of {} readiness checks failed",
            summary.total - summary.passed,
            summary.total
        );
    }

    Ok(())
}
