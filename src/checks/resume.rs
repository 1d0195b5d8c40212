//! Resume generation check
//!
//! Spawns the resume builder in the site directory and waits for it. There is
//! no timeout: a generator that hangs blocks the checker.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::checks::CheckContext;
use crate::config::CheckerConfig;
use crate::core::models::{CheckId, CheckOutcome, CheckReport, FailureReason, ItemLine};
use crate::error::CheckError;
use crate::paths;

/// Find the resume builder to spawn
///
/// Lookup order: the configured path, a `portfolio-resume` next to the
/// running binary, then `portfolio-resume` on `PATH`.
#[must_use]
pub fn locate_generator(config: &CheckerConfig) -> Option<PathBuf> {
    if let Some(path) = &config.resume_generator {
        return Some(path.clone());
    }
    paths::sibling_executable(paths::RESUME_BINARY).or_else(|| which::which(paths::RESUME_BINARY).ok())
}

/// Run the resume builder; a missing builder skips the check
#[must_use]
pub fn run(ctx: &CheckContext<'_>) -> CheckReport {
    let Some(program) = ctx.generator else {
        return CheckReport::new(
            CheckId::ResumeGeneration,
            Vec::new(),
            CheckOutcome::Skipped {
                reason: "Resume generator not found. Skipping PDF generation.".to_string(),
            },
        );
    };

    let output = match generate(program, ctx.root) {
        Ok(output) => output,
        Err(err) => return CheckReport::from_error(CheckId::ResumeGeneration, err),
    };

    if output.status.success() {
        let items = vec![ItemLine::ok(paths::RESUME_PDF).with_detail("Resume generated successfully")];
        CheckReport::new(CheckId::ResumeGeneration, items, CheckOutcome::Passed)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::warn!("{} exited with {}", program.display(), output.status);
        CheckReport::new(
            CheckId::ResumeGeneration,
            vec![ItemLine::failed(paths::RESUME_PDF).with_detail("Resume generation failed")],
            CheckOutcome::Failed {
                reason: FailureReason::GeneratorExited {
                    code: output.status.code(),
                    stderr,
                },
            },
        )
    }
}

fn generate(program: &Path, root: &Path) -> Result<Output, CheckError> {
    log::debug!("Spawning {} in {}", program.display(), root.display());
    let output = Command::new(program)
        .current_dir(root)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| CheckError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;
    log::debug!("Generator stdout: {}", String::from_utf8_lossy(&output.stdout).trim());
    Ok(output)
}
