//! Deployment status artifact
//!
//! Written once per checker run as `deployment-info.json` and never read back
//! by the checker itself.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Site version recorded in the artifact
pub const SITE_VERSION: &str = "1.0.0";

/// Status recorded in the artifact
pub const READY_STATUS: &str = "ready";

/// Notes recorded in the artifact
pub const DEPLOYMENT_NOTES: [&str; 3] = [
    "Portfolio website for Anurag Mishra",
    "Data Science graduate from VIT",
    "Optimized for global recruitment",
];

/// Which expected files exist at write time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackedFiles {
    /// `index.html`
    pub html: bool,
    /// `styles.css`
    pub css: bool,
    /// `script.js`
    pub js: bool,
    /// `README.md`
    pub readme: bool,
    /// `resume.pdf`
    pub resume: bool,
}

impl TrackedFiles {
    /// Probe the site directory
    #[must_use]
    pub fn scan(root: &Path) -> Self {
        Self {
            html: root.join(paths::INDEX_HTML).exists(),
            css: root.join(paths::STYLES_CSS).exists(),
            js: root.join(paths::SCRIPT_JS).exists(),
            readme: root.join(paths::README_MD).exists(),
            resume: root.join(paths::RESUME_PDF).exists(),
        }
    }
}

/// The `deployment-info.json` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentInfo {
    /// Local time of the run, ISO-8601 without offset
    pub deployment_date: String,
    /// Site version
    pub version: String,
    /// Always [`READY_STATUS`]
    pub status: String,
    /// Existence of each tracked file
    pub files: TrackedFiles,
    /// Free-form notes
    pub notes: Vec<String>,
}

impl DeploymentInfo {
    /// Build the record for a site directory at the given local time
    #[must_use]
    pub fn capture(root: &Path, now: NaiveDateTime) -> Self {
        Self {
            deployment_date: now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            version: SITE_VERSION.to_string(),
            status: READY_STATUS.to_string(),
            files: TrackedFiles::scan(root),
            notes: DEPLOYMENT_NOTES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Encode with two-space indentation
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
