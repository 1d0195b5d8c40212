//! Centralized path definitions for the portfolio site
//!
//! Every file the tools read or write lives directly in the site directory.
//!
//! ```text
//! site/
//! ├── index.html               # checked: presence, structure, placeholders
//! ├── styles.css               # checked: presence
//! ├── script.js                # checked: presence
//! ├── README.md                # checked: presence
//! ├── resume.pdf               # written by portfolio-resume
//! └── deployment-info.json     # written by portfolio-deploy
//! ```

use std::env;
use std::path::{Path, PathBuf};

/// Site entry page
pub const INDEX_HTML: &str = "index.html";

/// Site stylesheet
pub const STYLES_CSS: &str = "styles.css";

/// Site script
pub const SCRIPT_JS: &str = "script.js";

/// Site readme
pub const README_MD: &str = "README.md";

/// Generated resume document
pub const RESUME_PDF: &str = "resume.pdf";

/// Status artifact written by the readiness checker
pub const DEPLOYMENT_INFO_JSON: &str = "deployment-info.json";

/// Name of the resume builder executable
pub const RESUME_BINARY: &str = "portfolio-resume";

/// Get path to `index.html` inside the site directory.
#[must_use]
pub fn index_html(root: &Path) -> PathBuf {
    root.join(INDEX_HTML)
}

/// Get path to `resume.pdf` inside the site directory.
#[must_use]
pub fn resume_pdf(root: &Path) -> PathBuf {
    root.join(RESUME_PDF)
}

/// Get path to `deployment-info.json` inside the site directory.
#[must_use]
pub fn deployment_info(root: &Path) -> PathBuf {
    root.join(DEPLOYMENT_INFO_JSON)
}

/// Find an executable installed next to the running binary.
///
/// Cargo places every `[[bin]]` of a package in the same directory, so the
/// checker finds the resume builder this way in both `target/` and an
/// installed `bin/` directory.
#[must_use]
pub fn sibling_executable(name: &str) -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let candidate = exe
        .parent()?
        .join(format!("{name}{}", env::consts::EXE_SUFFIX));
    candidate.is_file().then_some(candidate)
}
