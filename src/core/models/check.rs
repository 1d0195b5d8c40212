//! Check model - the result of one readiness check
//!
//! A check never aborts the run. Whatever happens inside it ends up here as
//! a [`CheckOutcome`], with a typed [`FailureReason`] when it failed.

use std::fmt;
use std::io;

use serde::Serialize;

use crate::error::CheckError;

/// The six readiness checks, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// Required site files exist
    RequiredFiles,
    /// The resume builder runs successfully
    ResumeGeneration,
    /// `index.html` has the expected structure
    HtmlStructure,
    /// No placeholder contact details or links remain
    PlaceholderLinks,
    /// No placeholder images remain
    PlaceholderImages,
    /// The status artifact was written
    DeploymentInfo,
}

impl CheckId {
    /// Every check, in run order
    pub const ALL: [Self; 6] = [
        Self::RequiredFiles,
        Self::ResumeGeneration,
        Self::HtmlStructure,
        Self::PlaceholderLinks,
        Self::PlaceholderImages,
        Self::DeploymentInfo,
    ];

    /// Heading printed before the check's results
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::RequiredFiles => "Checking required files",
            Self::ResumeGeneration => "Generating resume PDF",
            Self::HtmlStructure => "Validating HTML structure",
            Self::PlaceholderLinks => "Checking for placeholder links",
            Self::PlaceholderImages => "Checking image optimization",
            Self::DeploymentInfo => "Creating deployment info",
        }
    }

    /// Follow-up advice printed when the check fails
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::PlaceholderLinks => Some("Update placeholder links with real contact information"),
            Self::PlaceholderImages => Some("Consider adding real profile and project images"),
            _ => None,
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RequiredFiles => "required_files",
            Self::ResumeGeneration => "resume_generation",
            Self::HtmlStructure => "html_structure",
            Self::PlaceholderLinks => "placeholder_links",
            Self::PlaceholderImages => "placeholder_images",
            Self::DeploymentInfo => "deployment_info",
        };
        f.write_str(name)
    }
}

/// Coarse classification of an I/O error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IoFailure {
    /// The file does not exist
    NotFound,
    /// The file exists but may not be accessed
    PermissionDenied,
    /// Any other I/O error
    Other,
}

impl From<io::ErrorKind> for IoFailure {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

/// Why a check failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// Required files are absent
    MissingFiles {
        /// Names of the absent files
        files: Vec<String>,
    },
    /// Reading or writing a file failed
    Io {
        /// File involved
        path: String,
        /// Error classification
        error: IoFailure,
        /// Error text
        message: String,
    },
    /// A file was readable but its content is unusable
    MalformedContent {
        /// File involved
        path: String,
        /// What is wrong with it
        message: String,
    },
    /// The resume generator could not be started
    GeneratorSpawn {
        /// Program that was started
        program: String,
        /// Error text
        message: String,
    },
    /// The resume generator exited unsuccessfully
    GeneratorExited {
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },
    /// Some structural sub-checks did not match
    SubChecksFailed {
        /// Labels of the failing sub-checks
        failed: Vec<String>,
    },
    /// Placeholder values are still present
    PlaceholdersFound {
        /// The values found, in configured order
        values: Vec<String>,
    },
    /// Placeholder images are still referenced
    PlaceholderImages {
        /// Number of references
        count: usize,
    },
    /// The status artifact could not be encoded
    Serialization {
        /// Error text
        message: String,
    },
    /// A config override is invalid
    InvalidConfig {
        /// Error text
        message: String,
    },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFiles { files } => write!(f, "Missing files: {}", files.join(", ")),
            Self::Io { message, .. } | Self::Serialization { message } | Self::InvalidConfig { message } => {
                f.write_str(message)
            },
            Self::MalformedContent { path, message } => write!(f, "{path}: {message}"),
            Self::GeneratorSpawn { program, message } => {
                write!(f, "Error running resume generator {program}: {message}")
            },
            Self::GeneratorExited { code, stderr } => {
                let status = code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"));
                if stderr.trim().is_empty() {
                    write!(f, "Resume generation failed ({status})")
                } else {
                    write!(f, "Resume generation failed ({status}): {}", stderr.trim())
                }
            },
            Self::SubChecksFailed { failed } => write!(f, "Failed: {}", failed.join(", ")),
            Self::PlaceholdersFound { values } => {
                write!(f, "{} placeholder value(s) found", values.len())
            },
            Self::PlaceholderImages { count } => write!(f, "Found {count} placeholder images"),
        }
    }
}

impl From<CheckError> for FailureReason {
    fn from(err: CheckError) -> Self {
        let message = err.to_string();
        match err {
            CheckError::Read { path, source } | CheckError::Write { path, source } => Self::Io {
                path: path.display().to_string(),
                error: IoFailure::from(source.kind()),
                message,
            },
            CheckError::NotUtf8 { path } => Self::MalformedContent {
                path: path.display().to_string(),
                message: "not valid UTF-8".to_string(),
            },
            CheckError::Spawn { program, source } => Self::GeneratorSpawn {
                program: program.display().to_string(),
                message: source.to_string(),
            },
            CheckError::Serialize(_) => Self::Serialization { message },
            CheckError::Config { .. } => Self::InvalidConfig { message },
        }
    }
}

/// Final state of a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The precondition holds
    Passed,
    /// The check had nothing to do; counts as a pass
    Skipped {
        /// Why nothing was done
        reason: String,
    },
    /// The precondition does not hold
    Failed {
        /// Why
        reason: FailureReason,
    },
}

impl CheckOutcome {
    /// Whether this outcome adds to the pass count
    #[must_use]
    pub const fn counts_as_pass(&self) -> bool {
        matches!(self, Self::Passed | Self::Skipped { .. })
    }
}

/// One printed result line inside a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLine {
    /// What was checked
    pub label: String,
    /// Whether it was fine
    pub ok: bool,
    /// Extra detail printed after the label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ItemLine {
    /// A passing line
    pub fn ok(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ok: true,
            detail: None,
        }
    }

    /// A failing line
    pub fn failed(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ok: false,
            detail: None,
        }
    }

    /// Attach detail text
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Everything one check reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Which check
    pub id: CheckId,
    /// Per-item results, in check order
    pub items: Vec<ItemLine>,
    /// Verdict
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

impl CheckReport {
    /// Create a report with the given verdict
    #[must_use]
    pub const fn new(id: CheckId, items: Vec<ItemLine>, outcome: CheckOutcome) -> Self {
        Self { id, items, outcome }
    }

    /// Report for a check that hit an error before producing items
    #[must_use]
    pub fn from_error(id: CheckId, err: CheckError) -> Self {
        log::warn!("{id} check failed: {err}");
        Self::new(id, Vec::new(), CheckOutcome::Failed { reason: err.into() })
    }

    /// Whether the check counts toward the pass total
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.outcome.counts_as_pass()
    }

    /// Failure reason, if the check failed
    #[must_use]
    pub const fn failure(&self) -> Option<&FailureReason> {
        match &self.outcome {
            CheckOutcome::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}
