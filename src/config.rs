//! Checker configuration
//!
//! Every list the readiness checks look for is held here. The defaults are
//! the values the portfolio site ships with; an override file is only read
//! when one is passed with `--config`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::paths;

/// One literal substring `index.html` must contain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlRequirement {
    /// Name printed next to the result
    pub label: String,
    /// Exact, case-sensitive substring to look for
    pub needle: String,
}

impl HtmlRequirement {
    fn new(label: &str, needle: &str) -> Self {
        Self {
            label: label.to_string(),
            needle: needle.to_string(),
        }
    }
}

/// Readiness checker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Files that must exist in the site directory
    pub required_files: Vec<String>,
    /// Structural substrings `index.html` must contain
    pub html_requirements: Vec<HtmlRequirement>,
    /// Stand-in values that must be replaced before go-live
    pub placeholders: Vec<String>,
    /// Host serving placeholder images
    pub placeholder_image_host: String,
    /// Explicit resume generator, overriding discovery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_generator: Option<PathBuf>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            required_files: [
                paths::INDEX_HTML,
                paths::STYLES_CSS,
                paths::SCRIPT_JS,
                paths::README_MD,
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            html_requirements: vec![
                HtmlRequirement::new("DOCTYPE declaration", "<!DOCTYPE html>"),
                HtmlRequirement::new("HTML lang attribute", "lang=\"en\""),
                HtmlRequirement::new("Meta charset", "charset=\"UTF-8\""),
                HtmlRequirement::new("Meta viewport", "viewport"),
                HtmlRequirement::new("Title tag", "<title>"),
                HtmlRequirement::new("CSS link", paths::STYLES_CSS),
                HtmlRequirement::new("JavaScript link", paths::SCRIPT_JS),
            ],
            placeholders: [
                "href=\"#\"",
                "https://linkedin.com/in/anurag-mishra",
                "https://github.com/anuragmishra",
                "anurag.mishra@email.com",
                "+91 98765 43210",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            placeholder_image_host: "via.placeholder.com".to_string(),
            resume_generator: None,
        }
    }
}

impl CheckerConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config override file
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let content = fs::read_to_string(path).map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| CheckError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded checker config from {}", path.display());
        Ok(config)
    }
}
