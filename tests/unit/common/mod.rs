//! Shared test fixtures and helpers
//!
//! This module provides a throwaway portfolio site for exercising the checks.

use std::fs;
use std::path::Path;

use portfolio_kit::checks::CheckContext;
use portfolio_kit::config::CheckerConfig;
use tempfile::TempDir;

/// An `index.html` that passes every structural and placeholder check
pub const CLEAN_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Anurag Mishra - Data Scientist</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <a href="https://github.com/OPanurag">GitHub</a>
    <a href="mailto:officiallyanurag1@gmail.com">Email</a>
    <img src="images/profile.jpg" alt="Profile">
    <script src="script.js"></script>
</body>
</html>
"#;

/// A temporary site directory
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    /// An empty site directory
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// A site that is ready to deploy:
    /// ```text
    /// /
    /// ├── index.html
    /// ├── styles.css
    /// ├── script.js
    /// └── README.md
    /// ```
    pub fn ready() -> Self {
        let site = Self::empty();
        site.write("index.html", CLEAN_HTML);
        site.write("styles.css", "body { margin: 0; }\n");
        site.write("script.js", "document.addEventListener('DOMContentLoaded', () => {});\n");
        site.write("README.md", "# Portfolio\n");
        site
    }

    /// Get the root path of the site
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file into the site
    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).unwrap();
    }

    /// Delete a file from the site
    pub fn remove(&self, name: &str) {
        fs::remove_file(self.dir.path().join(name)).unwrap();
    }

    /// Read a file from the site
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    /// Check context with no resume generator
    pub fn context<'a>(&'a self, config: &'a CheckerConfig) -> CheckContext<'a> {
        CheckContext {
            root: self.dir.path(),
            config,
            generator: None,
        }
    }
}
