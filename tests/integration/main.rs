//! Integration tests for the portfolio-deploy and portfolio-resume CLIs
//!
//! These tests run the real binaries against throwaway site directories.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a portfolio-deploy command
fn deploy() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("portfolio-deploy"))
}

/// Helper function to create a portfolio-resume command
fn resume() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("portfolio-resume"))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Portfolio</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <img src="images/profile.jpg" alt="Profile">
    <script src="script.js"></script>
</body>
</html>
"#;

/// Helper to write a site that passes every check
fn write_ready_site(path: &Path) {
    fs::write(path.join("index.html"), INDEX_HTML).unwrap();
    fs::write(path.join("styles.css"), "body { margin: 0; }\n").unwrap();
    fs::write(path.join("script.js"), "console.log('ready');\n").unwrap();
    fs::write(path.join("README.md"), "# Portfolio\n").unwrap();
}

// =============================================================================
// portfolio-deploy
// =============================================================================

#[test]
fn test_help() {
    deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_ready_site_passes_all_checks() {
    let temp = TempDir::new().unwrap();
    write_ready_site(temp.path());

    deploy()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PORTFOLIO DEPLOYMENT PREPARATION"))
        .stdout(predicate::str::contains("[1/6] Checking required files..."))
        .stdout(predicate::str::contains("6/6 checks passed"))
        .stdout(predicate::str::contains("Portfolio is ready for deployment!"))
        .stdout(predicate::str::contains("DEPLOYMENT INSTRUCTIONS"))
        .stdout(predicate::str::contains("Portfolio prepared on"));

    assert!(temp.path().join("deployment-info.json").exists());
    if cfg!(feature = "pdf") {
        assert!(temp.path().join("resume.pdf").exists());
    }
}

#[test]
fn test_empty_site_needs_work_but_exits_zero() {
    let temp = TempDir::new().unwrap();

    deploy()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing files:"))
        .stdout(predicate::str::contains("Portfolio needs more work before deployment"));

    // The status artifact is written no matter what else failed
    let raw = fs::read_to_string(temp.path().join("deployment-info.json")).unwrap();
    let info: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(info["files"]["html"], false);
    assert_eq!(info["status"], "ready");
}

#[test]
fn test_strict_fails_unless_ready() {
    let temp = TempDir::new().unwrap();

    deploy()
        .current_dir(temp.path())
        .arg("--strict")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("readiness checks failed"));
}

#[test]
fn test_strict_passes_on_ready_site() {
    let temp = TempDir::new().unwrap();
    write_ready_site(temp.path());

    deploy().current_dir(temp.path()).arg("--strict").assert().success();
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    write_ready_site(temp.path());
    fs::remove_file(temp.path().join("README.md")).unwrap();

    let output = deploy()
        .current_dir(temp.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let checks = value["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 6);
    assert_eq!(checks[0]["id"], "required_files");
    assert_eq!(checks[0]["status"], "failed");
    assert_eq!(checks[0]["reason"]["files"][0], "README.md");
    assert_eq!(value["summary"]["passed"], 5);
    assert_eq!(value["summary"]["tier"], "mostly_ready");
    assert_eq!(value["deployment_instructions"].as_array().unwrap().len(), 4);
}

#[test]
fn test_config_generator_failure_is_mostly_ready() {
    let temp = TempDir::new().unwrap();
    write_ready_site(temp.path());
    let config = temp.path().join("portfolio.toml");
    fs::write(&config, "resume_generator = \"/nonexistent/build-resume\"\n").unwrap();

    deploy()
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("5/6 checks passed"))
        .stdout(predicate::str::contains("Portfolio is mostly ready"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("portfolio.toml");
    fs::write(&config, "placeholders = 7\n").unwrap();

    deploy()
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_site_dir_flag() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("site");
    fs::create_dir(&site).unwrap();
    write_ready_site(&site);

    deploy()
        .current_dir(temp.path())
        .args(["-C", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6/6 checks passed"));

    assert!(site.join("deployment-info.json").exists());
    assert!(!temp.path().join("deployment-info.json").exists());
}

// =============================================================================
// portfolio-resume
// =============================================================================

#[cfg(feature = "pdf")]
#[test]
fn test_resume_writes_pdf() {
    let temp = TempDir::new().unwrap();

    resume()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting resume generation..."))
        .stdout(predicate::str::contains("Resume successfully generated"))
        .stdout(predicate::str::contains("File size:"));

    let bytes = fs::read(temp.path().join("resume.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[cfg(not(feature = "pdf"))]
#[test]
fn test_resume_without_backend_leaves_existing_file() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("resume.pdf");
    fs::write(&existing, "old").unwrap();

    resume()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF backend not available"))
        .stdout(predicate::str::contains("Resume successfully generated").not());

    assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[cfg(not(feature = "pdf"))]
#[test]
fn test_resume_without_backend_creates_nothing() {
    let temp = TempDir::new().unwrap();

    resume().current_dir(temp.path()).assert().success();

    assert!(!temp.path().join("resume.pdf").exists());
}

#[test]
fn test_resume_help() {
    resume()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resume"));
}
