//! Tests for the readiness checks
//!
//! Every check runs regardless of what the others report; a broken
//! precondition must fail its own check and nothing else.

use portfolio_kit::checks::run_all;
use portfolio_kit::config::CheckerConfig;
use portfolio_kit::core::models::{CheckId, CheckReport, DeploymentInfo, FailureReason, ReadinessTier};
use portfolio_kit::core::services::summarize;

use crate::common::{CLEAN_HTML, TestSite};

fn failing(reports: &[CheckReport]) -> Vec<CheckId> {
    reports.iter().filter(|r| !r.passed()).map(|r| r.id).collect()
}

// =============================================================================
// Full runs
// =============================================================================

#[test]
fn test_ready_site_passes_everything() {
    let site = TestSite::ready();
    let config = CheckerConfig::default();

    let reports = run_all(&site.context(&config));
    let summary = summarize(&reports);

    assert_eq!(summary.passed, 6);
    assert_eq!(summary.total, 6);
    assert_eq!(summary.tier, ReadinessTier::Ready);
    assert_eq!(summary.tier.message(), "Portfolio is ready for deployment!");
}

#[test]
fn test_empty_site_still_runs_every_check() {
    let site = TestSite::empty();
    let config = CheckerConfig::default();

    let reports = run_all(&site.context(&config));
    assert_eq!(reports.len(), 6);
    assert_eq!(
        failing(&reports),
        vec![
            CheckId::RequiredFiles,
            CheckId::HtmlStructure,
            CheckId::PlaceholderLinks,
            CheckId::PlaceholderImages,
        ]
    );
    assert_eq!(summarize(&reports).tier, ReadinessTier::NeedsWork);
    assert!(site.path().join("deployment-info.json").exists());
}

// =============================================================================
// Isolation: one broken precondition, one failed check
// =============================================================================

#[test]
fn test_missing_readme_fails_only_required_files() {
    let site = TestSite::ready();
    site.remove("README.md");
    let config = CheckerConfig::default();

    let reports = run_all(&site.context(&config));
    assert_eq!(failing(&reports), vec![CheckId::RequiredFiles]);
    assert_eq!(
        reports[0].failure(),
        Some(&FailureReason::MissingFiles {
            files: vec!["README.md".to_string()]
        })
    );
    assert_eq!(summarize(&reports).tier, ReadinessTier::MostlyReady);
}

#[test]
fn test_missing_title_fails_only_title_subcheck() {
    let site = TestSite::ready();
    site.write("index.html", &CLEAN_HTML.replace("<title>", "<meta name=\"title\">"));
    let config = CheckerConfig::default();

    let reports = run_all(&site.context(&config));
    assert_eq!(failing(&reports), vec![CheckId::HtmlStructure]);

    let html = &reports[2];
    let failed_items: Vec<_> = html.items.iter().filter(|i| !i.ok).map(|i| i.label.as_str()).collect();
    assert_eq!(failed_items, vec!["Title tag"]);
    assert_eq!(html.items.iter().filter(|i| i.ok).count(), 6);
}

#[test]
fn test_placeholder_email_fails_only_links() {
    let site = TestSite::ready();
    site.write(
        "index.html",
        &CLEAN_HTML.replace("officiallyanurag1@gmail.com", "anurag.mishra@email.com"),
    );
    let config = CheckerConfig::default();

    let reports = run_all(&site.context(&config));
    assert_eq!(failing(&reports), vec![CheckId::PlaceholderLinks]);
    assert_eq!(
        reports[3].failure(),
        Some(&FailureReason::PlaceholdersFound {
            values: vec!["anurag.mishra@email.com".to_string()]
        })
    );
}

#[test]
fn test_placeholder_match_is_case_sensitive() {
    let site = TestSite::ready();
    site.write(
        "index.html",
        &CLEAN_HTML.replace("officiallyanurag1@gmail.com", "Anurag.Mishra@Email.com"),
    );
    let config = CheckerConfig::default();

    let reports = run_all(&site.context(&config));
    assert!(failing(&reports).is_empty());
}

#[test]
fn test_placeholder_image_fails_only_images() {
    let site = TestSite::ready();
    site.write(
        "index.html",
        &CLEAN_HTML.replace("images/profile.jpg", "https://via.placeholder.com/200"),
    );
    let config = CheckerConfig::default();

    let reports = run_all(&site.context(&config));
    assert_eq!(failing(&reports), vec![CheckId::PlaceholderImages]);
    assert_eq!(reports[4].failure(), Some(&FailureReason::PlaceholderImages { count: 1 }));
}

#[test]
fn test_broken_generator_fails_only_resume() {
    let site = TestSite::ready();
    let config = CheckerConfig::default();
    let program = site.path().join("missing-generator");
    let ctx = portfolio_kit::checks::CheckContext {
        generator: Some(&program),
        ..site.context(&config)
    };

    let reports = run_all(&ctx);
    assert_eq!(failing(&reports), vec![CheckId::ResumeGeneration]);
    assert!(matches!(reports[1].failure(), Some(FailureReason::GeneratorSpawn { .. })));
}

// =============================================================================
// Status artifact
// =============================================================================

#[test]
fn test_deployment_info_round_trips_with_five_file_keys() {
    let site = TestSite::ready();
    let config = CheckerConfig::default();
    let _ = run_all(&site.context(&config));

    let raw = site.read("deployment-info.json");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let files = value["files"].as_object().unwrap();
    let mut keys: Vec<_> = files.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["css", "html", "js", "readme", "resume"]);
    assert!(files.values().all(serde_json::Value::is_boolean));

    let info: DeploymentInfo = serde_json::from_str(&raw).unwrap();
    assert!(info.files.html && info.files.css && info.files.js && info.files.readme);
    assert!(!info.files.resume);
    assert_eq!(info.status, "ready");
    assert_eq!(info.version, "1.0.0");
}
