//! Tests for output formatting

use portfolio_kit::core::models::{CheckId, CheckOutcome, CheckReport, FailureReason, ItemLine};
use portfolio_kit::core::services::summarize;
use portfolio_kit::output::{DEPLOYMENT_INSTRUCTIONS, OutputMode, ReadinessReport};

fn sample_report() -> ReadinessReport {
    let checks = vec![
        CheckReport::new(
            CheckId::RequiredFiles,
            vec![ItemLine::ok("index.html").with_detail("120 bytes")],
            CheckOutcome::Passed,
        ),
        CheckReport::new(
            CheckId::ResumeGeneration,
            Vec::new(),
            CheckOutcome::Skipped {
                reason: "Resume generator not found. Skipping PDF generation.".to_string(),
            },
        ),
        CheckReport::new(
            CheckId::PlaceholderImages,
            vec![ItemLine::failed("via.placeholder.com").with_detail("2 reference(s)")],
            CheckOutcome::Failed {
                reason: FailureReason::PlaceholderImages { count: 2 },
            },
        ),
    ];
    let summary = summarize(&checks);
    ReadinessReport {
        site_dir: "site".to_string(),
        checks,
        summary,
        prepared_at: "June 01, 2025 at 09:30 AM".to_string(),
    }
}

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_report_json_shape() {
    let value = serde_json::to_value(sample_report()).unwrap();

    assert_eq!(value["site_dir"], "site");
    assert_eq!(value["summary"]["passed"], 2);
    assert_eq!(value["summary"]["total"], 3);
    assert_eq!(value["summary"]["tier"], "needs_work");

    let checks = value["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 3);
    assert_eq!(checks[0]["id"], "required_files");
    assert_eq!(checks[0]["status"], "passed");
    assert_eq!(checks[0]["items"][0]["detail"], "120 bytes");
    assert_eq!(checks[1]["status"], "skipped");
    assert_eq!(checks[2]["status"], "failed");
    assert_eq!(checks[2]["reason"]["kind"], "placeholder_images");
    assert_eq!(checks[2]["reason"]["count"], 2);
}

#[test]
fn test_render_both_modes() {
    // Rendering writes to stdout; it must not panic in either mode
    let report = sample_report();
    report.render(OutputMode::Human).unwrap();
    report.render(OutputMode::Json).unwrap();
}

#[test]
fn test_json_includes_deployment_instructions() {
    let json = sample_report().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Report fields stay at the top level
    assert_eq!(value["summary"]["total"], 3);
    assert_eq!(value["checks"].as_array().unwrap().len(), 3);

    let guides = value["deployment_instructions"].as_array().unwrap();
    let platforms: Vec<_> = guides.iter().map(|g| g["platform"].as_str().unwrap()).collect();
    assert_eq!(platforms, vec!["GitHub Pages", "Netlify", "Vercel", "Traditional Hosting"]);
    assert_eq!(guides[1]["steps"][0], "Drag and drop the project folder to netlify.com/drop");
    assert_eq!(guides.len(), DEPLOYMENT_INSTRUCTIONS.len());
}
