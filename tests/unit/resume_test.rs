//! Tests for the resume build pipeline through the public API

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use portfolio_kit::resume::compose::{compose, footer_text};
use portfolio_kit::resume::content::{RESUME, SECTIONS};
use portfolio_kit::resume::layout::{LaidOutDocument, PageGeometry, lay_out, wrap};
use portfolio_kit::resume::metrics::Font;
use portfolio_kit::resume::render::{DocumentRenderer, RenderError};
use portfolio_kit::resume::{BuildRequest, BuildState, build};
use tempfile::TempDir;

/// Writes the document's text so tests can inspect it
struct TextRenderer;

impl DocumentRenderer for TextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, document: &LaidOutDocument, path: &Path) -> Result<(), RenderError> {
        fs::write(path, document.plain_text()).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn test_build_writes_every_section() {
    let dir = TempDir::new().unwrap();
    let request = BuildRequest {
        out_dir: dir.path().to_path_buf(),
        generated_on: june_first(),
    };

    let state = build(Some(&TextRenderer), &request);
    assert!(matches!(state, BuildState::Built { .. }));

    let text = fs::read_to_string(dir.path().join("resume.pdf")).unwrap();
    for section in SECTIONS {
        assert!(text.contains(section), "missing section {section}");
    }
    assert!(text.contains("Customer Churn Prediction Model"));
    assert!(text.contains("Resume generated on June 01, 2025"));
}

#[test]
fn test_build_without_renderer_is_side_effect_free() {
    let dir = TempDir::new().unwrap();
    let request = BuildRequest {
        out_dir: dir.path().to_path_buf(),
        generated_on: june_first(),
    };

    assert!(matches!(build(None, &request), BuildState::NotBuilt));
    assert!(!dir.path().join("resume.pdf").exists());
}

#[test]
fn test_build_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let request = BuildRequest {
        out_dir: dir.path().join("does-not-exist"),
        generated_on: june_first(),
    };

    match build(Some(&TextRenderer), &request) {
        BuildState::Failed { path, error } => {
            assert_eq!(path, dir.path().join("does-not-exist").join("resume.pdf"));
            assert!(matches!(error, RenderError::Io { .. }));
        },
        other => panic!("unexpected state: {other:?}"),
    }
}

#[test]
fn test_footer_changes_with_date() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
    assert_eq!(footer_text(date), "Resume generated on December 25, 2024");
}

#[test]
fn test_layout_is_deterministic() {
    let blocks = compose(&RESUME, june_first());
    let first = lay_out("Resume", &blocks, PageGeometry::LETTER);
    let second = lay_out("Resume", &blocks, PageGeometry::LETTER);
    assert_eq!(first, second);
}

#[test]
fn test_wrap_respects_width() {
    let text = RESUME.summary;
    let width = PageGeometry::LETTER.text_width();
    let lines = wrap(text, Font::Regular, 10.0, width);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(Font::Regular.measure(line, 10.0) <= width + 0.01, "line too wide: {line}");
    }
    assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
}

#[cfg(feature = "pdf")]
#[test]
fn test_available_renderer_writes_pdf() {
    let dir = TempDir::new().unwrap();
    let renderer = portfolio_kit::resume::render::available_renderer().unwrap();
    let request = BuildRequest {
        out_dir: dir.path().to_path_buf(),
        generated_on: june_first(),
    };

    assert!(matches!(build(Some(&*renderer), &request), BuildState::Built { .. }));
    let bytes = fs::read(dir.path().join("resume.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
