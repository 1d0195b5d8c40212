//! Resume build pipeline: probe, compose, lay out, render

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::paths;
use crate::resume::compose::compose;
use crate::resume::content::RESUME;
use crate::resume::layout::{PageGeometry, lay_out};
use crate::resume::render::{DocumentRenderer, RenderError};

/// Title stored in the PDF metadata
pub const DOCUMENT_TITLE: &str = "Resume - Anurag Mishra";

/// What the generated resume covers, printed after a successful build
pub const INCLUDED_SECTIONS: [&str; 7] = [
    "Professional summary and contact information",
    "Educational background from VIT",
    "Comprehensive technical skills",
    "Detailed project descriptions with technologies",
    "Work experience and internships",
    "Achievements and certifications",
    "Additional information for recruiters",
];

/// Where and when to build
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Directory receiving `resume.pdf`
    pub out_dir: PathBuf,
    /// Date printed in the footer
    pub generated_on: NaiveDate,
}

impl BuildRequest {
    /// Path of the generated file
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        paths::resume_pdf(&self.out_dir)
    }
}

/// Result of a build
#[derive(Debug)]
pub enum BuildState {
    /// No renderer was available; nothing was touched
    NotBuilt,
    /// The file was written
    Built {
        /// Output file
        path: PathBuf,
        /// Size on disk
        bytes: u64,
        /// Page count
        pages: usize,
    },
    /// The renderer failed; a partial file may remain
    Failed {
        /// Output file
        path: PathBuf,
        /// What went wrong
        error: RenderError,
    },
}

/// Build the resume with `renderer`
///
/// With no renderer this returns [`BuildState::NotBuilt`] before doing any
/// work, so no output file is created or modified.
#[must_use]
pub fn build(renderer: Option<&dyn DocumentRenderer>, request: &BuildRequest) -> BuildState {
    let Some(renderer) = renderer else {
        return BuildState::NotBuilt;
    };

    let blocks = compose(&RESUME, request.generated_on);
    let document = lay_out(DOCUMENT_TITLE, &blocks, PageGeometry::LETTER);
    let path = request.output_path();
    log::debug!(
        "Rendering {} block(s) onto {} page(s) with {}",
        blocks.len(),
        document.pages.len(),
        renderer.name()
    );

    match renderer.render(&document, &path) {
        Ok(()) => {
            let bytes = fs::metadata(&path).map_or(0, |m| m.len());
            BuildState::Built {
                path,
                bytes,
                pages: document.pages.len(),
            }
        },
        Err(error) => {
            log::warn!("Rendering {} failed: {error}", path.display());
            BuildState::Failed { path, error }
        },
    }
}
