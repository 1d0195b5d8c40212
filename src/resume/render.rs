//! Rendering backends
//!
//! The layout engine produces positioned text; a [`DocumentRenderer`] turns
//! it into a file. The PDF backend is compiled in with the `pdf` feature.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resume::layout::LaidOutDocument;

/// Errors raised while writing the document
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output file could not be created
    #[error("failed to create {}: {source}", path.display())]
    Io {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The backend rejected the document
    #[error("PDF backend error: {0}")]
    Backend(String),
}

/// Writes a laid-out document to disk
pub trait DocumentRenderer {
    /// Backend name, for logs
    fn name(&self) -> &'static str;

    /// Write `document` to `path`
    fn render(&self, document: &LaidOutDocument, path: &Path) -> Result<(), RenderError>;
}

/// The renderer compiled into this build, if any
#[cfg(feature = "pdf")]
#[must_use]
pub fn available_renderer() -> Option<Box<dyn DocumentRenderer>> {
    Some(Box::new(PdfRenderer))
}

/// The renderer compiled into this build, if any
#[cfg(not(feature = "pdf"))]
#[must_use]
pub fn available_renderer() -> Option<Box<dyn DocumentRenderer>> {
    None
}

#[cfg(feature = "pdf")]
pub use pdf::PdfRenderer;

#[cfg(feature = "pdf")]
mod pdf {
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::Path;

    use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Pt, Rgb};

    use super::{DocumentRenderer, RenderError};
    use crate::resume::layout::{self, LaidOutDocument};
    use crate::resume::metrics::Font;

    const LAYER: &str = "Layer 1";

    /// PDF backend over `printpdf` using the built-in Helvetica faces
    #[derive(Debug, Clone, Copy, Default)]
    pub struct PdfRenderer;

    struct Fonts {
        regular: IndirectFontRef,
        bold: IndirectFontRef,
        oblique: IndirectFontRef,
    }

    impl Fonts {
        const fn get(&self, font: Font) -> &IndirectFontRef {
            match font {
                Font::Regular => &self.regular,
                Font::Bold => &self.bold,
                Font::Oblique => &self.oblique,
            }
        }
    }

    fn backend(err: impl std::fmt::Display) -> RenderError {
        RenderError::Backend(err.to_string())
    }

    fn fill(color: layout::Rgb) -> Color {
        let channel = |c: u8| f32::from(c) / 255.0;
        Color::Rgb(Rgb::new(channel(color.r), channel(color.g), channel(color.b), None))
    }

    impl DocumentRenderer for PdfRenderer {
        fn name(&self) -> &'static str {
            "printpdf"
        }

        fn render(&self, document: &LaidOutDocument, path: &Path) -> Result<(), RenderError> {
            let width = Mm::from(Pt(document.geometry.width));
            let height = Mm::from(Pt(document.geometry.height));
            let (pdf, first_page, first_layer) = PdfDocument::new(document.title.as_str(), width, height, LAYER);

            let fonts = Fonts {
                regular: pdf.add_builtin_font(BuiltinFont::Helvetica).map_err(backend)?,
                bold: pdf.add_builtin_font(BuiltinFont::HelveticaBold).map_err(backend)?,
                oblique: pdf.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(backend)?,
            };

            for (index, page) in document.pages.iter().enumerate() {
                let (page_index, layer_index) = if index == 0 {
                    (first_page, first_layer)
                } else {
                    pdf.add_page(width, height, LAYER)
                };
                let layer = pdf.get_page(page_index).get_layer(layer_index);

                for run in &page.runs {
                    layer.set_fill_color(fill(run.color));
                    layer.use_text(
                        run.text.as_str(),
                        run.size,
                        Mm::from(Pt(run.x)),
                        Mm::from(Pt(run.y)),
                        fonts.get(run.font),
                    );
                }
            }

            let file = File::create(path).map_err(|source| RenderError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            pdf.save(&mut BufWriter::new(file)).map_err(backend)?;
            log::debug!("Wrote {} page(s) to {}", document.pages.len(), path.display());
            Ok(())
        }
    }
}
