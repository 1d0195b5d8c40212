//! Layout engine: word-wraps blocks and flows them onto fixed-size pages.
//!
//! Coordinates are PDF points. The cursor moves down from the top margin;
//! emitted runs carry PDF coordinates (origin bottom-left, `y` = baseline).
//!
//! Greedy word wrap, same approach as the font-metric line estimator: a word
//! moves to the next line when it would overflow the available width. A word
//! wider than the line gets a line to itself.

use serde::Serialize;

use crate::resume::metrics::Font;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

/// Body text
pub const BLACK: Rgb = Rgb::hex(0x00_0000);
/// Name and section headers
pub const INDIGO: Rgb = Rgb::hex(0x4f_46e5);
/// Organizations
pub const SLATE: Rgb = Rgb::hex(0x6b_7280);
/// Dates and footer
pub const MIST: Rgb = Rgb::hex(0x9c_a3af);

/// Horizontal alignment of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    /// Flush with the left margin plus indent
    Left,
    /// Centred between the margins
    Center,
}

/// Paragraph style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Default font of the paragraph
    pub font: Font,
    /// Font size in points
    pub size: f32,
    /// Baseline-to-baseline distance
    pub leading: f32,
    /// Space above the paragraph, dropped at the top of a page
    pub space_before: f32,
    /// Space below the paragraph
    pub space_after: f32,
    /// Left indent
    pub indent: f32,
    /// Alignment
    pub align: Align,
    /// Text colour
    pub color: Rgb,
}

impl TextStyle {
    const fn body(font: Font, size: f32) -> Self {
        Self {
            font,
            size,
            leading: size * 1.2,
            space_before: 0.0,
            space_after: 0.0,
            indent: 0.0,
            align: Align::Left,
            color: BLACK,
        }
    }
}

/// Candidate name
pub const NAME: TextStyle = TextStyle {
    space_after: 6.0,
    align: Align::Center,
    color: INDIGO,
    ..TextStyle::body(Font::Bold, 24.0)
};

/// Contact lines under the name
pub const CONTACT: TextStyle = TextStyle {
    align: Align::Center,
    ..TextStyle::body(Font::Regular, 10.0)
};

/// Section headers
pub const SECTION: TextStyle = TextStyle {
    space_before: 20.0,
    space_after: 12.0,
    color: INDIGO,
    ..TextStyle::body(Font::Bold, 14.0)
};

/// Plain paragraphs
pub const BODY: TextStyle = TextStyle::body(Font::Regular, 10.0);

/// Role or project names
pub const JOB_TITLE: TextStyle = TextStyle {
    space_after: 6.0,
    ..TextStyle::body(Font::Bold, 12.0)
};

/// Company or technology lines
pub const COMPANY: TextStyle = TextStyle {
    space_after: 4.0,
    color: SLATE,
    ..TextStyle::body(Font::Bold, 11.0)
};

/// Date lines
pub const DATE: TextStyle = TextStyle {
    space_after: 8.0,
    color: MIST,
    ..TextStyle::body(Font::Regular, 10.0)
};

/// Bullet points
pub const BULLET: TextStyle = TextStyle {
    space_after: 4.0,
    indent: 20.0,
    ..TextStyle::body(Font::Regular, 10.0)
};

/// Generation footer
pub const FOOTER: TextStyle = TextStyle {
    align: Align::Center,
    color: MIST,
    ..TextStyle::body(Font::Oblique, 8.0)
};

/// Skills table cell metrics
const TABLE_FONT_SIZE: f32 = 10.0;
const TABLE_PADDING_V: f32 = 3.0;
const TABLE_PADDING_RIGHT: f32 = 6.0;

/// A run of text in one font inside a paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Text, whitespace is collapsed during layout
    pub text: String,
    /// Font for this span
    pub font: Font,
}

impl Span {
    /// Create a span
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// A unit of content handed to the layout engine
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Wrapped text
    Paragraph {
        /// Text runs, in order
        spans: Vec<Span>,
        /// Style
        style: TextStyle,
    },
    /// Two-column label/value table
    Table {
        /// `(label, value)` rows
        rows: Vec<(String, String)>,
        /// Width of the label column
        label_width: f32,
        /// Width of the value column
        value_width: f32,
    },
    /// Vertical gap
    Spacer(f32),
}

impl Block {
    /// A paragraph in the style's own font
    pub fn paragraph(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Paragraph {
            spans: vec![Span::new(text, style.font)],
            style,
        }
    }
}

/// Page size and margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Margin on all four sides
    pub margin: f32,
}

impl PageGeometry {
    /// US letter with 0.75 inch margins
    pub const LETTER: Self = Self {
        width: 612.0,
        height: 792.0,
        margin: 54.0,
    };

    /// Width available for text
    #[must_use]
    pub fn text_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    fn bottom(&self) -> f32 {
        self.height - self.margin
    }
}

/// Positioned text ready for a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// Text to draw
    pub text: String,
    /// Left edge, from the page's left edge
    pub x: f32,
    /// Baseline, from the page's bottom edge
    pub y: f32,
    /// Font
    pub font: Font,
    /// Size in points
    pub size: f32,
    /// Fill colour
    pub color: Rgb,
}

/// One page of positioned text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    /// Text runs in drawing order
    pub runs: Vec<TextRun>,
}

/// Output of the layout engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaidOutDocument {
    /// Document title stored in the file metadata
    pub title: String,
    /// Page size shared by all pages
    pub geometry: PageGeometry,
    /// Pages in order, never empty
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    /// Every run's text, one per line, in drawing order
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .flat_map(|p| p.runs.iter().map(|r| r.text.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Word {
    text: String,
    font: Font,
}

/// Greedy word wrap of mixed-font spans
///
/// # Returns
///
/// The words of each line; empty input gives no lines
fn wrap_words(spans: &[Span], size: f32, width: f32) -> Vec<Vec<Word>> {
    let mut lines = Vec::new();
    let mut line: Vec<Word> = Vec::new();
    let mut line_width = 0.0_f32;

    let words = spans.iter().flat_map(|span| {
        span.text.split_whitespace().map(move |w| Word {
            text: w.to_string(),
            font: span.font,
        })
    });

    for word in words {
        let word_width = word.font.measure(&word.text, size);
        let space = if line.is_empty() { 0.0 } else { word.font.measure(" ", size) };

        if !line.is_empty() && line_width + space + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = word_width;
        } else {
            line_width += space + word_width;
        }
        line.push(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Wrap plain text in one font
///
/// # Returns
///
/// The text of each line, words separated by single spaces
#[must_use]
pub fn wrap(text: &str, font: Font, size: f32, width: f32) -> Vec<String> {
    wrap_words(&[Span::new(text, font)], size, width)
        .into_iter()
        .map(|words| words.into_iter().map(|w| w.text).collect::<Vec<_>>().join(" "))
        .collect()
}

/// Consecutive same-font words joined into drawable pieces
fn group_runs(words: Vec<Word>) -> Vec<Word> {
    let mut groups: Vec<Word> = Vec::new();
    for word in words {
        match groups.last_mut() {
            Some(last) if last.font == word.font => {
                last.text.push(' ');
                last.text.push_str(&word.text);
            },
            _ => groups.push(word),
        }
    }
    groups
}

fn line_width(groups: &[Word], size: f32) -> f32 {
    groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let space = if i == 0 { 0.0 } else { g.font.measure(" ", size) };
            space + g.font.measure(&g.text, size)
        })
        .sum()
}

struct Cursor {
    geometry: PageGeometry,
    pages: Vec<Page>,
    /// Distance of the next line's top from the page's top edge
    y: f32,
}

impl Cursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Page::default()],
            y: geometry.margin,
        }
    }

    fn at_top(&self) -> bool {
        (self.y - self.geometry.margin).abs() < f32::EPSILON
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.geometry.margin;
    }

    /// Break the page unless `height` still fits
    fn reserve(&mut self, height: f32) {
        if !self.at_top() && self.y + height > self.geometry.bottom() {
            self.new_page();
        }
    }

    /// Vertical gap; dropped at the top of a page
    fn space(&mut self, amount: f32) {
        if !self.at_top() {
            self.y = (self.y + amount).min(self.geometry.bottom());
        }
    }

    fn baseline(&self, size: f32) -> f32 {
        self.geometry.height - (self.y + size)
    }

    fn push(&mut self, run: TextRun) {
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
    }

    fn paragraph(&mut self, spans: &[Span], style: &TextStyle) {
        self.space(style.space_before);
        let width = self.geometry.text_width() - style.indent;

        for words in wrap_words(spans, style.size, width) {
            self.reserve(style.leading);
            let groups = group_runs(words);
            let start = match style.align {
                Align::Left => self.geometry.margin + style.indent,
                Align::Center => {
                    self.geometry.margin + style.indent + (width - line_width(&groups, style.size)) / 2.0
                },
            };
            let baseline = self.baseline(style.size);

            let mut x = start;
            for (i, group) in groups.into_iter().enumerate() {
                if i > 0 {
                    x += group.font.measure(" ", style.size);
                }
                let advance = group.font.measure(&group.text, style.size);
                self.push(TextRun {
                    text: group.text,
                    x,
                    y: baseline,
                    font: group.font,
                    size: style.size,
                    color: style.color,
                });
                x += advance;
            }
            self.y += style.leading;
        }

        self.space(style.space_after);
    }

    fn table(&mut self, rows: &[(String, String)], label_width: f32, value_width: f32) {
        let leading = TABLE_FONT_SIZE * 1.2;

        for (label, value) in rows {
            let label_lines = wrap(label, Font::Bold, TABLE_FONT_SIZE, label_width - TABLE_PADDING_RIGHT);
            let value_lines = wrap(value, Font::Regular, TABLE_FONT_SIZE, value_width - TABLE_PADDING_RIGHT);
            let line_count = label_lines.len().max(value_lines.len());
            let height = 2.0f32.mul_add(TABLE_PADDING_V, line_count as f32 * leading);
            self.reserve(height);

            let top = self.y + TABLE_PADDING_V;
            let columns = [
                (label_lines, Font::Bold, self.geometry.margin),
                (value_lines, Font::Regular, self.geometry.margin + label_width),
            ];
            for (lines, font, x) in columns {
                for (i, text) in lines.into_iter().enumerate() {
                    let line_top = (i as f32).mul_add(leading, top);
                    let y = self.geometry.height - (line_top + TABLE_FONT_SIZE);
                    self.push(TextRun {
                        text,
                        x,
                        y,
                        font,
                        size: TABLE_FONT_SIZE,
                        color: BLACK,
                    });
                }
            }
            self.y += height;
        }
    }
}

/// Flow blocks onto pages
#[must_use]
pub fn lay_out(title: &str, blocks: &[Block], geometry: PageGeometry) -> LaidOutDocument {
    let mut cursor = Cursor::new(geometry);

    for block in blocks {
        match block {
            Block::Paragraph { spans, style } => cursor.paragraph(spans, style),
            Block::Table {
                rows,
                label_width,
                value_width,
            } => cursor.table(rows, *label_width, *value_width),
            Block::Spacer(amount) => cursor.space(*amount),
        }
    }

    LaidOutDocument {
        title: title.to_string(),
        geometry,
        pages: cursor.pages,
    }
}
