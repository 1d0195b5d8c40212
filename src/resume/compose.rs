//! Turns resume content into an ordered list of layout blocks

use chrono::NaiveDate;

use crate::resume::content::{Entry, Highlight, Resume, SECTIONS};
use crate::resume::layout::{
    BODY, BULLET, Block, COMPANY, CONTACT, DATE, FOOTER, JOB_TITLE, NAME, SECTION, Span,
};
use crate::resume::metrics::Font;

/// One inch in points
const INCH: f32 = 72.0;

const BULLET_MARKER: &str = "-";

fn bullet(text: &str) -> Block {
    Block::Paragraph {
        spans: vec![Span::new(BULLET_MARKER, BULLET.font), Span::new(text, BULLET.font)],
        style: BULLET,
    }
}

fn highlight(item: &Highlight) -> Block {
    Block::Paragraph {
        spans: vec![
            Span::new(BULLET_MARKER, BULLET.font),
            Span::new(item.lead, Font::Bold),
            Span::new(item.text, BULLET.font),
        ],
        style: BULLET,
    }
}

fn push_entry(blocks: &mut Vec<Block>, entry: &Entry) {
    blocks.push(Block::paragraph(entry.title, JOB_TITLE));
    blocks.push(Block::paragraph(entry.organization, COMPANY));
    blocks.push(Block::paragraph(entry.period, DATE));
    blocks.extend(entry.bullets.iter().map(|b| bullet(b)));
}

fn push_entries(blocks: &mut Vec<Block>, list: &[Entry]) {
    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            blocks.push(Block::Spacer(8.0));
        }
        push_entry(blocks, item);
    }
}

/// Footer line stamped with the build date
#[must_use]
pub fn footer_text(generated_on: NaiveDate) -> String {
    format!("Resume generated on {}", generated_on.format("%B %d, %Y"))
}

/// Build the block sequence for a resume
#[must_use]
pub fn compose(resume: &Resume, generated_on: NaiveDate) -> Vec<Block> {
    let [summary, education, skills, projects, experience, achievements, additional] = SECTIONS;
    let mut blocks = Vec::new();

    blocks.push(Block::paragraph(resume.name, NAME));
    blocks.push(Block::Paragraph {
        spans: vec![Span::new(resume.headline, Font::Bold)],
        style: CONTACT,
    });
    blocks.extend(resume.contact.iter().map(|line| Block::paragraph(*line, CONTACT)));
    blocks.push(Block::Spacer(20.0));

    blocks.push(Block::paragraph(summary, SECTION));
    blocks.push(Block::paragraph(resume.summary, BODY));
    blocks.push(Block::Spacer(12.0));

    blocks.push(Block::paragraph(education, SECTION));
    push_entries(&mut blocks, resume.education);
    blocks.push(Block::Spacer(12.0));

    blocks.push(Block::paragraph(skills, SECTION));
    blocks.push(Block::Table {
        rows: resume
            .skills
            .iter()
            .map(|(label, value)| ((*label).to_string(), (*value).to_string()))
            .collect(),
        label_width: 2.0 * INCH,
        value_width: 4.5 * INCH,
    });
    blocks.push(Block::Spacer(12.0));

    blocks.push(Block::paragraph(projects, SECTION));
    push_entries(&mut blocks, resume.projects);
    blocks.push(Block::Spacer(12.0));

    blocks.push(Block::paragraph(experience, SECTION));
    push_entries(&mut blocks, resume.experience);
    blocks.push(Block::Spacer(12.0));

    blocks.push(Block::paragraph(achievements, SECTION));
    blocks.extend(resume.achievements.iter().map(highlight));
    blocks.push(Block::Spacer(12.0));

    blocks.push(Block::paragraph(additional, SECTION));
    blocks.extend(resume.additional.iter().map(highlight));

    blocks.push(Block::Spacer(20.0));
    blocks.push(Block::paragraph(footer_text(generated_on), FOOTER));

    blocks
}
