//! Markdown output
//!
//! Text rendering of the view model, used by the CLI.

use std::fmt::{self, Display, Formatter};

use casestudy_schema::{CaseStudyDocument, Icon, VisualKind};

use crate::config::RenderConfig;
use crate::sections::{render_header, render_tab};
use crate::tabs::derive_tabs;
use crate::view::{Block, HeaderView, ReportView, SectionView};

/// Markdown view of a rendered value, written through [`Display`]
#[derive(Debug, Clone, Copy)]
pub struct Markdown<'a, T>(pub &'a T);

impl Display for Markdown<'_, SectionView> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.blocks.iter().try_for_each(|block| write_block(f, block))
    }
}

impl Display for Markdown<'_, HeaderView> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let header = self.0;
        writeln!(f, "# {}{}\n", IconPrefix(header.icon), header.report_title)?;
        if let Some(badge) = &header.badge {
            writeln!(f, "`{}{}`\n", IconPrefix(badge.icon), badge.text)?;
        }
        writeln!(f, "**{}**\n", header.title)?;
        writeln!(f, "{} | {}\n", header.date, header.agency)
    }
}

impl Display for Markdown<'_, ReportView> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        Markdown(&report.header).fmt(f)?;
        for (n, tab) in report.tabs.iter().enumerate() {
            if n > 0 {
                f.write_str(" | ")?;
            }
            if tab.active {
                write!(f, "**{}**", tab.id.label())?;
            } else {
                f.write_str(tab.id.label())?;
            }
        }
        f.write_str("\n\n")?;
        Markdown(&report.body).fmt(f)
    }
}

/// Markdown for one tab body
#[must_use]
pub fn section_markdown(section: &SectionView) -> String {
    Markdown(section).to_string()
}

/// Markdown for the banner
#[must_use]
pub fn header_markdown(header: &HeaderView) -> String {
    Markdown(header).to_string()
}

/// Banner, tab strip and active body
#[must_use]
pub fn report_markdown(report: &ReportView) -> String {
    Markdown(report).to_string()
}

/// Banner followed by every tab of `document`, in tab order
#[must_use]
pub fn document_markdown(document: &CaseStudyDocument, config: &RenderConfig) -> String {
    let mut out = header_markdown(&render_header(document, config));
    for tab in derive_tabs(Some(document)) {
        out.push_str(&section_markdown(&render_tab(document, tab, config)));
    }
    out
}

/// `"{glyph} "`, or nothing without an icon
struct IconPrefix(Option<Icon>);

impl Display for IconPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(icon) => write!(f, "{} ", icon.glyph()),
            None => Ok(()),
        }
    }
}

fn write_block(f: &mut Formatter<'_>, block: &Block) -> fmt::Result {
    match block {
        Block::Heading { level, text, icon } => {
            let hashes = "#".repeat(usize::from(*level));
            writeln!(f, "{hashes} {}{text}\n", IconPrefix(*icon))
        }
        Block::Paragraph(text) => writeln!(f, "{text}\n"),
        Block::Bullets(lines) => {
            for line in lines {
                writeln!(f, "- {line}")?;
            }
            writeln!(f)
        }
        Block::Pairs(rows) => {
            for (label, value) in rows {
                writeln!(f, "- **{label}**: {value}")?;
            }
            writeln!(f)
        }
        Block::Callout { title, text } => writeln!(f, "> **{title}**: {text}\n"),
        Block::Media { kind, url, caption } => match kind {
            VisualKind::Image => writeln!(f, "![{caption}]({url})\n"),
            VisualKind::Video => writeln!(f, "[Video: {caption}]({url})\n"),
        },
    }
}
