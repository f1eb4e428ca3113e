//! Report view model
//!
//! Output of rendering: plain data a front end (or [`crate::markdown`]) can
//! display without touching the document again.

use casestudy_schema::{Icon, VisualKind};

use crate::tabs::TabId;

/// Rendered report: banner, tab strip and the active tab's body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub header: HeaderView,
    pub tabs: Vec<TabView>,
    pub body: SectionView,
}

/// Report banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub report_title: String,
    pub icon: Option<Icon>,
    pub badge: Option<BadgeView>,
    pub title: String,
    pub date: String,
    pub agency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub text: String,
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabView {
    pub id: TabId,
    pub active: bool,
}

/// Body of one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub tab: TabId,
    pub blocks: Vec<Block>,
}

impl SectionView {
    /// Headings at `level`, in order
    pub fn headings(&self, level: u8) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().filter_map(move |b| match b {
            Block::Heading { level: l, text, .. } if *l == level => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Display block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
        icon: Option<Icon>,
    },
    Paragraph(String),
    /// Bulleted lines, already formatted as `"{label}: {text}"` or `"{text}"`
    Bullets(Vec<String>),
    /// Label/value rows
    Pairs(Vec<(String, String)>),
    Callout {
        title: String,
        text: String,
    },
    Media {
        kind: VisualKind,
        url: String,
        caption: String,
    },
}

impl Block {
    pub(crate) fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
            icon: None,
        }
    }
}
