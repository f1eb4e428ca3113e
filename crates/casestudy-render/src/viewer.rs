//! Tabbed report viewer
//!
//! One state per derived tab. The viewer starts on the first tab and moves
//! only when a tab from the current tab set is selected. A selection that is
//! unknown, or stale after the document changed, resolves to the first tab.

use casestudy_schema::{codec, CaseStudyDocument};

use crate::config::RenderConfig;
use crate::sections::{render_header, render_tab};
use crate::tabs::{derive_tabs, TabId};
use crate::view::{ReportView, SectionView, TabView};

/// Report viewer state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportViewer {
    document: Option<CaseStudyDocument>,
    config: RenderConfig,
    selected: TabId,
}

impl ReportViewer {
    /// Viewer on `document`, starting at the first tab
    #[must_use]
    pub fn new(document: Option<CaseStudyDocument>, config: RenderConfig) -> Self {
        let selected = derive_tabs(document.as_ref())
            .first()
            .copied()
            .unwrap_or(TabId::Overview);
        Self {
            document,
            config,
            selected,
        }
    }

    /// Viewer over the stored `caseStudyData` text
    ///
    /// Unreadable text renders as no document.
    #[must_use]
    pub fn from_stored(text: Option<&str>, config: RenderConfig) -> Self {
        Self::new(codec::decode_for_display(text), config)
    }

    #[inline]
    #[must_use]
    pub fn document(&self) -> Option<&CaseStudyDocument> {
        self.document.as_ref()
    }

    /// Swap in a new document, keeping the selection if it still exists
    pub fn set_document(&mut self, document: Option<CaseStudyDocument>) {
        self.document = document;
    }

    /// Current tab set
    #[must_use]
    pub fn tabs(&self) -> Vec<TabId> {
        derive_tabs(self.document.as_ref())
    }

    /// Tab currently shown
    #[must_use]
    pub fn active_tab(&self) -> TabId {
        let tabs = self.tabs();
        if tabs.contains(&self.selected) {
            return self.selected;
        }
        let first = tabs.first().copied().unwrap_or(TabId::Overview);
        tracing::trace!(selected = %self.selected, fallback = %first, "selected tab not available");
        first
    }

    /// Select `tab`; returns the tab now shown
    pub fn select(&mut self, tab: TabId) -> TabId {
        self.selected = tab;
        self.active_tab()
    }

    /// Select a tab by identifier; unknown identifiers show the first tab
    pub fn select_id(&mut self, id: &str) -> TabId {
        match TabId::from_id(id) {
            Some(tab) => self.select(tab),
            None => {
                tracing::trace!(id, "unknown tab id");
                let first = self.tabs().first().copied().unwrap_or(TabId::Overview);
                self.select(first)
            }
        }
    }

    /// Body of the active tab
    #[must_use]
    pub fn render_active(&self) -> SectionView {
        self.render(self.active_tab())
    }

    /// Body of `tab`, regardless of selection
    #[must_use]
    pub fn render(&self, tab: TabId) -> SectionView {
        match &self.document {
            Some(document) => render_tab(document, tab, &self.config),
            None => render_tab(&CaseStudyDocument::default(), tab, &self.config),
        }
    }

    /// Banner, tab strip and active body
    #[must_use]
    pub fn view(&self) -> ReportView {
        let active = self.active_tab();
        let empty = CaseStudyDocument::default();
        let document = self.document.as_ref().unwrap_or(&empty);
        ReportView {
            header: render_header(document, &self.config),
            tabs: self
                .tabs()
                .into_iter()
                .map(|id| TabView {
                    id,
                    active: id == active,
                })
                .collect(),
            body: render_tab(document, active, &self.config),
        }
    }
}
