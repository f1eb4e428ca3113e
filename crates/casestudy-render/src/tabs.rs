//! Tab derivation
//!
//! Four fixed tabs, then "Next Steps" when the document has a `deployment`
//! key and "Gallery" when it has a `visuals` key. Presence, not emptiness,
//! decides.

use std::fmt;

use casestudy_schema::{CaseStudyDocument, OptionalSection};

/// Report tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    Architecture,
    Features,
    Roadmap,
    NextSteps,
    Gallery,
}

impl TabId {
    /// Tabs every report has, in display order
    pub const FIXED: [Self; 4] = [
        Self::Overview,
        Self::Architecture,
        Self::Features,
        Self::Roadmap,
    ];

    /// Stable identifier
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Architecture => "architecture",
            Self::Features => "features",
            Self::Roadmap => "roadmap",
            Self::NextSteps => "deployment",
            Self::Gallery => "visuals",
        }
    }

    /// Tab caption
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Architecture => "Architecture",
            Self::Features => "Features",
            Self::Roadmap => "Roadmap",
            Self::NextSteps => "Next Steps",
            Self::Gallery => "Gallery",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        [
            Self::Overview,
            Self::Architecture,
            Self::Features,
            Self::Roadmap,
            Self::NextSteps,
            Self::Gallery,
        ]
        .into_iter()
        .find(|t| t.id() == id)
    }

    /// Optional section gating this tab, `None` for fixed tabs
    #[must_use]
    pub fn gate(self) -> Option<OptionalSection> {
        match self {
            Self::NextSteps => Some(OptionalSection::Deployment),
            Self::Gallery => Some(OptionalSection::Visuals),
            _ => None,
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Tabs shown for `document`, in display order
#[must_use]
pub fn derive_tabs(document: Option<&CaseStudyDocument>) -> Vec<TabId> {
    let mut tabs = TabId::FIXED.to_vec();
    if let Some(document) = document {
        for tab in [TabId::NextSteps, TabId::Gallery] {
            if tab.gate().is_some_and(|section| document.has_section(section)) {
                tabs.push(tab);
            }
        }
    }
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;
    use casestudy_schema::{ensure, Deployment, Visuals};

    #[test]
    fn fixed_tabs_without_optional_sections() {
        let ids: Vec<_> = derive_tabs(Some(&ensure(None)))
            .into_iter()
            .map(TabId::id)
            .collect();
        assert_eq!(ids, vec!["overview", "architecture", "features", "roadmap"]);
    }

    #[test]
    fn empty_optional_sections_still_add_tabs() {
        let mut doc = ensure(None);
        doc.visuals = Some(Visuals::default());
        doc.deployment = Some(Deployment::default());
        assert_eq!(
            derive_tabs(Some(&doc)),
            vec![
                TabId::Overview,
                TabId::Architecture,
                TabId::Features,
                TabId::Roadmap,
                TabId::NextSteps,
                TabId::Gallery
            ]
        );
    }

    #[test]
    fn gallery_without_next_steps() {
        let mut doc = ensure(None);
        doc.visuals = Some(Visuals::default());
        assert_eq!(derive_tabs(Some(&doc)).last(), Some(&TabId::Gallery));
        assert!(!derive_tabs(Some(&doc)).contains(&TabId::NextSteps));
    }

    #[test]
    fn no_document_gets_fixed_tabs() {
        assert_eq!(derive_tabs(None), TabId::FIXED.to_vec());
    }

    #[test]
    fn ids_round_trip() {
        for tab in derive_tabs(None) {
            assert_eq!(TabId::from_id(tab.id()), Some(tab));
        }
        assert_eq!(TabId::from_id("gallery"), None);
    }
}
