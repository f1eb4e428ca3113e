//! Per-tab rendering
//!
//! Every tab starts with its heading. Lists with no items emit no block;
//! empty paragraphs are skipped. Labels show only when non-empty.

use casestudy_schema::{
    CaseStudyDocument, Deployment, Header, Icon, Meta, Point, Roadmap, RoadmapBucket, Visuals,
};

use crate::config::RenderConfig;
use crate::tabs::TabId;
use crate::view::{BadgeView, Block, HeaderView, SectionView};

/// Render the banner
#[must_use]
pub fn render_header(document: &CaseStudyDocument, config: &RenderConfig) -> HeaderView {
    let header = document.header.as_ref();
    let Meta { title, date, agency } = &document.meta;

    let report_title = header
        .and_then(|h| non_empty(h.report_title.as_deref()))
        .unwrap_or(&config.default_report_title)
        .to_string();

    HeaderView {
        report_title,
        icon: header.and_then(|h| icon_field(h.icon.as_deref())),
        badge: header.and_then(badge),
        title: title.clone(),
        date: date.clone(),
        agency: agency.clone(),
    }
}

/// Render the body of `tab`
///
/// Tabs gated on a missing section render only their heading.
#[must_use]
pub fn render_tab(document: &CaseStudyDocument, tab: TabId, config: &RenderConfig) -> SectionView {
    let mut blocks = Vec::new();
    match tab {
        TabId::Overview => overview(document, &mut blocks),
        TabId::Architecture => architecture(document, &mut blocks),
        TabId::Features => features(document, &mut blocks),
        TabId::Roadmap => roadmap(&document.roadmap, config, &mut blocks),
        TabId::NextSteps => {
            blocks.push(Block::heading(2, tab.label()));
            if let Some(deployment) = &document.deployment {
                next_steps(deployment, &mut blocks);
            }
        }
        TabId::Gallery => gallery(document.visuals.as_ref(), &mut blocks),
    }
    SectionView { tab, blocks }
}

/// `"{label}: {text}"`, or just the text when the label is absent or empty
#[must_use]
pub fn point_line(point: &Point) -> String {
    match non_empty(point.label.as_deref()) {
        Some(label) => format!("{label}: {}", point.text),
        None => point.text.clone(),
    }
}

/// Roadmap buckets the report shows, in order
#[must_use]
pub fn rendered_buckets(config: &RenderConfig) -> Vec<RoadmapBucket> {
    RoadmapBucket::ALL
        .into_iter()
        .filter(|b| config.include_schema_only_buckets || !b.is_schema_only())
        .collect()
}

fn overview(document: &CaseStudyDocument, blocks: &mut Vec<Block>) {
    let heritage = &document.overview.heritage;
    let mission = &document.overview.mission;

    blocks.push(Block::heading(2, TabId::Overview.label()));

    blocks.push(Block::heading(3, or_default(&heritage.title, "Heritage")));
    paragraph(&heritage.description, blocks);
    bullets(heritage.items.iter().map(point_line), blocks);

    blocks.push(Block::heading(3, "Mission"));
    paragraph(&mission.statement, blocks);
    pairs(
        mission
            .stats
            .iter()
            .map(|s| (s.label.clone(), s.sub_label.clone())),
        blocks,
    );
}

fn architecture(document: &CaseStudyDocument, blocks: &mut Vec<Block>) {
    let architecture = &document.architecture;

    blocks.push(Block::heading(2, TabId::Architecture.label()));

    blocks.push(Block::heading(3, "Core Stack"));
    pairs(
        architecture
            .core_stack
            .iter()
            .map(|e| (e.label.clone(), e.value.clone())),
        blocks,
    );

    blocks.push(Block::heading(3, "Key Decisions"));
    for decision in &architecture.decisions {
        blocks.push(Block::heading(4, decision.title.clone()));
        paragraph(&decision.description, blocks);
    }
}

fn features(document: &CaseStudyDocument, blocks: &mut Vec<Block>) {
    blocks.push(Block::heading(2, TabId::Features.label()));
    for feature in &document.features.items {
        blocks.push(Block::Heading {
            level: 3,
            text: feature.title.clone(),
            icon: Some(Icon::resolve(&feature.icon)),
        });
        bullets(feature.points.iter().map(point_line), blocks);
    }
}

fn roadmap(roadmap: &Roadmap, config: &RenderConfig, blocks: &mut Vec<Block>) {
    blocks.push(Block::heading(2, TabId::Roadmap.label()));
    if !roadmap.status.is_empty() {
        blocks.push(Block::Callout {
            title: "Status".to_string(),
            text: roadmap.status.clone(),
        });
    }

    for bucket in rendered_buckets(config) {
        let Some(items) = roadmap.bucket(bucket) else {
            continue;
        };
        blocks.push(Block::heading(3, bucket.label()));
        for item in items {
            blocks.push(Block::heading(4, item.title.clone()));
            paragraph(&item.description, blocks);
        }
    }
}

fn next_steps(deployment: &Deployment, blocks: &mut Vec<Block>) {
    for (n, step) in deployment.steps.iter().enumerate() {
        blocks.push(Block::heading(3, format!("{}. {}", n + 1, step.title)));
        paragraph(&step.description, blocks);
        if let Some(points) = &step.points {
            bullets(points.iter().map(point_line), blocks);
        }
        for note in step.notes.iter().flatten() {
            blocks.push(Block::Callout {
                title: note.title.clone(),
                text: note.text.clone(),
            });
        }
    }
}

fn gallery(visuals: Option<&Visuals>, blocks: &mut Vec<Block>) {
    let title = visuals.map_or("", |v| v.title.as_str());
    blocks.push(Block::heading(2, or_default(title, TabId::Gallery.label())));
    for visual in visuals.into_iter().flat_map(|v| v.items.iter()) {
        blocks.push(Block::Media {
            kind: visual.kind,
            url: visual.url.clone(),
            caption: visual.caption.clone(),
        });
    }
}

fn badge(header: &Header) -> Option<BadgeView> {
    non_empty(header.status_badge.as_deref()).map(|text| BadgeView {
        text: text.to_string(),
        icon: icon_field(header.badge_icon.as_deref()),
    })
}

fn icon_field(name: Option<&str>) -> Option<Icon> {
    non_empty(name).map(Icon::resolve)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn paragraph(text: &str, blocks: &mut Vec<Block>) {
    if !text.is_empty() {
        blocks.push(Block::Paragraph(text.to_string()));
    }
}

fn bullets(lines: impl Iterator<Item = String>, blocks: &mut Vec<Block>) {
    let lines: Vec<_> = lines.collect();
    if !lines.is_empty() {
        blocks.push(Block::Bullets(lines));
    }
}

fn pairs(rows: impl Iterator<Item = (String, String)>, blocks: &mut Vec<Block>) {
    let rows: Vec<_> = rows.collect();
    if !rows.is_empty() {
        blocks.push(Block::Pairs(rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casestudy_schema::{ensure, Feature, TitledItem};
    use pretty_assertions::assert_eq;

    #[test]
    fn point_label_only_when_present() {
        assert_eq!(point_line(&Point::labeled("Speed", "fast")), "Speed: fast");
        assert_eq!(point_line(&Point::text("plain")), "plain");
        assert_eq!(point_line(&Point::labeled("", "blank label")), "blank label");
    }

    #[test]
    fn header_falls_back_to_default_title() {
        let mut doc = ensure(None);
        doc.header = None;
        let header = render_header(&doc, &RenderConfig::default());
        assert_eq!(header.report_title, "Development Process Report");
        assert!(header.badge.is_none());
        assert!(header.icon.is_none());

        let blank = render_header(&ensure(None), &RenderConfig::default());
        assert_eq!(blank.report_title, "Development Process Report");
        assert!(blank.badge.is_none());
    }

    #[test]
    fn header_badge_and_unknown_icon() {
        let mut doc = ensure(None);
        doc.header = Some(Header {
            report_title: Some("Report".into()),
            icon: Some("Bogus".into()),
            status_badge: Some("Live".into()),
            badge_icon: Some("Star".into()),
        });
        let header = render_header(&doc, &RenderConfig::default());
        assert_eq!(header.report_title, "Report");
        assert_eq!(header.icon, Some(Icon::Fallback));
        assert_eq!(
            header.badge,
            Some(BadgeView {
                text: "Live".into(),
                icon: Some(Icon::Star)
            })
        );
    }

    #[test]
    fn empty_lists_render_headings_only() {
        let view = render_tab(&ensure(None), TabId::Architecture, &RenderConfig::default());
        assert_eq!(
            view.blocks,
            vec![
                Block::heading(2, "Architecture"),
                Block::heading(3, "Core Stack"),
                Block::heading(3, "Key Decisions"),
            ]
        );
    }

    #[test]
    fn unknown_feature_icon_uses_fallback() {
        let mut doc = ensure(None);
        doc.features.items.push(Feature {
            title: "X".into(),
            icon: "NotARealIcon".into(),
            points: Vec::new(),
        });
        let view = render_tab(&doc, TabId::Features, &RenderConfig::default());
        assert_eq!(
            view.blocks[1],
            Block::Heading {
                level: 3,
                text: "X".into(),
                icon: Some(Icon::Fallback)
            }
        );
        assert_eq!(view.blocks.len(), 2);
    }

    #[test]
    fn roadmap_shows_only_present_original_buckets() {
        let mut doc = ensure(None);
        doc.roadmap = Roadmap {
            security: Some(Vec::new()),
            ux: Some(vec![TitledItem::new("Dark mode", "")]),
            status: "Live".into(),
            ..Roadmap::default()
        };
        let view = render_tab(&doc, TabId::Roadmap, &RenderConfig::default());
        assert_eq!(view.headings(3).collect::<Vec<_>>(), vec!["Security"]);

        let all = RenderConfig::default().with_schema_only_buckets(true);
        let view = render_tab(&doc, TabId::Roadmap, &all);
        assert_eq!(
            view.headings(3).collect::<Vec<_>>(),
            vec!["Security", "User Experience"]
        );
    }

    #[test]
    fn gated_tab_without_section_is_heading_only() {
        let view = render_tab(&ensure(None), TabId::NextSteps, &RenderConfig::default());
        assert_eq!(view.blocks, vec![Block::heading(2, "Next Steps")]);
        let view = render_tab(&ensure(None), TabId::Gallery, &RenderConfig::default());
        assert_eq!(view.blocks, vec![Block::heading(2, "Gallery")]);
    }
}
