//! Testing utilities for the case study workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use casestudy_schema::{
    ensure, Architecture, CaseStudyDocument, Deployment, DeploymentStep, Feature, Features, Header,
    Heritage, Meta, Mission, Note, Overview, Point, Roadmap, StackEntry, Stat, TitledItem, Visual,
    VisualKind, Visuals,
};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

/// Fully populated document with every optional section present
pub fn sample_document() -> CaseStudyDocument {
    CaseStudyDocument {
        meta: Meta {
            title: "Acme Redesign".into(),
            date: "2024-03".into(),
            agency: "Northwind Studio".into(),
        },
        header: Some(Header {
            report_title: Some("Engineering Report".into()),
            icon: Some("Rocket".into()),
            status_badge: Some("Shipped".into()),
            badge_icon: Some("CheckCircle".into()),
        }),
        overview: Overview {
            heritage: Heritage {
                title: "Heritage".into(),
                description: "Family bakery since 1952".into(),
                items: vec![Point::labeled("Founded", "1952"), Point::text("Three stores")],
            },
            mission: Mission {
                statement: "Bring the counter online".into(),
                stats: vec![Stat {
                    label: "40%".into(),
                    sub_label: "online orders".into(),
                }],
            },
        },
        architecture: Architecture {
            core_stack: vec![StackEntry {
                label: "Frontend".into(),
                value: "Next.js".into(),
            }],
            decisions: vec![TitledItem::new("SSR", "Pages render on the server")],
        },
        features: Features {
            items: vec![Feature {
                title: "Ordering".into(),
                icon: "Zap".into(),
                points: vec![Point::labeled("Speed", "Two taps"), Point::text("Saved carts")],
            }],
        },
        roadmap: Roadmap {
            performance: Some(vec![TitledItem::new("Edge cache", "Cache menus at the edge")]),
            security: Some(Vec::new()),
            features: Some(vec![TitledItem::new("Loyalty", "Points per order")]),
            ux: Some(vec![TitledItem::new("Dark mode", "Follows the system")]),
            seo: None,
            other: None,
            status: "Live".into(),
        },
        deployment: Some(Deployment {
            steps: vec![DeploymentStep {
                title: "Provision".into(),
                description: "Create the database".into(),
                points: Some(vec![Point::labeled("Region", "eu-west")]),
                notes: Some(vec![Note {
                    title: "Backups".into(),
                    text: "Nightly".into(),
                }]),
            }],
        }),
        visuals: Some(Visuals {
            title: "Screens".into(),
            items: vec![Visual {
                kind: VisualKind::Image,
                url: "https://example.com/home.png".into(),
                caption: "Home".into(),
            }],
        }),
    }
}

/// Blank document with only meta and roadmap status filled in, no buckets
pub fn sparse_document() -> CaseStudyDocument {
    let mut doc = ensure(None);
    doc.meta.title = "Sparse".into();
    doc.header = None;
    doc.roadmap = Roadmap {
        status: "Live".into(),
        ..Roadmap::default()
    };
    doc
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}"
}

fn arb_point() -> impl Strategy<Value = Point> {
    (option::of(text()), text()).prop_map(|(label, text)| Point { label, text })
}

fn arb_titled() -> impl Strategy<Value = TitledItem> {
    (text(), text()).prop_map(|(title, description)| TitledItem { title, description })
}

fn arb_bucket() -> impl Strategy<Value = Option<Vec<TitledItem>>> {
    option::of(vec(arb_titled(), 0..3))
}

fn arb_header() -> impl Strategy<Value = Header> {
    (option::of(text()), option::of(text()), option::of(text()), option::of(text())).prop_map(
        |(report_title, icon, status_badge, badge_icon)| Header {
            report_title,
            icon,
            status_badge,
            badge_icon,
        },
    )
}

fn arb_roadmap() -> impl Strategy<Value = Roadmap> {
    (
        arb_bucket(),
        arb_bucket(),
        arb_bucket(),
        arb_bucket(),
        arb_bucket(),
        arb_bucket(),
        text(),
    )
        .prop_map(|(performance, security, features, ux, seo, other, status)| Roadmap {
            performance,
            security,
            features,
            ux,
            seo,
            other,
            status,
        })
}

fn arb_deployment() -> impl Strategy<Value = Deployment> {
    vec(
        (
            text(),
            text(),
            option::of(vec(arb_point(), 0..3)),
            option::of(vec((text(), text()).prop_map(|(title, text)| Note { title, text }), 0..2)),
        )
            .prop_map(|(title, description, points, notes)| DeploymentStep {
                title,
                description,
                points,
                notes,
            }),
        0..3,
    )
    .prop_map(|steps| Deployment { steps })
}

fn arb_visuals() -> impl Strategy<Value = Visuals> {
    (
        text(),
        vec(
            (prop_oneof![Just(VisualKind::Image), Just(VisualKind::Video)], text(), text())
                .prop_map(|(kind, url, caption)| Visual { kind, url, caption }),
            0..3,
        ),
    )
        .prop_map(|(title, items)| Visuals { title, items })
}

fn arb_features() -> impl Strategy<Value = Features> {
    vec(
        (text(), prop_oneof![Just("Zap".to_string()), text()], vec(arb_point(), 0..3))
            .prop_map(|(title, icon, points)| Feature { title, icon, points }),
        0..3,
    )
    .prop_map(|items| Features { items })
}

/// Arbitrary structurally valid document
pub fn arb_document() -> impl Strategy<Value = CaseStudyDocument> {
    let head = (
        (text(), text(), text()).prop_map(|(title, date, agency)| Meta { title, date, agency }),
        option::of(arb_header()),
        (text(), text(), vec(arb_point(), 0..3), text()),
        vec((text(), text()).prop_map(|(label, sub_label)| Stat { label, sub_label }), 0..3),
    );
    let tail = (
        vec((text(), text()).prop_map(|(label, value)| StackEntry { label, value }), 0..3),
        vec(arb_titled(), 0..3),
        arb_features(),
        arb_roadmap(),
        option::of(arb_deployment()),
        option::of(arb_visuals()),
    );
    (head, tail).prop_map(
        |(
            (meta, header, (h_title, h_desc, h_items, statement), stats),
            (core_stack, decisions, features, roadmap, deployment, visuals),
        )| CaseStudyDocument {
            meta,
            header,
            overview: Overview {
                heritage: Heritage {
                    title: h_title,
                    description: h_desc,
                    items: h_items,
                },
                mission: Mission { statement, stats },
            },
            architecture: Architecture {
                core_stack,
                decisions,
            },
            features,
            roadmap,
            deployment,
            visuals,
        },
    )
}

/// Stored JSON as written by the authoring form
pub fn stored_json() -> serde_json::Value {
    serde_json::json!({
        "meta": {"title": "Stored", "date": "2023", "agency": "Studio"},
        "overview": {
            "heritage": {"title": "", "description": "", "items": [{"text": "v1"}]},
            "mission": {"statement": "", "stats": []}
        },
        "architecture": {"coreStack": [], "decisions": []},
        "features": {"items": [{"title": "X", "icon": "NotARealIcon", "points": []}]},
        "roadmap": {"security": [], "status": "Beta"},
        "deployment": {"steps": []}
    })
}
