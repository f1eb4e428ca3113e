//! Case-study document types
//!
//! The document is stored as one JSON value on a project or article record.
//! Field names follow the stored camelCase format exactly.
//!
//! # Optionality
//! - Required sections (`meta`, `overview`, `architecture`, `features`,
//!   `roadmap`) default when missing so corrupted records still load.
//! - `header`, `deployment` and `visuals` are presence-gated: `None` means the
//!   key is absent and is never serialized.
//! - Roadmap buckets are presence-gated individually.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Root case-study document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyDocument {
    /// Identifying metadata shown in the report header
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Meta,

    /// Cosmetic banner overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,

    /// Heritage and mission
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: Overview,

    /// Core stack and design decisions
    #[serde(default, deserialize_with = "null_as_default")]
    pub architecture: Architecture,

    /// Feature cards
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Features,

    /// Roadmap buckets and status
    #[serde(default, deserialize_with = "null_as_default")]
    pub roadmap: Roadmap,

    /// Next steps, shown only when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,

    /// Gallery, shown only when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visuals: Option<Visuals>,
}

impl CaseStudyDocument {
    /// Structurally complete blank document
    ///
    /// Required sections carry empty strings and lists, the header carries
    /// empty title and badge, every roadmap bucket is enabled and empty, and
    /// the optional sections are absent.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            meta: Meta::default(),
            header: Some(Header {
                report_title: Some(String::new()),
                status_badge: Some(String::new()),
                ..Header::default()
            }),
            overview: Overview::default(),
            architecture: Architecture::default(),
            features: Features::default(),
            roadmap: Roadmap::all_enabled(),
            deployment: None,
            visuals: None,
        }
    }

    /// Whether an optional top-level section key exists
    #[inline]
    #[must_use]
    pub fn has_section(&self, section: OptionalSection) -> bool {
        match section {
            OptionalSection::Deployment => self.deployment.is_some(),
            OptionalSection::Visuals => self.visuals.is_some(),
        }
    }
}

/// Return `document` unchanged, or a blank document when there is none
///
/// Partial documents are not deep-merged.
#[inline]
#[must_use]
pub fn ensure(document: Option<CaseStudyDocument>) -> CaseStudyDocument {
    document.unwrap_or_else(CaseStudyDocument::blank)
}

/// Stored `null` reads as the field's default, like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifying metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Meta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agency: String,
}

/// Banner overrides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_title: Option<String>,
    /// Icon registry key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_badge: Option<String>,
    /// Icon registry key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_icon: Option<String>,
}

/// Text with an optional leading label (`"{label}: {text}"`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl Point {
    /// Point without a label
    #[inline]
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    /// Point with a label
    #[inline]
    #[must_use]
    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

/// Title plus description, used by decisions and roadmap items
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TitledItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl TitledItem {
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Overview {
    #[serde(default, deserialize_with = "null_as_default")]
    pub heritage: Heritage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mission: Mission,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Heritage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Mission {
    #[serde(default, deserialize_with = "null_as_default")]
    pub statement: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Architecture {
    #[serde(default, deserialize_with = "null_as_default")]
    pub core_stack: Vec<StackEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub decisions: Vec<TitledItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StackEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Features {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Icon registry key; unknown keys render the fallback glyph
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: Vec<Point>,
}

/// Roadmap with six independently presence-gated buckets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Roadmap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<Vec<TitledItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<TitledItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<TitledItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ux: Option<Vec<TitledItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Vec<TitledItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<Vec<TitledItem>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl Roadmap {
    /// Roadmap with every bucket present and empty
    #[must_use]
    pub fn all_enabled() -> Self {
        Self {
            performance: Some(Vec::new()),
            security: Some(Vec::new()),
            features: Some(Vec::new()),
            ux: Some(Vec::new()),
            seo: Some(Vec::new()),
            other: Some(Vec::new()),
            status: String::new(),
        }
    }

    /// Bucket items, `None` when the bucket is disabled
    #[inline]
    #[must_use]
    pub fn bucket(&self, bucket: RoadmapBucket) -> Option<&[TitledItem]> {
        let slot = match bucket {
            RoadmapBucket::Performance => &self.performance,
            RoadmapBucket::Security => &self.security,
            RoadmapBucket::Features => &self.features,
            RoadmapBucket::Ux => &self.ux,
            RoadmapBucket::Seo => &self.seo,
            RoadmapBucket::Other => &self.other,
        };
        slot.as_deref()
    }

    /// Present buckets in declaration order
    pub fn present_buckets(&self) -> impl Iterator<Item = (RoadmapBucket, &[TitledItem])> + '_ {
        RoadmapBucket::ALL
            .iter()
            .filter_map(move |b| self.bucket(*b).map(|items| (*b, items)))
    }
}

/// Named roadmap bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoadmapBucket {
    Performance,
    Security,
    Features,
    Ux,
    Seo,
    Other,
}

impl RoadmapBucket {
    /// All buckets in stored order
    pub const ALL: [Self; 6] = [
        Self::Performance,
        Self::Security,
        Self::Features,
        Self::Ux,
        Self::Seo,
        Self::Other,
    ];

    /// Stored JSON key
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Security => "security",
            Self::Features => "features",
            Self::Ux => "ux",
            Self::Seo => "seo",
            Self::Other => "other",
        }
    }

    /// Display heading
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::Features => "Features",
            Self::Ux => "User Experience",
            Self::Seo => "SEO",
            Self::Other => "Other",
        }
    }

    /// Bucket exists in the data model but has no report section yet
    #[inline]
    #[must_use]
    pub fn is_schema_only(self) -> bool {
        matches!(self, Self::Ux | Self::Seo | Self::Other)
    }

    /// Look up a bucket by stored key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }
}

/// Presence-gated top-level section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalSection {
    Deployment,
    Visuals,
}

impl OptionalSection {
    pub const ALL: [Self; 2] = [Self::Deployment, Self::Visuals];

    /// Stored JSON key
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Deployment => "deployment",
            Self::Visuals => "visuals",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Deployment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<DeploymentStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct DeploymentStep {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Note {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Visuals {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Visual>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Visual {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: VisualKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
}

/// Gallery media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VisualKind {
    #[default]
    Image,
    Video,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn ensure_none_is_blank() {
        let doc = ensure(None);
        assert_eq!(doc.meta, Meta::default());
        let header = doc.header.as_ref().unwrap();
        assert_eq!(header.report_title.as_deref(), Some(""));
        assert_eq!(header.status_badge.as_deref(), Some(""));
        assert!(header.icon.is_none());
        for bucket in RoadmapBucket::ALL {
            assert_eq!(doc.roadmap.bucket(bucket), Some(&[][..]));
        }
        assert!(doc.deployment.is_none());
        assert!(doc.visuals.is_none());
    }

    #[test]
    fn ensure_is_idempotent() {
        assert_eq!(ensure(Some(ensure(None))), ensure(None));
    }

    #[test]
    fn ensure_returns_input_unchanged() {
        let mut doc = CaseStudyDocument::default();
        doc.meta.title = "Kept".into();
        assert_eq!(ensure(Some(doc.clone())), doc);
    }

    #[test]
    fn blank_serializes_expected_shape() {
        let value = serde_json::to_value(CaseStudyDocument::blank()).unwrap();
        assert_eq!(value["meta"], json!({"title": "", "date": "", "agency": ""}));
        assert_eq!(value["header"], json!({"reportTitle": "", "statusBadge": ""}));
        assert_eq!(
            value["roadmap"],
            json!({
                "performance": [], "security": [], "features": [],
                "ux": [], "seo": [], "other": [], "status": ""
            })
        );
        assert!(value.get("deployment").is_none());
        assert!(value.get("visuals").is_none());
    }

    #[test]
    fn missing_required_sections_default() {
        let doc: CaseStudyDocument = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc.meta.title, "");
        assert!(doc.features.items.is_empty());
        assert!(doc.roadmap.present_buckets().next().is_none());
    }

    #[test]
    fn null_required_values_read_as_defaults() {
        let doc: CaseStudyDocument = serde_json::from_value(json!({
            "meta": {"title": "Acme", "date": null, "agency": "Studio"},
            "overview": null,
            "architecture": {"coreStack": null, "decisions": []},
            "features": {"items": null},
            "roadmap": {"status": null, "security": null},
            "visuals": {"title": "Shots", "items": [{"type": null, "url": "u", "caption": null}]}
        }))
        .unwrap();
        assert_eq!(doc.meta.title, "Acme");
        assert_eq!(doc.meta.date, "");
        assert_eq!(doc.overview, Overview::default());
        assert!(doc.architecture.core_stack.is_empty());
        assert!(doc.features.items.is_empty());
        assert_eq!(doc.roadmap, Roadmap::default());
        let visuals = doc.visuals.unwrap();
        assert_eq!(visuals.items[0].kind, VisualKind::Image);
        assert_eq!(visuals.items[0].url, "u");
    }

    #[test]
    fn empty_bucket_differs_from_absent() {
        let doc: CaseStudyDocument =
            serde_json::from_value(json!({"roadmap": {"security": [], "status": "Live"}})).unwrap();
        let present: Vec<_> = doc.roadmap.present_buckets().map(|(b, _)| b).collect();
        assert_eq!(present, vec![RoadmapBucket::Security]);
    }

    #[test]
    fn visual_kind_uses_type_key() {
        let visual: Visual =
            serde_json::from_value(json!({"type": "video", "url": "u", "caption": "c"})).unwrap();
        assert_eq!(visual.kind, VisualKind::Video);
        assert_eq!(serde_json::to_value(&visual).unwrap()["type"], json!("video"));
    }

    #[test]
    fn bucket_keys_round_trip() {
        for bucket in RoadmapBucket::ALL {
            assert_eq!(RoadmapBucket::from_key(bucket.key()), Some(bucket));
        }
        assert_eq!(RoadmapBucket::from_key("nope"), None);
        assert!(RoadmapBucket::Seo.is_schema_only());
        assert!(!RoadmapBucket::Security.is_schema_only());
    }
}
