//! Catalogue of list fields
//!
//! Every array in the document, with its path and the shape of a freshly
//! added item. Nested lists carry the index of their parent item.

use casestudy_schema::{DocumentPath, RoadmapBucket};
use serde_json::{json, Value};

/// An array field of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    /// `overview.heritage.items`
    HeritageItems,
    /// `overview.mission.stats`
    MissionStats,
    /// `architecture.coreStack`
    CoreStack,
    /// `architecture.decisions`
    Decisions,
    /// `features.items`
    Features,
    /// `features.items.{feature}.points`
    FeaturePoints { feature: usize },
    /// `roadmap.{bucket}`
    Roadmap(RoadmapBucket),
    /// `deployment.steps`
    DeploymentSteps,
    /// `deployment.steps.{step}.points`
    StepPoints { step: usize },
    /// `deployment.steps.{step}.notes`
    StepNotes { step: usize },
    /// `visuals.items`
    Visuals,
}

impl ListField {
    /// Path of the array
    #[must_use]
    pub fn path(self) -> DocumentPath {
        match self {
            Self::HeritageItems => ["overview", "heritage", "items"].into(),
            Self::MissionStats => ["overview", "mission", "stats"].into(),
            Self::CoreStack => ["architecture", "coreStack"].into(),
            Self::Decisions => ["architecture", "decisions"].into(),
            Self::Features => ["features", "items"].into(),
            Self::FeaturePoints { feature } => {
                DocumentPath::from(["features", "items"]).index(feature).child("points")
            }
            Self::Roadmap(bucket) => ["roadmap", bucket.key()].into(),
            Self::DeploymentSteps => ["deployment", "steps"].into(),
            Self::StepPoints { step } => {
                DocumentPath::from(["deployment", "steps"]).index(step).child("points")
            }
            Self::StepNotes { step } => {
                DocumentPath::from(["deployment", "steps"]).index(step).child("notes")
            }
            Self::Visuals => ["visuals", "items"].into(),
        }
    }

    /// Shape of a newly added item
    #[must_use]
    pub fn default_item(self) -> Value {
        match self {
            Self::HeritageItems | Self::FeaturePoints { .. } | Self::StepPoints { .. } => {
                json!({"label": "", "text": ""})
            }
            Self::MissionStats => json!({"label": "", "subLabel": ""}),
            Self::CoreStack => json!({"label": "", "value": ""}),
            Self::Decisions | Self::Roadmap(_) | Self::DeploymentSteps => {
                json!({"title": "", "description": ""})
            }
            Self::Features => json!({"title": "", "icon": "", "points": []}),
            Self::StepNotes { .. } => json!({"title": "", "text": ""}),
            Self::Visuals => json!({"type": "image", "url": "", "caption": ""}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_include_parent_index() {
        assert_eq!(
            ListField::FeaturePoints { feature: 2 }.path().to_string(),
            "features.items.2.points"
        );
        assert_eq!(
            ListField::StepNotes { step: 0 }.path().to_string(),
            "deployment.steps.0.notes"
        );
        assert_eq!(
            ListField::Roadmap(RoadmapBucket::Seo).path().to_string(),
            "roadmap.seo"
        );
    }

    #[test]
    fn default_items_are_objects() {
        let fields = [
            ListField::HeritageItems,
            ListField::MissionStats,
            ListField::CoreStack,
            ListField::Decisions,
            ListField::Features,
            ListField::FeaturePoints { feature: 0 },
            ListField::Roadmap(RoadmapBucket::Ux),
            ListField::DeploymentSteps,
            ListField::StepPoints { step: 0 },
            ListField::StepNotes { step: 0 },
            ListField::Visuals,
        ];
        for field in fields {
            assert!(field.default_item().is_object(), "{field:?}");
        }
    }
}
