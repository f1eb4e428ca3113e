//! Host records
//!
//! Projects and articles carry the document as serialized text in their
//! `caseStudyData` field. The record never interprets that text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Record identifier
///
/// ASCII alphanumerics, `-` and `_` only, so an id is always a valid file
/// stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Parse an id
    ///
    /// # Errors
    /// Returns error if `id` is empty or contains other characters
    pub fn new(id: impl Into<String>) -> Result<Self, StoreError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(id))
        } else {
            Err(StoreError::InvalidId(id))
        }
    }

    /// Fresh random id
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// Host entity kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Project,
    Article,
}

impl RecordKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Article => "article",
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(Self::Project),
            "article" => Ok(Self::Article),
            other => Err(format!("unknown record kind: '{other}'")),
        }
    }
}

/// Host record holding an optional serialized document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyRecord {
    pub id: RecordId,
    #[serde(default)]
    pub kind: RecordKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study_data: Option<String>,
}

impl CaseStudyRecord {
    /// Record with no document
    #[must_use]
    pub fn new(id: RecordId, kind: RecordKind) -> Self {
        Self {
            id,
            kind,
            case_study_data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.case_study_data = Some(data.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_charset() {
        assert!(RecordId::new("acme-2024_v1").is_ok());
        assert!(RecordId::new("").is_err());
        assert!(RecordId::new("../etc/passwd").is_err());
        assert!(RecordId::new("a b").is_err());
    }

    #[test]
    fn generated_ids_are_valid_and_distinct() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
        assert!(RecordId::new(a.as_str()).is_ok());
    }

    #[test]
    fn record_wire_format() {
        let record = CaseStudyRecord::new(RecordId::new("p1").unwrap(), RecordKind::Article)
            .with_data("{}");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "p1", "kind": "article", "caseStudyData": "{}"})
        );

        let bare: CaseStudyRecord = serde_json::from_str(r#"{"id": "p2"}"#).unwrap();
        assert_eq!(bare.kind, RecordKind::Project);
        assert!(bare.case_study_data.is_none());

        assert!(serde_json::from_str::<CaseStudyRecord>(r#"{"id": "a/b"}"#).is_err());
    }
}
