//! Document paths
//!
//! [`DocumentPath`] addresses a value inside a case-study document, e.g.
//! `features.items.0.points`. Numeric segments index into arrays.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Path from the document root to a nested value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DocumentPath(Vec<String>);

impl DocumentPath {
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Empty path (the document itself)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parent path, `None` at the root
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.split_last().map(|(_, rest)| Self(rest.to_vec()))
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a key segment
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Append an array index segment
    #[inline]
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(index.to_string())
    }

    /// Whether this path is a prefix of (or equal to) `other`
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0.starts_with(&self.0)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Interpret a segment as an array index
#[inline]
#[must_use]
pub fn segment_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl Display for DocumentPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl FromStr for DocumentPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        s.split('.')
            .map(|seg| {
                if seg.is_empty() {
                    Err(PathError::EmptySegment)
                } else if seg.contains(|c: char| !c.is_ascii_alphanumeric() && c != '_') {
                    Err(PathError::InvalidSegment(seg.to_string()))
                } else {
                    Ok(seg.to_string())
                }
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

impl From<Vec<String>> for DocumentPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for DocumentPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for DocumentPath {
    fn from(segments: [&str; N]) -> Self {
        Self::from(&segments[..])
    }
}

/// Path syntax and traversal errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path contains empty segment")]
    EmptySegment,

    #[error("invalid segment: {0} (must be alphanumeric or underscore)")]
    InvalidSegment(String),

    /// The root cannot be replaced or removed through a path operation
    #[error("path is empty")]
    EmptyPath,

    #[error("index {index} out of range at '{path}' (len {len})")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },

    /// A segment addressed into a string, number or other scalar
    #[error("'{path}' is not an object or array")]
    NotAContainer { path: String },

    /// Array addressed with a non-numeric segment
    #[error("'{segment}' is not an array index at '{path}'")]
    ExpectedIndex { path: String, segment: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_dotted() {
        let path: DocumentPath = "features.items.0.points".parse().unwrap();
        assert_eq!(path.segments(), &["features", "items", "0", "points"]);
        assert_eq!(path.to_string(), "features.items.0.points");
    }

    #[test]
    fn parse_empty_is_root() {
        let path: DocumentPath = "".parse().unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn parse_rejects_bad_segments() {
        assert_eq!("a..b".parse::<DocumentPath>(), Err(PathError::EmptySegment));
        assert!(matches!(
            "meta.ti-tle".parse::<DocumentPath>(),
            Err(PathError::InvalidSegment(_))
        ));
    }

    #[test]
    fn builders() {
        let path = DocumentPath::from(["deployment", "steps"]).index(2).child("notes");
        assert_eq!(path.to_string(), "deployment.steps.2.notes");
        assert_eq!(path.last(), Some("notes"));
        assert_eq!(path.parent().unwrap().to_string(), "deployment.steps.2");
        assert!(DocumentPath::root().parent().is_none());
    }

    #[test]
    fn prefix() {
        let a = DocumentPath::from(["roadmap"]);
        let b = DocumentPath::from(["roadmap", "ux"]);
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
    }

    #[test]
    fn index_segments() {
        assert_eq!(segment_index("3"), Some(3));
        assert_eq!(segment_index("x3"), None);
        assert_eq!(segment_index(""), None);
        assert_eq!(segment_index("-1"), None);
    }

    proptest! {
        #[test]
        fn display_parses_back(segments in prop::collection::vec("[A-Za-z0-9_]{1,8}", 0..6)) {
            let path = DocumentPath::new(segments);
            let parsed: DocumentPath = path.to_string().parse().unwrap();
            prop_assert_eq!(parsed, path);
        }

        #[test]
        fn child_extends_prefix(segments in prop::collection::vec("[a-z]{1,6}", 0..5), tail in "[a-z]{1,6}") {
            let path = DocumentPath::new(segments);
            let child = path.child(tail.clone());
            prop_assert!(path.is_prefix_of(&child));
            prop_assert_eq!(child.parent(), Some(path));
            prop_assert_eq!(child.last(), Some(tail.as_str()));
        }
    }
}
