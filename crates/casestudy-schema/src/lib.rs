//! Case Study Schema
//!
//! Typed model for case-study documents stored as JSON on project and
//! article records.
//!
//! # Core Concepts
//!
//! - [`CaseStudyDocument`]: Root document with required and presence-gated sections
//! - [`ensure`]: Blank document when none exists yet
//! - [`DocumentPath`]: Dotted addressing into the document (`roadmap.ux`)
//! - [`Icon`]: Closed icon registry with a fallback glyph
//! - [`codec`]: Text encoding of the stored `caseStudyData` field
//!
//! # Example
//!
//! ```
//! use casestudy_schema::{codec, ensure};
//!
//! let mut doc = ensure(None);
//! doc.meta.title = "Acme Redesign".into();
//! let text = codec::serialize(&doc, false).unwrap();
//! assert_eq!(codec::deserialize(&text).unwrap(), doc);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod codec;
mod document;
mod icon;
mod path;

pub use codec::CodecError;
pub use document::{
    ensure, Architecture, CaseStudyDocument, Deployment, DeploymentStep, Feature, Features,
    Header, Heritage, Meta, Mission, Note, OptionalSection, Overview, Point, Roadmap,
    RoadmapBucket, StackEntry, Stat, TitledItem, Visual, VisualKind, Visuals,
};
pub use icon::{registry_len, Icon};
pub use path::{segment_index, DocumentPath, PathError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
