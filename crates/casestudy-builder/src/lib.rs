//! Case Study Builder
//!
//! Authoring side of case-study documents.
//!
//! # Core Operations
//!
//! - **Update**: [`DocumentBuilder::update`] sets a value at a [`DocumentPath`],
//!   materializing missing objects, without touching the previous document
//! - **Lists**: add, remove and move items of any [`ListField`]
//! - **Toggles**: enable or disable roadmap buckets and optional sections
//! - **Icons**: [`IconPicker`] searches the registry and writes icon names
//! - **Raw view**: [`RawJsonEditor`] accepts hand-typed JSON, keeping the last
//!   good document when the text does not parse
//! - **Binding**: [`SerializedField`] follows change notifications and
//!   serializes on the host's schedule
//!
//! # Example
//!
//! ```
//! use casestudy_builder::{DocumentBuilder, ListField};
//! use serde_json::json;
//!
//! let mut builder = DocumentBuilder::default();
//! builder.update(["meta", "title"], json!("Acme Redesign")).unwrap();
//! builder.add_item(ListField::CoreStack).unwrap();
//! assert_eq!(builder.document().architecture.core_stack.len(), 1);
//! ```
//!
//! [`DocumentPath`]: casestudy_schema::DocumentPath

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod binding;
pub mod builder;
pub mod config;
pub mod error;
pub mod icon_picker;
pub mod lists;
pub mod mutation;
pub mod raw;

pub use binding::SerializedField;
pub use builder::{apply_removal, apply_update, DocumentBuilder, MoveDirection, SubscriptionId};
pub use config::BuilderConfig;
pub use error::BuilderError;
pub use icon_picker::IconPicker;
pub use lists::ListField;
pub use mutation::{get_at_path, remove_at_path, retains, set_at_path};
pub use raw::{RawEdit, RawJsonEditor};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
