//! Icon picker
//!
//! Searchable gallery over the icon registry bound to one icon field. The
//! picker only ever writes registry names or an empty string.

use casestudy_schema::{DocumentPath, Icon};
use serde_json::Value;

use crate::builder::DocumentBuilder;
use crate::error::BuilderError;

/// Picker state for one icon field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPicker {
    target: DocumentPath,
    query: String,
    limit: usize,
}

impl IconPicker {
    /// Picker writing to the field at `target`
    #[must_use]
    pub fn new(target: DocumentPath) -> Self {
        Self {
            target,
            query: String::new(),
            limit: 0,
        }
    }

    /// `features.items.{index}.icon`
    #[must_use]
    pub fn for_feature(index: usize) -> Self {
        Self::new(
            DocumentPath::from(["features", "items"])
                .index(index)
                .child("icon"),
        )
    }

    /// `header.icon`
    #[must_use]
    pub fn for_header() -> Self {
        Self::new(["header", "icon"].into())
    }

    /// `header.badgeIcon`
    #[must_use]
    pub fn for_badge() -> Self {
        Self::new(["header", "badgeIcon"].into())
    }

    /// Cap the number of results, 0 for unlimited
    #[inline]
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &DocumentPath {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Icons matching the current query
    #[must_use]
    pub fn results(&self) -> Vec<Icon> {
        let limit = if self.limit == 0 { usize::MAX } else { self.limit };
        Icon::search(&self.query).take(limit).collect()
    }

    /// No icon matches the query
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        Icon::search(&self.query).next().is_none()
    }

    /// Icon currently stored in the target field, if it is a registry name
    #[must_use]
    pub fn current(&self, builder: &DocumentBuilder) -> Option<Icon> {
        let root = casestudy_schema::codec::to_value(builder.document()).ok()?;
        crate::mutation::get_at_path(&root, &self.target)
            .and_then(Value::as_str)
            .and_then(Icon::from_name)
    }

    /// Write `icon` into the target field
    ///
    /// # Errors
    /// Propagates update errors (e.g. the target feature does not exist)
    pub fn select(&self, builder: &mut DocumentBuilder, icon: Icon) -> Result<(), BuilderError> {
        builder.update(self.target.clone(), Value::String(icon.name().to_string()))?;
        Ok(())
    }

    /// Clear the target field to an empty string
    ///
    /// # Errors
    /// Propagates update errors
    pub fn clear(&self, builder: &mut DocumentBuilder) -> Result<(), BuilderError> {
        builder.update(self.target.clone(), Value::String(String::new()))?;
        Ok(())
    }
}
