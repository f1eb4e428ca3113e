//! Document builder
//!
//! [`DocumentBuilder`] owns the document being authored. Every edit is a
//! path-based update computed by [`apply_update`] against a copy of the
//! current document; on success the copy replaces the current document and
//! subscribers are notified. Failed edits change nothing.

use casestudy_schema::{
    codec, ensure, CaseStudyDocument, DocumentPath, OptionalSection, RoadmapBucket,
};
use serde_json::{json, Value};

use crate::config::BuilderConfig;
use crate::error::BuilderError;
use crate::lists::ListField;
use crate::mutation::{get_at_path, remove_at_path, retains, set_at_path};

/// Document-changed subscriber
pub type Listener = Box<dyn FnMut(&CaseStudyDocument) + Send>;

/// Handle returned by [`DocumentBuilder::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Compute the document that results from setting `value` at `path`
///
/// `document` is not modified.
///
/// # Errors
/// Path errors, [`casestudy_schema::CodecError::Shape`] when `value` does
/// not fit the field it lands in, or [`BuilderError::UnknownPath`] when the
/// document would drop it (unknown keys)
pub fn apply_update(
    document: &CaseStudyDocument,
    path: &DocumentPath,
    value: Value,
) -> Result<CaseStudyDocument, BuilderError> {
    let edited = set_at_path(codec::to_value(document)?, path, value.clone())?;
    let next = codec::from_value(edited)?;
    let stored = codec::to_value(&next)?;
    if !retains(get_at_path(&stored, path), &value) {
        return Err(BuilderError::UnknownPath(path.clone()));
    }
    Ok(next)
}

/// Compute the document that results from removing the key at `path`
///
/// # Errors
/// Path errors, or a shape error when removing a required value
pub fn apply_removal(
    document: &CaseStudyDocument,
    path: &DocumentPath,
) -> Result<CaseStudyDocument, BuilderError> {
    let (edited, _) = remove_at_path(codec::to_value(document)?, path)?;
    Ok(codec::from_value(edited)?)
}

/// Direction for [`DocumentBuilder::move_item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Editing surface for one case-study document
pub struct DocumentBuilder {
    document: CaseStudyDocument,
    config: BuilderConfig,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    revision: u64,
}

impl DocumentBuilder {
    /// Start editing `initial`, or a blank document when there is none
    #[must_use]
    pub fn new(initial: Option<CaseStudyDocument>, config: BuilderConfig) -> Self {
        Self {
            document: ensure(initial),
            config,
            listeners: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn document(&self) -> &CaseStudyDocument {
        &self.document
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Number of committed changes
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Take the document, ending the editing session
    #[inline]
    #[must_use]
    pub fn into_document(self) -> CaseStudyDocument {
        self.document
    }

    /// Current document as JSON text, honouring `pretty_json`
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, BuilderError> {
        Ok(codec::serialize(&self.document, self.config.pretty_json)?)
    }

    /// Register a document-changed subscriber
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CaseStudyDocument) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscriber; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Set `value` at `path`
    ///
    /// # Errors
    /// See [`apply_update`]; the document is unchanged on error
    pub fn update(
        &mut self,
        path: impl Into<DocumentPath>,
        value: Value,
    ) -> Result<&CaseStudyDocument, BuilderError> {
        let path = path.into();
        let next = apply_update(&self.document, &path, value)?;
        tracing::debug!(path = %path, "applied document update");
        Ok(self.commit(next))
    }

    /// Remove the key at `path`
    ///
    /// # Errors
    /// See [`apply_removal`]; the document is unchanged on error
    pub fn remove(&mut self, path: impl Into<DocumentPath>) -> Result<&CaseStudyDocument, BuilderError> {
        let path = path.into();
        let next = apply_removal(&self.document, &path)?;
        tracing::debug!(path = %path, "removed document key");
        Ok(self.commit(next))
    }

    /// Replace the whole document
    pub fn replace(&mut self, document: CaseStudyDocument) -> &CaseStudyDocument {
        tracing::debug!("replaced document");
        self.commit(document)
    }

    /// Append a default item to `field`
    ///
    /// A missing list is created. Returns the index of the new item.
    ///
    /// # Errors
    /// Fails if the field holds a non-list value or its parent item is missing
    pub fn add_item(&mut self, field: ListField) -> Result<usize, BuilderError> {
        let path = field.path();
        let mut items = self.list_at(&path)?;
        items.push(field.default_item());
        let index = items.len() - 1;
        self.update(path, Value::Array(items))?;
        Ok(index)
    }

    /// Remove the item at `index` from `field`, keeping the order of the rest
    ///
    /// # Errors
    /// Fails if `index` is out of range
    pub fn remove_item(&mut self, field: ListField, index: usize) -> Result<(), BuilderError> {
        let path = field.path();
        let mut items = self.list_at(&path)?;
        check_index(&path, index, items.len())?;
        items.remove(index);
        self.update(path, Value::Array(items))?;
        Ok(())
    }

    /// Swap the item at `index` with its neighbour
    ///
    /// Moving past either end is a no-op. Returns the item's new index.
    ///
    /// # Errors
    /// Fails if `index` is out of range
    pub fn move_item(
        &mut self,
        field: ListField,
        index: usize,
        direction: MoveDirection,
    ) -> Result<usize, BuilderError> {
        let path = field.path();
        let mut items = self.list_at(&path)?;
        check_index(&path, index, items.len())?;
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|t| *t < items.len()),
        };
        let Some(target) = target else {
            return Ok(index);
        };
        items.swap(index, target);
        self.update(path, Value::Array(items))?;
        Ok(target)
    }

    /// Enable or disable a roadmap bucket
    ///
    /// Enabling keeps existing items; disabling removes the key.
    ///
    /// # Errors
    /// Propagates update errors
    pub fn set_bucket_enabled(
        &mut self,
        bucket: RoadmapBucket,
        enabled: bool,
    ) -> Result<(), BuilderError> {
        let present = self.document.roadmap.bucket(bucket).is_some();
        let path = DocumentPath::from(["roadmap", bucket.key()]);
        match (enabled, present) {
            (true, false) => {
                self.update(path, json!([]))?;
            }
            (false, true) => {
                self.remove(path)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Enable or disable an optional section (`deployment` or `visuals`)
    ///
    /// # Errors
    /// Propagates update errors
    pub fn set_section_enabled(
        &mut self,
        section: OptionalSection,
        enabled: bool,
    ) -> Result<(), BuilderError> {
        let present = self.document.has_section(section);
        let path = DocumentPath::from([section.key()]);
        match (enabled, present) {
            (true, false) => {
                let empty = match section {
                    OptionalSection::Deployment => json!({"steps": []}),
                    OptionalSection::Visuals => json!({"title": "", "items": []}),
                };
                self.update(path, empty)?;
            }
            (false, true) => {
                self.remove(path)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn list_at(&self, path: &DocumentPath) -> Result<Vec<Value>, BuilderError> {
        let root = codec::to_value(&self.document)?;
        match get_at_path(&root, path) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(_) => Err(BuilderError::NotAList(path.clone())),
        }
    }

    fn commit(&mut self, next: CaseStudyDocument) -> &CaseStudyDocument {
        self.document = next;
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(&self.document);
        }
        tracing::trace!(
            revision = self.revision,
            listeners = self.listeners.len(),
            "notified subscribers"
        );
        &self.document
    }
}

impl std::fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("document", &self.document)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(None, BuilderConfig::default())
    }
}

fn check_index(path: &DocumentPath, index: usize, len: usize) -> Result<(), BuilderError> {
    if index < len {
        Ok(())
    } else {
        Err(BuilderError::IndexOutOfRange {
            path: path.clone(),
            index,
            len,
        })
    }
}
