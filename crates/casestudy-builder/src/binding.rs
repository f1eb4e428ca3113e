//! Host form binding
//!
//! [`SerializedField`] subscribes to a builder and keeps the latest document
//! aside. Serialization happens only when the host calls [`SerializedField::flush`],
//! so the host decides how often text is produced (on blur, on save, debounced).

use std::sync::Arc;

use casestudy_schema::{codec, CaseStudyDocument};
use parking_lot::Mutex;

use crate::builder::{DocumentBuilder, SubscriptionId};
use crate::error::BuilderError;

#[derive(Debug, Default)]
struct FieldState {
    pending: Option<CaseStudyDocument>,
    text: Option<String>,
    flushes: u64,
}

/// Text field of the host form holding the serialized document
#[derive(Debug, Clone)]
pub struct SerializedField {
    state: Arc<Mutex<FieldState>>,
    pretty: bool,
    subscription: SubscriptionId,
}

impl SerializedField {
    /// Bind a field to `builder`, seeded with the builder's current document
    ///
    /// # Errors
    /// Returns error if the current document cannot be serialized
    pub fn attach(builder: &mut DocumentBuilder) -> Result<Self, BuilderError> {
        let pretty = builder.config().pretty_json;
        let state = Arc::new(Mutex::new(FieldState {
            pending: None,
            text: Some(codec::serialize(builder.document(), pretty)?),
            flushes: 0,
        }));
        let sink = Arc::clone(&state);
        let subscription = builder.subscribe(move |document| {
            sink.lock().pending = Some(document.clone());
        });
        Ok(Self {
            state,
            pretty,
            subscription,
        })
    }

    /// Stop following the builder
    pub fn detach(&self, builder: &mut DocumentBuilder) -> bool {
        builder.unsubscribe(self.subscription)
    }

    /// Changes arrived since the last flush
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Serialize the latest document if it changed; returns the field text
    ///
    /// # Errors
    /// Returns error if serialization fails; the pending document is kept
    pub fn flush(&self) -> Result<Option<String>, BuilderError> {
        let mut state = self.state.lock();
        if let Some(document) = state.pending.as_ref() {
            let text = codec::serialize(document, self.pretty)?;
            state.text = Some(text);
            state.pending = None;
            state.flushes += 1;
        }
        Ok(state.text.clone())
    }

    /// Last flushed text, without serializing pending changes
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.state.lock().text.clone()
    }

    /// Number of flushes that produced new text
    #[must_use]
    pub fn flush_count(&self) -> u64 {
        self.state.lock().flushes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuilderConfig;
    use serde_json::json;

    #[test]
    fn field_starts_with_initial_document() {
        let mut builder = DocumentBuilder::default();
        let field = SerializedField::attach(&mut builder).unwrap();
        assert!(!field.is_dirty());
        let text = field.text().unwrap();
        assert_eq!(codec::deserialize(&text).unwrap(), *builder.document());
    }

    #[test]
    fn many_updates_one_serialization() {
        let mut builder = DocumentBuilder::new(None, BuilderConfig::new().with_pretty_json(false));
        let field = SerializedField::attach(&mut builder).unwrap();
        for title in ["a", "ab", "abc"] {
            builder.update(["meta", "title"], json!(title)).unwrap();
        }
        assert!(field.is_dirty());
        assert_eq!(field.flush_count(), 0);

        let text = field.flush().unwrap().unwrap();
        assert_eq!(field.flush_count(), 1);
        assert!(!text.contains('\n'));
        assert_eq!(codec::deserialize(&text).unwrap().meta.title, "abc");

        field.flush().unwrap();
        assert_eq!(field.flush_count(), 1);
    }

    #[test]
    fn detached_field_ignores_updates() {
        let mut builder = DocumentBuilder::default();
        let field = SerializedField::attach(&mut builder).unwrap();
        assert!(field.detach(&mut builder));
        builder.update(["meta", "title"], json!("x")).unwrap();
        assert!(!field.is_dirty());
    }
}
