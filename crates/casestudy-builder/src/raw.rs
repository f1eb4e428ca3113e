//! Raw JSON view
//!
//! Text typed into the raw view is provisional until it parses into a
//! document. Unparseable text keeps the builder on its last good document and
//! records a validation message for the author.

use casestudy_schema::codec;

use crate::builder::DocumentBuilder;
use crate::error::BuilderError;

/// Result of one raw edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEdit {
    /// Text parsed and replaced the builder's document
    Applied,
    /// Text did not parse; the builder is unchanged
    Rejected { message: String },
}

/// Raw JSON editor state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawJsonEditor {
    text: String,
    error: Option<String>,
}

impl RawJsonEditor {
    /// Open the raw view on the builder's current document
    ///
    /// # Errors
    /// Returns error if the document cannot be serialized
    pub fn open(builder: &DocumentBuilder) -> Result<Self, BuilderError> {
        Ok(Self {
            text: builder.to_json()?,
            error: None,
        })
    }

    /// Text currently shown, including unparsed edits
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message shown next to the raw view, if the last edit was rejected
    #[inline]
    #[must_use]
    pub fn validation_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the shown text differs from the applied document
    #[inline]
    #[must_use]
    pub fn is_provisional(&self) -> bool {
        self.error.is_some()
    }

    /// Take new text from the author and apply it if it parses
    pub fn edit(&mut self, text: impl Into<String>, builder: &mut DocumentBuilder) -> RawEdit {
        self.text = text.into();
        match codec::deserialize(&self.text) {
            Ok(document) => {
                builder.replace(document);
                self.error = None;
                RawEdit::Applied
            }
            Err(err) => {
                tracing::warn!(error = %err, "raw JSON edit rejected, keeping last good document");
                let message = err.to_string();
                self.error = Some(message.clone());
                RawEdit::Rejected { message }
            }
        }
    }

    /// Discard provisional text and show the builder's document again
    ///
    /// # Errors
    /// Returns error if the document cannot be serialized
    pub fn revert(&mut self, builder: &DocumentBuilder) -> Result<(), BuilderError> {
        self.text = builder.to_json()?;
        self.error = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casestudy_schema::ensure;
    use serde_json::json;

    #[test]
    fn valid_text_replaces_document() {
        let mut builder = DocumentBuilder::default();
        let mut raw = RawJsonEditor::open(&builder).unwrap();
        let outcome = raw.edit(r#"{"meta": {"title": "Raw", "date": "", "agency": ""}}"#, &mut builder);
        assert_eq!(outcome, RawEdit::Applied);
        assert_eq!(builder.document().meta.title, "Raw");
        assert!(raw.validation_message().is_none());
    }

    #[test]
    fn invalid_text_keeps_last_good_document() {
        let mut builder = DocumentBuilder::default();
        builder.update(["meta", "title"], json!("Good")).unwrap();
        let good = builder.document().clone();

        let mut raw = RawJsonEditor::open(&builder).unwrap();
        let outcome = raw.edit("{\"meta\": {", &mut builder);
        assert!(matches!(outcome, RawEdit::Rejected { .. }));
        assert_eq!(builder.document(), &good);
        assert_eq!(raw.text(), "{\"meta\": {");
        assert!(raw.is_provisional());
        assert!(raw.validation_message().unwrap().contains("invalid JSON"));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let mut builder = DocumentBuilder::default();
        let mut raw = RawJsonEditor::open(&builder).unwrap();
        let outcome = raw.edit(r#"{"features": {"items": "nope"}}"#, &mut builder);
        assert!(matches!(outcome, RawEdit::Rejected { .. }));
        assert_eq!(builder.document(), &ensure(None));
    }

    #[test]
    fn revert_restores_text() {
        let mut builder = DocumentBuilder::default();
        let mut raw = RawJsonEditor::open(&builder).unwrap();
        let original = raw.text().to_string();
        raw.edit("garbage", &mut builder);
        raw.revert(&builder).unwrap();
        assert_eq!(raw.text(), original);
        assert!(!raw.is_provisional());
    }
}
