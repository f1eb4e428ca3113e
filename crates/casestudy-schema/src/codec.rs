//! JSON codec for stored documents
//!
//! Documents travel as the text value of a record's `caseStudyData` field.
//! Absent, empty or whitespace-only text means "no document".

use serde_json::Value;

use crate::document::CaseStudyDocument;

/// Codec errors
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Text is not JSON at all
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },

    /// JSON does not fit the document shape
    #[error("document shape mismatch: {0}")]
    Shape(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl CodecError {
    fn invalid_json(err: &serde_json::Error) -> Self {
        Self::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Serialize a document to JSON text
///
/// # Errors
/// Returns error if serialization fails (not expected for this model)
pub fn serialize(document: &CaseStudyDocument, pretty: bool) -> Result<String, CodecError> {
    let text = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    text.map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Parse JSON text into a document
///
/// # Errors
/// [`CodecError::InvalidJson`] for unparseable text, [`CodecError::Shape`]
/// when the JSON has the wrong types for the document fields
pub fn deserialize(text: &str) -> Result<CaseStudyDocument, CodecError> {
    let value: Value = serde_json::from_str(text).map_err(|e| CodecError::invalid_json(&e))?;
    from_value(value)
}

/// Convert a JSON value into a document
///
/// # Errors
/// [`CodecError::Shape`] when the value does not fit the document shape
pub fn from_value(value: Value) -> Result<CaseStudyDocument, CodecError> {
    if !value.is_object() {
        return Err(CodecError::Shape(format!(
            "expected object at document root, found {}",
            kind_of(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| CodecError::Shape(e.to_string()))
}

/// Convert a document into a JSON value
///
/// # Errors
/// Returns error if serialization fails (not expected for this model)
pub fn to_value(document: &CaseStudyDocument) -> Result<Value, CodecError> {
    serde_json::to_value(document).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Decode the stored field value
///
/// # Errors
/// Propagates [`deserialize`] errors for non-empty text
pub fn decode_stored(text: Option<&str>) -> Result<Option<CaseStudyDocument>, CodecError> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => deserialize(text).map(Some),
    }
}

/// Decode the stored field value for display
///
/// Corrupted text is logged and treated as no document.
#[must_use]
pub fn decode_for_display(text: Option<&str>) -> Option<CaseStudyDocument> {
    decode_stored(text).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "stored case study is unreadable, rendering nothing");
        None
    })
}

/// Encode a document for the stored field
///
/// # Errors
/// Returns error if serialization fails
pub fn encode_stored(document: Option<&CaseStudyDocument>) -> Result<Option<String>, CodecError> {
    document.map(|d| serialize(d, false)).transpose()
}

/// JSON Schema describing the stored format
#[must_use]
pub fn json_schema() -> Value {
    let schema = schemars::schema_for!(CaseStudyDocument);
    serde_json::to_value(schema).unwrap_or(Value::Null)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
