//! Error types for the document builder

use casestudy_schema::{CodecError, DocumentPath, PathError};

/// Builder errors
///
/// A failed operation leaves the builder's document untouched.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// Path could not be traversed
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// Edited value no longer fits the document shape
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Written value was not kept by the document, e.g. a misspelled key
    #[error("'{0}' is not a document field")]
    UnknownPath(DocumentPath),

    /// List operation on a value that is not a list
    #[error("'{0}' is not a list")]
    NotAList(DocumentPath),

    /// List index outside the current list
    #[error("index {index} out of range for '{path}' (len {len})")]
    IndexOutOfRange {
        path: DocumentPath,
        index: usize,
        len: usize,
    },

    #[error("invalid config: {0}")]
    Config(String),
}

impl BuilderError {
    /// Whether the failure came from the value rather than the path
    #[inline]
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Codec(CodecError::Shape(_)))
    }
}
