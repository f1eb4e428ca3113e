//! Store errors

use std::path::PathBuf;

use casestudy_schema::CodecError;

use crate::record::RecordId;

/// Errors from record stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record id cannot name a record file
    #[error("invalid record id: '{0}'")]
    InvalidId(String),

    /// No record with this id
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Record file could not be read or written
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record file is not a valid record
    #[error("corrupt record file {path}: {message}")]
    CorruptRecord { path: PathBuf, message: String },

    /// Record's case study data does not decode
    #[error("case study data of {id}: {source}")]
    Document {
        id: RecordId,
        #[source]
        source: CodecError,
    },
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
