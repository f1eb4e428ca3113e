//! Case Study Store
//!
//! Host records (projects and articles) that carry a case-study document as
//! serialized text, behind an async [`RecordStore`] trait.
//!
//! Two read paths exist for the document text:
//! - [`load_document`] for authoring: corrupted text is an error the author
//!   has to see.
//! - [`load_for_display`] for viewers: corrupted text is logged and treated
//!   as no document.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod file;
mod memory;
mod record;

use async_trait::async_trait;
use casestudy_schema::{codec, CaseStudyDocument};

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::{CaseStudyRecord, RecordId, RecordKind};

/// Persistence for host records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a record, `None` if it does not exist
    async fn get(&self, id: &RecordId) -> Result<Option<CaseStudyRecord>, StoreError>;

    /// Insert or replace a record
    async fn put(&self, record: CaseStudyRecord) -> Result<(), StoreError>;

    /// Delete a record; returns whether it existed
    async fn delete(&self, id: &RecordId) -> Result<bool, StoreError>;

    /// Ids of all records, sorted
    async fn list(&self) -> Result<Vec<RecordId>, StoreError>;
}

/// Store `document` as the record's `caseStudyData`, creating the record if needed
///
/// `None` clears the field.
///
/// # Errors
/// Returns error if the document cannot be encoded or the store fails
pub async fn save_document(
    store: &dyn RecordStore,
    id: &RecordId,
    kind: RecordKind,
    document: Option<&CaseStudyDocument>,
) -> Result<(), StoreError> {
    let data = codec::encode_stored(document).map_err(|source| StoreError::Document {
        id: id.clone(),
        source,
    })?;
    let mut record = store
        .get(id)
        .await?
        .unwrap_or_else(|| CaseStudyRecord::new(id.clone(), kind));
    record.case_study_data = data;
    store.put(record).await
}

/// Document of record `id` for editing
///
/// # Errors
/// - `StoreError::NotFound` if the record does not exist
/// - `StoreError::Document` if the stored text is not a document
pub async fn load_document(
    store: &dyn RecordStore,
    id: &RecordId,
) -> Result<Option<CaseStudyDocument>, StoreError> {
    let record = store
        .get(id)
        .await?
        .ok_or_else(|| StoreError::NotFound(id.clone()))?;
    codec::decode_stored(record.case_study_data.as_deref()).map_err(|source| {
        StoreError::Document {
            id: id.clone(),
            source,
        }
    })
}

/// Document of record `id` for display; missing records and corrupted text give `None`
///
/// # Errors
/// Returns error only if the store itself fails
pub async fn load_for_display(
    store: &dyn RecordStore,
    id: &RecordId,
) -> Result<Option<CaseStudyDocument>, StoreError> {
    let Some(record) = store.get(id).await? else {
        tracing::debug!(%id, "no record to display");
        return Ok(None);
    };
    Ok(codec::decode_for_display(record.case_study_data.as_deref()))
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
