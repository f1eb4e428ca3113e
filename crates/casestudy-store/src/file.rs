//! Directory-backed record store
//!
//! One `<id>.json` file per record. Each write goes to its own uniquely
//! named sibling file first and is renamed into place.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::{CaseStudyRecord, RecordId};
use crate::RecordStore;

const EXTENSION: &str = "json";

/// Store keeping each record in its own JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Unique scratch file for one write of record `id`
    ///
    /// Ends in `.tmp`, so [`RecordStore::list`] never reports it.
    fn staging_path(&self, id: &RecordId) -> PathBuf {
        self.dir.join(format!(".{id}.{}.tmp", uuid::Uuid::new_v4()))
    }

    /// File holding record `id`
    #[must_use]
    pub fn record_path(&self, id: &RecordId) -> PathBuf {
        self.dir.join(format!("{id}.{EXTENSION}"))
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn get(&self, id: &RecordId) -> Result<Option<CaseStudyRecord>, StoreError> {
        let path = self.record_path(id);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io_error(path, e)),
        };
        let record: CaseStudyRecord =
            serde_json::from_str(&text).map_err(|e| StoreError::CorruptRecord {
                path: path.clone(),
                message: e.to_string(),
            })?;
        if &record.id != id {
            return Err(StoreError::CorruptRecord {
                path,
                message: format!("file holds record {}", record.id),
            });
        }
        Ok(Some(record))
    }

    async fn put(&self, record: CaseStudyRecord) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io_error(&self.dir, e))?;

        let path = self.record_path(&record.id);
        let text = serde_json::to_string_pretty(&record).map_err(|e| StoreError::CorruptRecord {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let staging = self.staging_path(&record.id);
        let written = match tokio::fs::write(&staging, text).await {
            Ok(()) => tokio::fs::rename(&staging, &path)
                .await
                .map_err(|e| StoreError::io_error(&path, e)),
            Err(e) => Err(StoreError::io_error(&staging, e)),
        };
        if let Err(err) = written {
            if let Err(e) = tokio::fs::remove_file(&staging).await {
                tracing::trace!(path = %staging.display(), error = %e, "no staging file to clean up");
            }
            return Err(err);
        }

        tracing::debug!(id = %record.id, path = %path.display(), "record written");
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StoreError> {
        let path = self.record_path(id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io_error(path, e)),
        }
    }

    async fn list(&self) -> Result<Vec<RecordId>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io_error(&self.dir, e)),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io_error(&self.dir, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match RecordId::new(stem) {
                Ok(id) => ids.push(id),
                Err(_) => tracing::trace!(path = %path.display(), "skipping non-record file"),
            }
        }
        ids.sort();
        Ok(ids)
    }
}
