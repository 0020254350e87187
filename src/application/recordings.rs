//! Recording store use case
//!
//! Mirrors the contents of one directory as a list of recordings,
//! newest first, and deletes recordings by list index.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::error::StoreError;
use crate::domain::recording::{sort_newest_first, Recording};

/// Recording store over a single flat directory
#[derive(Debug)]
pub struct RecordingStore {
    directory: PathBuf,
    recordings: Vec<Recording>,
}

impl RecordingStore {
    /// Create a store for `directory`. Nothing is read until [`load`](Self::load).
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            recordings: Vec::new(),
        }
    }

    /// Directory this store enumerates
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Snapshot of the list produced by the last successful load
    pub fn recordings(&self) -> &[Recording] {
        &self.recordings
    }

    /// Recording at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Recording> {
        self.recordings.get(index)
    }

    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }

    /// Re-scan the directory and replace the held list.
    ///
    /// The new list is built completely before it replaces the old one, so on
    /// error the previous list is still in place.
    pub async fn load(&mut self) -> Result<&[Recording], StoreError> {
        match scan_directory(&self.directory).await {
            Ok(recordings) => {
                log::debug!(
                    "Loaded {} recordings from {}",
                    recordings.len(),
                    self.directory.display()
                );
                self.recordings = recordings;
                Ok(&self.recordings)
            }
            Err(e) => {
                log::error!("{}", e);
                Err(e)
            }
        }
    }

    /// Delete the recording at `index` from disk and from the list.
    ///
    /// The list is not re-scanned, so indices below `index` stay valid for
    /// the caller. On failure neither the file nor the list changes.
    pub async fn delete(&mut self, index: usize) -> Result<Recording, StoreError> {
        let Some(recording) = self.recordings.get(index) else {
            let err = StoreError::IndexOutOfRange {
                index,
                len: self.recordings.len(),
            };
            log::error!("{}", err);
            return Err(err);
        };

        if let Err(e) = fs::remove_file(recording.location()).await {
            let err = StoreError::Deletion {
                path: recording.location().to_path_buf(),
                message: e.to_string(),
            };
            log::error!("{}", err);
            return Err(err);
        }

        let removed = self.recordings.remove(index);
        log::debug!("Deleted {}", removed.location().display());
        Ok(removed)
    }
}

/// List the directory non-recursively, newest first
async fn scan_directory(directory: &Path) -> Result<Vec<Recording>, StoreError> {
    let enumeration_error = |e: std::io::Error| StoreError::Enumeration {
        path: directory.to_path_buf(),
        message: e.to_string(),
    };

    let mut entries = fs::read_dir(directory).await.map_err(enumeration_error)?;
    let mut recordings = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(enumeration_error)? {
        if let Some(recording) = Recording::from_location(entry.path()) {
            recordings.push(recording);
        }
    }

    sort_newest_first(&mut recordings);
    Ok(recordings)
}
