//! Single-slot draft persistence.
//!
//! One named slot holds the serialized profile as JSON text. Every save overwrites
//! the slot; with several editors (tabs, processes) the last save wins and nothing
//! coordinates them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

/// Name of the one draft slot.
pub const DRAFT_SLOT: &str = "resume-builder-draft";

#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("Draft storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize draft: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw text storage for the draft slot. Parsing is the controller's job so a
/// corrupt slot can be told apart from an unreadable one.
pub trait DraftStore: Send + Sync {
    /// Returns `None` when nothing has been saved.
    fn load(&self) -> Result<Option<String>, DraftStoreError>;
    fn save(&self, contents: &str) -> Result<(), DraftStoreError>;
    fn clear(&self) -> Result<(), DraftStoreError>;
}

/// Keeps the slot as `<dir>/resume-builder-draft.json`.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{DRAFT_SLOT}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Result<Option<String>, DraftStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, contents: &str) -> Result<(), DraftStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), DraftStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process slot, for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    slot: Mutex<Option<String>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(contents.into())),
        }
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<String>, DraftStoreError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, contents: &str) -> Result<(), DraftStoreError> {
        *self.slot.lock() = Some(contents.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), DraftStoreError> {
        *self.slot.lock() = None;
        Ok(())
    }
}
