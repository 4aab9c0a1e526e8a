//! Snapshot Store
//!
//! Persists the full rank sequence to a single binary state file and loads
//! it back on startup. The file is written in rank order, so a loaded
//! sequence is trusted to already satisfy the sort invariant.

use crate::error::{Result, WordRankError};
use crate::ranking::types::WordEntry;
use parking_lot::Mutex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default name of the state file, created in the process working directory.
/// The content is binary-serialized despite the extension.
pub const DEFAULT_STATE_FILENAME: &str = "state.txt";

pub struct SnapshotStore {
    path: PathBuf,
    /// Serializes writers so two concurrent saves cannot interleave and tear
    /// the file.
    file_guard: Mutex<()>,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the full sequence to the state file.
    ///
    /// An empty sequence never clobbers existing on-disk state: calling save
    /// after a reset leaves a prior snapshot file in place unless the file
    /// was removed first.
    pub fn save(&self, entries: &[WordEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let bytes = bincode::serialize(entries)?;

        let _guard = self.file_guard.lock();
        std::fs::write(&self.path, bytes)?;
        tracing::debug!("Persisted {} words to {}", entries.len(), self.path.display());
        Ok(())
    }

    /// Loads the persisted sequence.
    ///
    /// A missing or zero-length file is a valid empty initial state. A file
    /// that exists but fails to deserialize is surfaced as a distinct
    /// corrupt-snapshot error, never silently treated as empty.
    pub fn load(&self) -> Result<Vec<WordEntry>> {
        let _guard = self.file_guard.lock();
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        bincode::deserialize(&bytes).map_err(WordRankError::CorruptSnapshot)
    }

    /// Removes the state file if present. Used by the reset operation.
    pub fn remove(&self) -> Result<()> {
        let _guard = self.file_guard.lock();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
