//! File-backed storage for the last successfully fetched inventory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::inventory::Inventory;

/// Result of reading the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorState {
    /// No usable snapshot: the file is missing, unreadable, or not valid JSON.
    NoPrior,
    Prior(Inventory),
}

/// Persists one [`Inventory`] as a pretty-printed JSON object.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the last saved snapshot.
    ///
    /// Never fails: any read or parse problem degrades to
    /// [`PriorState::NoPrior`] so the run proceeds as a first collection.
    #[must_use]
    pub fn load(&self) -> PriorState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no previous snapshot found");
                return PriorState::NoPrior;
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not read previous snapshot, treating as first run"
                );
                return PriorState::NoPrior;
            }
        };

        match serde_json::from_str::<Inventory>(&content) {
            Ok(inventory) => PriorState::Prior(inventory),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "previous snapshot is corrupt, treating as first run"
                );
                PriorState::NoPrior
            }
        }
    }

    /// Writes `inventory` as the new snapshot.
    ///
    /// The JSON is written to a sibling temp file first and renamed over the
    /// target, so readers never observe a partially written snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if encoding fails or
    /// [`StoreError::Io`] if the file cannot be written.
    pub fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(inventory)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = inventory.len(),
            "snapshot saved"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
