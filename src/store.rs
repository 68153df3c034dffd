// src/store.rs
use std::{fs, io, path::{Path, PathBuf}};

use thiserror::Error;
use tracing::{debug, warn};

use crate::data::Snapshot;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What the previous run left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LastState {
    /// Trimmed file content; the change gate compares against this verbatim.
    pub raw: String,
    /// Parsed values, or all `N/A` when the file is missing or malformed.
    pub snapshot: Snapshot,
}

/// Single-line state file holding the last notified snapshot.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: anything unreadable is "no prior state".
    pub fn load(&self) -> LastState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(text) => s!(text.trim()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No state file at {}", self.path.display());
                return LastState::default();
            }
            Err(e) => {
                warn!("Ignoring unreadable state file {}: {e}", self.path.display());
                return LastState::default();
            }
        };

        let snapshot = Snapshot::parse_state(&raw).unwrap_or_else(|| {
            warn!("Malformed state '{raw}' in {}; treating as no prior state", self.path.display());
            Snapshot::default()
        });

        LastState { raw, snapshot }
    }

    /// Overwrite the file with `snapshot`'s state line.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write { path: self.path.clone(), source };

        // Ensure parent directories exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(&self.path, snapshot.state_string()).map_err(write_err)
    }
}
