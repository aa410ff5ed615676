// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON file [`PersistenceStore`].
//!
//! ```text
//! load(path)  --> missing file = defaults
//! set_*()     --> memory only
//! save()      --> tempfile in same dir --> rename over path
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::PersistenceStore;
use crate::error::{PersistenceError, Result};

/// On-disk layout of the persistence file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub favourite_games: Vec<String>,
}

/// Persistence backed by a single JSON file.
#[derive(Debug)]
pub struct JsonPersistence {
    path: PathBuf,
    state: Mutex<PersistedState>,
}

impl JsonPersistence {
    /// Loads the file at `path`, starting from defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReadFailed` if the file exists but cannot be
    /// read or parsed.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| read_failed(&path, &e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No persistence file, using defaults");
                PersistedState::default()
            }
            Err(e) => return Err(read_failed(&path, &e).into()),
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the in-memory state.
    #[must_use]
    pub fn snapshot(&self) -> PersistedState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, PersistedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn read_failed(path: &Path, err: &dyn std::fmt::Display) -> PersistenceError {
    PersistenceError::ReadFailed {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

fn write_failed(path: &Path, err: &dyn std::fmt::Display) -> PersistenceError {
    PersistenceError::WriteFailed {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Writes `data` to `path` atomically via a sibling temp file.
fn write_atomic(path: &Path, data: &[u8]) -> std::result::Result<(), PersistenceError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| write_failed(path, &e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_failed(path, &e))?;
    tmp.write_all(data).map_err(|e| write_failed(path, &e))?;
    tmp.as_file().sync_all().map_err(|e| write_failed(path, &e))?;
    tmp.persist(path).map_err(|e| write_failed(path, &e.error))?;
    Ok(())
}

#[async_trait]
impl PersistenceStore for JsonPersistence {
    async fn favourite_games(&self) -> Result<Vec<String>> {
        Ok(self.lock().favourite_games.clone())
    }

    async fn set_favourite_games(&self, ids: Vec<String>) -> Result<()> {
        self.lock().favourite_games = ids;
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        let data = serde_json::to_vec_pretty(&*self.lock())?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomic(&path, &data)).await??;
        tracing::debug!(path = %self.path.display(), "Saved persistence");
        Ok(())
    }
}
