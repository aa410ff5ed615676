// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem [`ProfileProvider`].
//!
//! ```text
//! <root>/<game title>/Profiles/<profile name>/profinfo.json
//! ```
//!
//! Directories without a readable manifest are skipped.

use anyhow::Context;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ProfileProvider;
use crate::error::Result;
use crate::profile::ProfileManifest;

/// File name of a profile manifest inside its directory.
pub const MANIFEST_NAME: &str = "profinfo.json";

/// Reads and writes profile manifests under a games root directory.
#[derive(Debug, Clone)]
pub struct FsProfileProvider {
    games_root: PathBuf,
}

impl FsProfileProvider {
    #[must_use]
    pub fn new(games_root: impl Into<PathBuf>) -> Self {
        Self {
            games_root: games_root.into(),
        }
    }

    /// Directory holding one subdirectory per profile of `game_title`.
    #[must_use]
    pub fn profiles_dir(&self, game_title: &str) -> PathBuf {
        self.games_root.join(game_title).join("Profiles")
    }

    #[must_use]
    pub fn manifest_path(&self, game_title: &str, name: &str) -> PathBuf {
        self.profiles_dir(game_title).join(name).join(MANIFEST_NAME)
    }
}

async fn read_manifest(path: &Path) -> Option<ProfileManifest> {
    let bytes = tokio::fs::read(path).await.ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable profile manifest");
            None
        }
    }
}

#[async_trait]
impl ProfileProvider for FsProfileProvider {
    async fn profiles(&self, game_title: &str) -> Result<BTreeMap<String, ProfileManifest>> {
        let dir = self.profiles_dir(game_title);
        let mut profiles = BTreeMap::new();

        // No profiles created yet
        if !tokio::fs::try_exists(&dir).await.unwrap_or(false) {
            return Ok(profiles);
        }

        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .with_context(|| format!("failed to list profiles in {}", dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(manifest) = read_manifest(&entry.path().join(MANIFEST_NAME)).await {
                profiles.insert(name, manifest);
            }
        }

        Ok(profiles)
    }

    async fn save_profile(
        &self,
        game_title: &str,
        name: &str,
        manifest: &ProfileManifest,
    ) -> Result<()> {
        let path = self.manifest_path(game_title, name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let data = serde_json::to_vec_pretty(manifest)?;
        tokio::fs::write(&path, data)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::debug!(game = %game_title, profile = %name, "Saved profile manifest");
        Ok(())
    }
}
