// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem-backed [`PathProbe`].

use anyhow::Context;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;

use super::PathProbe;
use crate::error::Result;

/// Files that make up a working BepInEx install, relative to the game root.
pub const BEPINEX_REQUIRED: &[&str] = &[
    "BepInEx",
    "BepInEx/core",
    "BepInEx/core/BepInEx.dll",
    "BepInEx/core/BepInEx.Preloader.dll",
];

/// Probes the local filesystem with `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathProbe;

impl FsPathProbe {
    /// Returns the required BepInEx entries missing under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be read for a reason other than
    /// the entry not existing.
    pub async fn missing_bepinex_files(root: &Path) -> Result<Vec<&'static str>> {
        let mut missing = Vec::new();
        for entry in BEPINEX_REQUIRED {
            if !exists(&root.join(entry), None).await? {
                missing.push(*entry);
            }
        }
        Ok(missing)
    }
}

async fn exists(path: &Path, is_dir: Option<bool>) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(is_dir.is_none_or(|want_dir| meta.is_dir() == want_dir)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to stat {}", path.display())),
    }
}

#[async_trait]
impl PathProbe for FsPathProbe {
    async fn path_exists(&self, path: &Path, is_dir: bool) -> Result<bool> {
        exists(path, Some(is_dir)).await
    }

    async fn is_mod_loader_installed(&self, path: &Path) -> Result<bool> {
        let missing = Self::missing_bepinex_files(path).await?;
        if !missing.is_empty() {
            tracing::debug!(path = %path.display(), ?missing, "BepInEx incomplete");
        }
        Ok(missing.is_empty())
    }
}
