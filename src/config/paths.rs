// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! data_dir/
//!   modlist.toml
//!   persistence.json
//!   Games/
//!     <title>/
//!       ModCache/<Owner-Name-Version>.zip
//!       Profiles/<name>/profinfo.json
//! ```
//!
//! `data_dir` defaults to the platform data directory.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Name of the configuration file looked up in the data and working dirs.
pub const CONFIG_FILE_NAME: &str = "modlist.toml";

/// Data location configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root of everything the tool stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Platform default data directory, if the platform has one.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "modlist").map(|dirs| dirs.data_dir().to_path_buf())
}

impl PathsConfig {
    /// Fills `data_dir` from the platform default when unset, falling back
    /// to `.modlist` in the working directory without a home directory.
    pub fn resolve(&mut self) {
        if self.data_dir.is_none() {
            self.data_dir = Some(default_data_dir().unwrap_or_else(|| PathBuf::from(".modlist")));
        }
    }

    /// The data directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if the paths were never resolved.
    pub fn data_dir(&self) -> Result<&Path> {
        Ok(self
            .data_dir
            .as_deref()
            .ok_or_else(|| ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "data_dir".to_string(),
            })?)
    }

    /// Per-game storage root (`data_dir/Games`).
    ///
    /// # Errors
    ///
    /// See [`Self::data_dir`].
    pub fn games_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("Games"))
    }

    /// Persisted application state (`data_dir/persistence.json`).
    ///
    /// # Errors
    ///
    /// See [`Self::data_dir`].
    pub fn persistence_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("persistence.json"))
    }

    /// Configuration file inside the data directory.
    ///
    /// # Errors
    ///
    /// See [`Self::data_dir`].
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(CONFIG_FILE_NAME))
    }
}
