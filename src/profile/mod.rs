// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod profiles for the active game.
//!
//! ```text
//! ProfileProvider::profiles(title) --> { name: ProfileManifest }
//!                |
//!                v
//! ProfileStore { profiles, selected }
//!   set_selected(p) resolves to stored entry with p.name, else p
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::backend::ProfileProvider;
use crate::error::ProfileError;
use crate::game::ModPlatform;

/// Mods included in a profile, per platform, by version full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileManifest {
    #[serde(rename = "Mods", default)]
    pub mods: BTreeMap<ModPlatform, Vec<String>>,
}

impl Default for ProfileManifest {
    fn default() -> Self {
        Self {
            mods: BTreeMap::from([
                (ModPlatform::NexusMods, Vec::new()),
                (ModPlatform::Thunderstore, Vec::new()),
            ]),
        }
    }
}

impl ProfileManifest {
    /// Mods listed for `platform`, empty if the platform has no entry.
    #[must_use]
    pub fn mods(&self, platform: ModPlatform) -> &[String] {
        self.mods.get(&platform).map_or(&[], Vec::as_slice)
    }

    /// Whether `full_name` is listed for `platform` (case-insensitive).
    #[must_use]
    pub fn contains(&self, platform: ModPlatform, full_name: &str) -> bool {
        let wanted = full_name.to_lowercase();
        self.mods(platform)
            .iter()
            .any(|m| m.to_lowercase() == wanted)
    }

    /// Adds a mod to the platform list.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::ModAlreadyPresent` if it is already listed.
    pub fn add_mod(&mut self, platform: ModPlatform, full_name: &str) -> Result<(), ProfileError> {
        if self.contains(platform, full_name) {
            return Err(ProfileError::ModAlreadyPresent {
                platform: platform.to_string(),
                full_name: full_name.to_string(),
            });
        }
        self.mods
            .entry(platform)
            .or_default()
            .push(full_name.to_string());
        Ok(())
    }

    /// Removes every case-insensitive match and returns how many were removed.
    pub fn remove_mod(&mut self, platform: ModPlatform, full_name: &str) -> usize {
        let Some(list) = self.mods.get_mut(&platform) else {
            return 0;
        };
        let wanted = full_name.to_lowercase();
        let before = list.len();
        list.retain(|m| m.to_lowercase() != wanted);
        before - list.len()
    }
}

/// A named profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub manifest: ProfileManifest,
}

impl Profile {
    #[must_use]
    pub fn new(name: impl Into<String>, manifest: ProfileManifest) -> Self {
        Self {
            name: name.into(),
            manifest,
        }
    }
}

/// Profiles of the active game plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    selected: Option<Profile>,
}

impl ProfileStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            profiles: Vec::new(),
            selected: None,
        }
    }

    /// Replaces the stored profiles with those the provider has for `game_title`.
    ///
    /// A provider failure is logged and leaves the store empty. The selection
    /// is cleared either way.
    pub async fn load(&mut self, provider: &dyn ProfileProvider, game_title: &str) -> usize {
        self.selected = None;
        self.profiles = match provider.profiles(game_title).await {
            Ok(map) => map
                .into_iter()
                .map(|(name, manifest)| Profile::new(name, manifest))
                .collect(),
            Err(e) => {
                tracing::error!(game = %game_title, error = %e, "Failed to load profiles");
                Vec::new()
            }
        };
        self.profiles.len()
    }

    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    #[must_use]
    pub fn profile_by_name(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Selects the stored profile named like `profile`, or `profile` itself.
    pub fn set_selected(&mut self, profile: Profile) -> &Profile {
        let resolved = self.profile_by_name(&profile.name).cloned().unwrap_or(profile);
        self.selected.insert(resolved)
    }

    /// Selects a stored profile by name.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotFound` if no stored profile has that name.
    pub fn select_by_name(&mut self, game: &str, name: &str) -> Result<&Profile, ProfileError> {
        let profile = self
            .profile_by_name(name)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound {
                game: game.to_string(),
                name: name.to_string(),
            })?;
        Ok(self.selected.insert(profile))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Profile> {
        self.selected.as_ref()
    }
}
