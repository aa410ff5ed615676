// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contracts for the collaborators the engine consumes.
//!
//! ```text
//!   ModRepository     fetch_catalog / fetch_latest_version / install_by_name
//!                     (thunderstore::ThunderstoreClient)
//!   PathProbe         path_exists / is_mod_loader_installed   (fs::FsPathProbe)
//!   PersistenceStore  favourite_games / set_favourite_games / save
//!                     (persistence::JsonPersistence)
//!   ProfileProvider   profiles / save_profile   (profiles::FsProfileProvider)
//! ```
//!
//! Every call is a suspension point; implementations must be `Send + Sync`
//! so handles can be shared behind `Arc`.

pub mod fs;
pub mod persistence;
pub mod profiles;

#[cfg(test)]
pub(crate) mod test_utils;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::package::{Package, PackageVersion};
use crate::profile::ProfileManifest;

pub use fs::FsPathProbe;
pub use persistence::JsonPersistence;
pub use profiles::FsProfileProvider;

/// Source of catalogs and installer of packages.
#[async_trait]
pub trait ModRepository: Send + Sync {
    /// Returns the catalog of a community, in repository order.
    async fn fetch_catalog(&self, game_id: &str) -> Result<Vec<Package>>;

    /// Returns the newest version of `owner`-`name`.
    async fn fetch_latest_version(
        &self,
        game_id: &str,
        owner: &str,
        name: &str,
    ) -> Result<PackageVersion>;

    /// Installs the latest version of `full_name` (`Owner-Name`) and returns it.
    async fn install_by_name(
        &self,
        game_title: &str,
        game_id: &str,
        full_name: &str,
    ) -> Result<PackageVersion>;
}

/// Filesystem queries about game installations.
#[async_trait]
pub trait PathProbe: Send + Sync {
    async fn path_exists(&self, path: &Path, is_dir: bool) -> Result<bool>;

    /// Whether the mod loader is fully present under the game path.
    async fn is_mod_loader_installed(&self, path: &Path) -> Result<bool>;
}

/// Persisted application state.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    async fn favourite_games(&self) -> Result<Vec<String>>;

    /// Replaces the favourites list. Not durable until [`Self::save`].
    async fn set_favourite_games(&self, ids: Vec<String>) -> Result<()>;

    async fn save(&self) -> Result<()>;
}

/// Storage for profile manifests, keyed by game title.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn profiles(&self, game_title: &str) -> Result<BTreeMap<String, ProfileManifest>>;

    async fn save_profile(
        &self,
        game_title: &str,
        name: &str,
        manifest: &ProfileManifest,
    ) -> Result<()>;
}
