// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Thunderstore v1 client.
//!
//! ```text
//! fetch_catalog(community)
//!   GET {base}/c/{community}/api/v1/package/ --> community cache
//!   drop excluded tool packages --> Package (latest version attached)
//!
//! install_by_name(title, community, Owner-Name)
//!   community cache (fetched if empty) --> package --> versions[0]
//!   worklist: version --> download <games>/<title>/ModCache/<full>.zip
//!             dependencies "Owner-Name-1.2.3" --> exact version --> worklist
//!   archives already on disk are skipped, each version visited once
//! ```

pub mod types;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::backend::ModRepository;
use crate::error::{InstallError, ModlistResult, Result};
use crate::net::{self, Downloader, ProgressDisplay};
use crate::package::{DependencyRef, Package, PackageVersion};

pub use types::{ApiPackage, InstallReport};

/// Public Thunderstore instance.
pub const DEFAULT_BASE_URL: &str = "https://thunderstore.io";

/// Mod managers and tools published as packages; never listed as mods.
pub const DEFAULT_EXCLUDED_PACKAGES: &[&str] = &[
    "Foldex-r2mod_cli",
    "ebkr-r2modman",
    "ebkr-r2modman_dsp",
    "ebkr-BT2TS",
    "ethanbrews-RiskOfRainModManager",
    "ethanbrews-Forecast_Mod_Manager",
    "scottbot95-RoR2ModManager",
    "HoodedDeath-RiskOfDeathModManager",
    "MythicManiac-MythicModManager",
    "Kesomannen-GaleModManager",
    "Elaviers-GCManager",
    "MADH95Mods-JSONRenameUtility",
    "Higgs1-Lighthouse",
];

type CommunityPackages = Arc<[ApiPackage]>;

/// [`ModRepository`] backed by the Thunderstore v1 API.
#[derive(Debug)]
pub struct ThunderstoreClient {
    client: Client,
    base_url: String,
    excluded: Vec<String>,
    games_dir: PathBuf,
    progress: ProgressDisplay,
    communities: Mutex<HashMap<String, CommunityPackages>>,
}

impl ThunderstoreClient {
    /// Client for `base_url` storing archives under `games_dir`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, games_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: net::global_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            excluded: DEFAULT_EXCLUDED_PACKAGES
                .iter()
                .map(ToString::to_string)
                .collect(),
            games_dir: games_dir.into(),
            progress: ProgressDisplay::Silent,
            communities: Mutex::new(HashMap::new()),
        }
    }

    /// Replaces the excluded package list (`Owner-Name`, case-insensitive).
    #[must_use]
    pub fn with_excluded(mut self, excluded: Vec<String>) -> Self {
        self.excluded = excluded;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = net::build_client(Some(timeout));
        self
    }

    /// Progress display used for archive downloads.
    #[must_use]
    pub const fn with_progress(mut self, progress: ProgressDisplay) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Where archives of `game_title` are stored.
    #[must_use]
    pub fn mod_cache_dir(&self, game_title: &str) -> PathBuf {
        self.games_dir.join(game_title).join("ModCache")
    }

    #[must_use]
    pub fn is_excluded(&self, full_name: &str) -> bool {
        self.excluded
            .iter()
            .any(|e| e.eq_ignore_ascii_case(full_name))
    }

    fn community_url(&self, community: &str) -> String {
        format!("{}/c/{community}/api/v1/package/", self.base_url)
    }

    fn cached(&self, community: &str) -> Option<CommunityPackages> {
        self.communities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(community)
            .cloned()
    }

    /// Packages of `community`, from the in-memory cache unless `skip_cache`.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request or decoding fails.
    pub async fn packages(
        &self,
        community: &str,
        skip_cache: bool,
    ) -> ModlistResult<CommunityPackages> {
        if !skip_cache && let Some(packages) = self.cached(community) {
            return Ok(packages);
        }

        let url = self.community_url(community);
        tracing::debug!(community, url = %url, "Fetching community packages");
        let packages: Vec<ApiPackage> = net::fetch_json(&self.client, &url).await?;
        let packages: CommunityPackages = packages.into();

        self.communities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(community.to_string(), packages.clone());
        Ok(packages)
    }

    /// Drops the cached package list of `community`.
    pub fn remove_from_cache(&self, community: &str) {
        self.communities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(community);
    }

    pub fn clear_cache(&self) {
        self.communities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Downloads `version` into `dir`. Returns `false` if the archive exists.
    async fn download_version(&self, version: &PackageVersion, dir: &Path) -> Result<bool> {
        let archive = dir.join(format!("{}.zip", version.full_name));
        if tokio::fs::try_exists(&archive).await.unwrap_or(false) {
            tracing::debug!(package = %version.full_name, "Archive already cached");
            return Ok(false);
        }

        Downloader::new()
            .client(self.client.clone())
            .url(&version.download_url)
            .file(&archive)
            .progress(self.progress)
            .download()
            .await?;
        Ok(true)
    }

    /// Downloads `root` and every dependency reachable from it.
    ///
    /// Failures never stop the walk; they are collected in the report.
    pub async fn install_with_dependencies(
        &self,
        root: &PackageVersion,
        packages: &[ApiPackage],
        dir: &Path,
    ) -> InstallReport {
        let mut report = InstallReport::default();
        let mut visited = HashSet::new();
        let mut pending = vec![root.clone()];

        while let Some(version) = pending.pop() {
            let is_root = visited.is_empty();
            if !visited.insert(version.full_name.to_lowercase()) {
                continue;
            }

            match self.download_version(&version, dir).await {
                Ok(true) => report.downloaded += 1,
                Ok(false) => report.skipped += 1,
                Err(e) => {
                    let e = e.context(format!("failed to download {}", version.full_name));
                    if is_root {
                        report.root_error = Some(e);
                    } else {
                        report.errors.push(e);
                    }
                }
            }

            for dependency in &version.dependencies {
                match resolve_dependency(packages, dependency) {
                    Ok(dep) => pending.push(dep.clone()),
                    Err(e) => report.errors.push(e.into()),
                }
            }
        }

        report
    }
}

fn find_package<'a>(packages: &'a [ApiPackage], full_name: &str) -> Option<&'a ApiPackage> {
    packages
        .iter()
        .find(|p| p.full_name.eq_ignore_ascii_case(full_name))
}

fn resolve_dependency<'a>(
    packages: &'a [ApiPackage],
    dependency: &str,
) -> std::result::Result<&'a PackageVersion, InstallError> {
    let dep = DependencyRef::parse(dependency)?;
    packages
        .iter()
        .find(|p| p.is(&dep.owner, &dep.name))
        .and_then(|p| p.version(&dep.version))
        .ok_or_else(|| InstallError::DependencyNotFound(dependency.to_string()))
}

#[async_trait]
impl ModRepository for ThunderstoreClient {
    /// Always refetches; the registry owns catalog caching.
    async fn fetch_catalog(&self, game_id: &str) -> Result<Vec<Package>> {
        let packages = self.packages(game_id, true).await?;
        Ok(packages
            .iter()
            .filter(|p| !self.is_excluded(&p.full_name))
            .map(ApiPackage::to_catalog_entry)
            .collect())
    }

    async fn fetch_latest_version(
        &self,
        game_id: &str,
        owner: &str,
        name: &str,
    ) -> Result<PackageVersion> {
        let packages = self.packages(game_id, false).await?;
        let package = packages.iter().find(|p| p.is(owner, name)).ok_or_else(|| {
            InstallError::PackageNotFound {
                community: game_id.to_string(),
                full_name: format!("{owner}-{name}"),
            }
        })?;

        Ok(package
            .latest_version()
            .cloned()
            .ok_or_else(|| InstallError::NoVersions(package.full_name.clone()))?)
    }

    async fn install_by_name(
        &self,
        game_title: &str,
        game_id: &str,
        full_name: &str,
    ) -> Result<PackageVersion> {
        let packages = self.packages(game_id, false).await?;
        let package =
            find_package(&packages, full_name).ok_or_else(|| InstallError::PackageNotFound {
                community: game_id.to_string(),
                full_name: full_name.to_string(),
            })?;
        let latest = package
            .latest_version()
            .cloned()
            .ok_or_else(|| InstallError::NoVersions(package.full_name.clone()))?;

        let dir = self.mod_cache_dir(game_title);
        let report = self.install_with_dependencies(&latest, &packages, &dir).await;

        tracing::info!(
            game = %game_id,
            package = %latest.full_name,
            downloaded = report.downloaded,
            skipped = report.skipped,
            failed = report.errors.len(),
            "Installed with dependencies"
        );

        for e in &report.errors {
            tracing::warn!(game = %game_id, package = %latest.full_name, error = %e, "Dependency not installed");
        }
        if let Some(e) = report.root_error {
            return Err(e);
        }

        Ok(latest)
    }
}
