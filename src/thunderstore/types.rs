// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Thunderstore v1 wire types.

use serde::Deserialize;

use crate::package::{Package, PackageVersion};

/// A package as returned by `/c/{community}/api/v1/package/`.
///
/// `versions` is ordered newest first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiPackage {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub package_url: String,
    pub donation_link: Option<String>,
    pub date_created: String,
    pub date_updated: String,
    pub uuid4: String,
    pub rating_score: u32,
    pub is_pinned: bool,
    pub is_deprecated: bool,
    pub has_nsfw_content: bool,
    pub categories: Vec<String>,
    pub versions: Vec<PackageVersion>,
}

impl ApiPackage {
    #[must_use]
    pub fn latest_version(&self) -> Option<&PackageVersion> {
        self.versions.first()
    }

    #[must_use]
    pub fn version(&self, version_number: &str) -> Option<&PackageVersion> {
        self.versions
            .iter()
            .find(|v| v.version_number == version_number)
    }

    /// Whether this is `owner`-`name`, ignoring case.
    #[must_use]
    pub fn is(&self, owner: &str, name: &str) -> bool {
        self.owner.eq_ignore_ascii_case(owner) && self.name.eq_ignore_ascii_case(name)
    }

    /// Catalog entry without the version history, latest version attached.
    #[must_use]
    pub fn to_catalog_entry(&self) -> Package {
        Package {
            name: self.name.clone(),
            full_name: self.full_name.clone(),
            owner: self.owner.clone(),
            uuid: self.uuid4.clone(),
            package_url: self.package_url.clone(),
            date_created: self.date_created.clone(),
            date_updated: self.date_updated.clone(),
            rating_score: self.rating_score,
            is_deprecated: self.is_deprecated,
            has_nsfw_content: self.has_nsfw_content,
            categories: self.categories.clone(),
            latest_version: self.latest_version().cloned(),
        }
    }
}

/// What an install with dependencies did.
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Archives fetched from the repository.
    pub downloaded: usize,
    /// Archives already present in the mod cache.
    pub skipped: usize,
    /// Why the requested version itself could not be downloaded.
    pub root_error: Option<anyhow::Error>,
    /// Dependency failures.
    pub errors: Vec<anyhow::Error>,
}
