// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog entry types.
//!
//! ```text
//! Package (catalog entry, immutable once fetched)
//!   name, full_name, owner, rating_score, ...
//!   latest_version: Option<PackageVersion>   (attached lazily)
//!
//! PackageVersion
//!   full_name = Owner-Name-Major.Minor.Patch
//!   dependencies: ["Owner-Name-1.2.3", ...] --> DependencyRef
//! ```
//!
//! Field names follow the Thunderstore v1 API so entries deserialize directly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InstallError;

/// A single mod in a game's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub name: String,
    /// `Owner-Name`, without a version.
    pub full_name: String,
    pub owner: String,
    #[serde(rename = "uuid4")]
    pub uuid: String,
    pub package_url: String,
    pub date_created: String,
    pub date_updated: String,
    pub rating_score: u32,
    pub is_deprecated: bool,
    pub has_nsfw_content: bool,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<PackageVersion>,
}

impl Package {
    /// Creates a minimal package, mostly useful for tests and fixtures.
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>, rating_score: u32) -> Self {
        let owner = owner.into();
        let name = name.into();
        Self {
            full_name: format!("{owner}-{name}"),
            name,
            owner,
            rating_score,
            ..Self::default()
        }
    }

    /// Attaches a resolved latest version.
    #[must_use]
    pub fn with_latest_version(mut self, version: PackageVersion) -> Self {
        self.latest_version = Some(version);
        self
    }

    /// Full name of the latest version (`Owner-Name-1.2.3`), if resolved.
    #[must_use]
    pub fn latest_version_name(&self) -> Option<&str> {
        self.latest_version.as_ref().map(|v| v.full_name.as_str())
    }
}

/// A published version of a package.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageVersion {
    pub name: String,
    /// `Owner-Name-Major.Minor.Patch`.
    pub full_name: String,
    pub description: String,
    pub version_number: String,
    pub dependencies: Vec<String>,
    pub download_url: String,
    pub downloads: u64,
    pub date_created: String,
    pub is_active: bool,
    #[serde(rename = "uuid4")]
    pub uuid: String,
    pub file_size: u64,
}

impl PackageVersion {
    /// Creates a version descriptor for `owner`/`name` at `version_number`.
    #[must_use]
    pub fn new(owner: &str, name: &str, version_number: impl Into<String>) -> Self {
        let version_number = version_number.into();
        Self {
            name: name.to_string(),
            full_name: format!("{owner}-{name}-{version_number}"),
            version_number,
            is_active: true,
            ..Self::default()
        }
    }
}

/// A parsed `Owner-Name-Version` dependency string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    pub owner: String,
    pub name: String,
    pub version: String,
}

impl DependencyRef {
    /// Parses a dependency string.
    ///
    /// Package names never contain `-`, so the version is everything after the
    /// last dash and the owner is everything before the first one.
    ///
    /// # Errors
    ///
    /// Returns `InstallError::MalformedDependency` if any part is missing.
    pub fn parse(raw: &str) -> Result<Self, InstallError> {
        let malformed = || InstallError::MalformedDependency(raw.to_string());

        let (package, version) = raw.rsplit_once('-').ok_or_else(malformed)?;
        let (owner, name) = package.split_once('-').ok_or_else(malformed)?;

        if owner.is_empty() || name.is_empty() || version.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    /// `Owner-Name` without the version.
    #[must_use]
    pub fn package_full_name(&self) -> String {
        format!("{}-{}", self.owner, self.name)
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.owner, self.name, self.version)
    }
}
