// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog filters and ordering.

use std::cmp::Reverse;

use crate::game::ModPlatform;
use crate::package::Package;
use crate::profile::Profile;

/// Whether a mod named `name` matches the search `query`.
///
/// The query is trimmed and compared case-insensitively. An empty query
/// matches everything. A single character must start the name, so one
/// keystroke does not match every mod containing that letter. Longer queries
/// match anywhere in the name.
#[must_use]
pub fn matches_search(name: &str, query: &str) -> bool {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return true;
    }

    let single = trimmed.chars().count() == 1;
    let query = trimmed.to_lowercase();
    let name = name.to_lowercase();
    if single {
        name.starts_with(&query)
    } else {
        name.contains(&query)
    }
}

/// Entries whose name matches `query`; all entries if there is no query.
#[must_use]
pub fn filter_by_search(mods: &[Package], query: Option<&str>) -> Vec<Package> {
    match query {
        Some(q) if !q.trim().is_empty() => mods
            .iter()
            .filter(|m| matches_search(&m.name, q))
            .cloned()
            .collect(),
        _ => mods.to_vec(),
    }
}

/// Stable sort, highest rating first.
pub fn sort_by_rating(mods: &mut [Package]) {
    mods.sort_by_key(|m| Reverse(m.rating_score));
}

/// Entries whose latest version is listed in the profile's Thunderstore mods.
///
/// Without a named profile the input is returned unchanged. Entries with no
/// resolved latest version never match.
#[must_use]
pub fn filter_by_profile(mods: &[Package], profile: Option<&Profile>) -> Vec<Package> {
    let Some(profile) = profile.filter(|p| !p.name.is_empty()) else {
        return mods.to_vec();
    };

    mods.iter()
        .filter(|m| {
            m.latest_version_name()
                .is_some_and(|name| profile.manifest.contains(ModPlatform::Thunderstore, name))
        })
        .cloned()
        .collect()
}
