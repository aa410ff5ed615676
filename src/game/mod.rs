// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Game metadata and the per-game catalog registry.
//!
//! ```text
//! GameDefinition (config / built-in list)
//!        |  From
//!        v
//! Game { identifier, title, platform, path, flags, mod_cache }
//!        |
//!        v
//! GameRegistry  identifier --> Game   (shared handle)
//! ```

pub mod registry;

#[cfg(test)]
mod tests;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::package::Package;

pub use registry::GameRegistry;

/// A cached catalog, shared between the registry and readers without copying.
pub type Catalog = Arc<[Package]>;

/// Mod repository platform a game is hosted on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ModPlatform {
    #[default]
    #[serde(rename = "THUNDERSTORE")]
    Thunderstore,
    #[serde(rename = "NEXUS_MODS")]
    NexusMods,
}

impl ModPlatform {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thunderstore => "THUNDERSTORE",
            Self::NexusMods => "NEXUS_MODS",
        }
    }
}

impl fmt::Display for ModPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Derived state, recomputed when the registry is initialized.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GameFlags: u8 {
        /// An install path is configured and exists.
        const INSTALLED = 1 << 0;
        /// The identifier is in the persisted favourites list.
        const FAVOURITED = 1 << 1;
        /// The mod loader (BepInEx) is present in the install path.
        const BEPINEX_SETUP = 1 << 2;
    }
}

/// Static description of a game, as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameDefinition {
    /// Unique short name, the Thunderstore community slug.
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub platform: ModPlatform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_id: Option<u32>,
}

impl GameDefinition {
    fn builtin(identifier: &str, title: &str, aliases: &[&str], steam_id: u32) -> Self {
        Self {
            identifier: identifier.to_string(),
            title: title.to_string(),
            platform: ModPlatform::Thunderstore,
            path: None,
            aliases: aliases.iter().map(ToString::to_string).collect(),
            steam_id: Some(steam_id),
        }
    }
}

/// Games known without any configuration.
#[must_use]
pub fn builtin_games() -> Vec<GameDefinition> {
    vec![
        GameDefinition::builtin(
            "lethal-company",
            "Lethal Company",
            &["LC", "LethalCompany"],
            1_966_720,
        ),
        GameDefinition::builtin("riskofrain2", "Risk of Rain 2", &["ror2"], 248_820),
        GameDefinition::builtin(
            "content-warning",
            "Content Warning",
            &["CW", "ContentWarning"],
            2_881_650,
        ),
        GameDefinition::builtin("palworld", "Palworld", &["Pal"], 1_623_730),
        GameDefinition::builtin("valheim", "Valheim", &[], 892_970),
        GameDefinition::builtin("subnautica", "Subnautica", &[], 264_710),
    ]
}

/// A game entry with its derived flags and lazily populated catalog.
#[derive(Debug, Clone)]
pub struct Game {
    pub identifier: String,
    pub title: String,
    pub platform: ModPlatform,
    pub path: Option<PathBuf>,
    pub aliases: Vec<String>,
    pub steam_id: Option<u32>,
    pub flags: GameFlags,
    pub mod_cache: Option<Catalog>,
}

impl Game {
    /// Creates a Thunderstore game without a path.
    #[must_use]
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            platform: ModPlatform::Thunderstore,
            path: None,
            aliases: Vec::new(),
            steam_id: None,
            flags: GameFlags::empty(),
            mod_cache: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn with_platform(mut self, platform: ModPlatform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub const fn installed(&self) -> bool {
        self.flags.contains(GameFlags::INSTALLED)
    }

    #[must_use]
    pub const fn favourited(&self) -> bool {
        self.flags.contains(GameFlags::FAVOURITED)
    }

    #[must_use]
    pub const fn bepinex_setup(&self) -> bool {
        self.flags.contains(GameFlags::BEPINEX_SETUP)
    }

    /// Whether `name` is this game's identifier, title or one of its aliases.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.identifier.eq_ignore_ascii_case(name)
            || self.title.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

impl From<GameDefinition> for Game {
    fn from(def: GameDefinition) -> Self {
        Self {
            identifier: def.identifier,
            title: def.title,
            platform: def.platform,
            path: def.path,
            aliases: def.aliases,
            steam_id: def.steam_id,
            flags: GameFlags::empty(),
            mod_cache: None,
        }
    }
}
