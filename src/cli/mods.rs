// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the per-game commands.

use clap::Args;

/// A game picked by identifier, title or alias.
#[derive(Debug, Clone, Default, Args)]
pub struct GameArgs {
    /// Game identifier, title or alias (case-insensitive).
    #[arg(value_name = "GAME")]
    pub game: String,
}

/// Arguments for the `mods` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ModsArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Only show mods whose name matches.
    /// A single character matches name prefixes, longer queries match anywhere.
    #[arg(short = 'q', long = "search", value_name = "QUERY")]
    pub search: Option<String>,

    /// Index of the first row shown.
    #[arg(short = 'f', long = "first", value_name = "INDEX", default_value_t = 0, allow_negative_numbers = true)]
    pub first: i64,

    /// Number of rows shown; defaults to `modlist.page_size`.
    #[arg(short = 'r', long = "rows", value_name = "N")]
    pub rows: Option<usize>,

    /// Only show mods listed in this profile.
    #[arg(short = 'p', long = "profile", value_name = "NAME")]
    pub profile: Option<String>,

    /// Resolve the latest version of each shown mod.
    #[arg(long = "latest")]
    pub latest: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Package to install, as `Owner-Name`.
    #[arg(value_name = "OWNER-NAME")]
    pub full_name: String,
}
