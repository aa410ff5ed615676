// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modlist-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modlist [global options] <command>
//! version
//! options
//! games
//! mods <game> [--search Q] [--first N] [--rows N] [--profile P]
//! install <game> <Owner-Name>
//! favourite <game>
//! profiles <game>
//! ```

pub mod global;
pub mod mods;


use crate::cli::global::GlobalOptions;
use crate::cli::mods::{GameArgs, InstallArgs, ModsArgs};
use clap::{Parser, Subcommand};

/// Thunderstore mod list engine.
#[derive(Debug, Parser)]
#[command(
    name = "modlist",
    author,
    version,
    about = "Thunderstore mod list engine",
    long_about = "modlist-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Browses, searches and installs Thunderstore mods per game.\n\n\
                  `modlist games` lists known games. `modlist mods <game>`\n\
                  fetches the catalog and prints one page of it. See\n\
                  `modlist <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  modlist reads `modlist.toml` from the data directory, then from\n\
                  the current directory, then every --ini file in order. Later\n\
                  files override earlier ones. MODLIST_SECTION__KEY environment\n\
                  variables and --set come last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists known games and their state.
    Games,

    /// Fetches, filters and pages a game's mod catalog.
    Mods(ModsArgs),

    /// Installs a mod and its dependencies.
    Install(InstallArgs),

    /// Toggles a game's favourite flag.
    Favourite(GameArgs),

    /// Lists a game's profiles.
    Profiles(GameArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
