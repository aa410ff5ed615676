// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profiles command implementation for modlist-rs.

use crate::cli::mods::GameArgs;
use crate::cmd::AppContext;
use crate::error::Result;
use crate::game::ModPlatform;
use crate::profile::ProfileStore;

/// Lists the game's profiles with their mod counts per platform.
///
/// # Errors
///
/// Returns an error if the game is unknown.
pub async fn run_profiles_command(args: &GameArgs, ctx: &AppContext) -> Result<()> {
    let game = ctx.game(&args.game)?;

    let mut store = ProfileStore::new();
    if store.load(&ctx.profiles, &game.title).await == 0 {
        println!("No profiles for {}", game.title);
        return Ok(());
    }

    for profile in store.profiles() {
        println!(
            "{}  ({} Thunderstore, {} Nexus Mods)",
            profile.name,
            profile.manifest.mods(ModPlatform::Thunderstore).len(),
            profile.manifest.mods(ModPlatform::NexusMods).len(),
        );
        for full_name in profile.manifest.mods(ModPlatform::Thunderstore) {
            println!("    {full_name}");
        }
    }
    Ok(())
}
