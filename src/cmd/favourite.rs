// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Favourite command implementation for modlist-rs.

use crate::cli::mods::GameArgs;
use crate::cmd::AppContext;
use crate::error::Result;

/// Toggles the favourite flag and reports the new state.
///
/// # Errors
///
/// Returns an error if the game is unknown.
pub async fn run_favourite_command(args: &GameArgs, ctx: &AppContext) -> Result<()> {
    let game = ctx.game(&args.game)?;
    let favourited = ctx
        .registry
        .toggle_favourite(&game.identifier, &ctx.persistence)
        .await?;

    if favourited {
        println!("{} is now a favourite", game.title);
    } else {
        println!("{} is no longer a favourite", game.title);
    }
    Ok(())
}
