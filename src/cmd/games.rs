// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Games command implementation for modlist-rs.

use crate::cmd::AppContext;
use crate::game::Game;

/// One row per registered game: marks, identifier, title, platform, path.
///
/// ```text
/// *IB lethal-company   Lethal Company  THUNDERSTORE  /games/lc
/// ```
///
/// `*` favourite, `I` installed, `B` BepInEx present.
#[must_use]
pub fn format_game(game: &Game, id_width: usize) -> String {
    let marks = format!(
        "{}{}{}",
        if game.favourited() { '*' } else { ' ' },
        if game.installed() { 'I' } else { ' ' },
        if game.bepinex_setup() { 'B' } else { ' ' },
    );
    let path = game
        .path
        .as_ref()
        .map_or_else(String::new, |p| format!("  {}", p.display()));
    format!(
        "{marks} {:<id_width$}  {}  {}{path}",
        game.identifier, game.title, game.platform
    )
}

/// Main handler for the games command.
pub fn run_games_command(ctx: &AppContext) {
    let games = ctx.registry.games();
    if games.is_empty() {
        println!("No games registered");
        return;
    }

    let width = games.iter().map(|g| g.identifier.len()).max().unwrap_or(0);
    for game in &games {
        println!("{}", format_game(game, width));
    }
}
