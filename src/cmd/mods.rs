// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mods command implementation for modlist-rs.
//!
//! ```text
//! select_game --> refresh(fetch) --> set_search --> set_page(first, rows)
//!   --> [resolve_latest_versions] --> print
//!
//! with --profile:
//!   set_search --> filter_by_profile(all mods) --> PageWindow(first, rows) --> print
//! ```

use anyhow::bail;

use crate::cli::mods::ModsArgs;
use crate::cmd::AppContext;
use crate::error::Result;
use crate::modlist::{ModListEngine, PageWindow};
use crate::package::Package;
use crate::profile::{Profile, ProfileStore};

/// `index  rating  Owner-Name  version`
#[must_use]
pub fn format_mod_row(index: usize, package: &Package) -> String {
    let version = package
        .latest_version
        .as_ref()
        .map_or("-", |v| v.version_number.as_str());
    format!(
        "{index:>5}  {:>6}  {}  {version}",
        package.rating_score, package.full_name
    )
}

/// Page `first..first + rows` of `mods` after the profile filter.
///
/// The filter runs over the whole list so profile mods ranked below the
/// first page still show. Returns the window and the filtered total. A
/// negative `first` keeps the first page, as [`ModListEngine::set_page`] does.
#[must_use]
pub fn profile_page(
    mods: &[Package],
    profile: Option<&Profile>,
    first: i64,
    rows: usize,
) -> (PageWindow, usize) {
    let listed = ModListEngine::filter_by_profile(mods, profile);
    let mut window = PageWindow::new(rows);
    window.set(0, rows, &listed);
    window.set(first, rows, &listed);
    (window, listed.len())
}

/// Main handler for the mods command.
///
/// # Errors
///
/// Returns an error if the game or profile is unknown, or the game is not a
/// Thunderstore game.
pub async fn run_mods_command(args: &ModsArgs, ctx: &AppContext) -> Result<()> {
    let game = ctx.game(&args.game.game)?;

    let mut profiles = ProfileStore::new();
    if let Some(name) = &args.profile {
        profiles.load(&ctx.profiles, &game.title).await;
        profiles.select_by_name(&game.identifier, name)?;
    }

    let mut engine = ctx.engine();
    let game = engine.select_game(game);
    engine.refresh(true).await?;
    if ctx.registry.cache(&game.identifier).is_none() {
        bail!("no catalog available for '{}'", game.identifier);
    }

    if args.search.is_some() {
        engine.set_search(args.search.as_deref());
    }
    let rows = args.rows.unwrap_or_else(|| engine.page_size());
    engine.set_page(args.first, rows);

    if args.latest {
        let resolved = engine.resolve_latest_versions().await;
        tracing::debug!(resolved, "Resolved latest versions");
    }

    match profiles.selected() {
        Some(profile) => {
            let (window, total) = profile_page(engine.mods(), Some(profile), args.first, rows);
            print_rows(window.first_index(), window.current(), total);
        }
        None => {
            let total = engine.mods().len();
            print_rows(engine.page_first_index(), engine.current_page(), total);
        }
    }
    Ok(())
}

fn print_rows(first: usize, page: &[Package], total: usize) {
    for (offset, package) in page.iter().enumerate() {
        println!("{}", format_mod_row(first + offset, package));
    }
    println!(
        "{} of {total} mods, rows {first}..{}",
        page.len(),
        first + page.len()
    );
}
