// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Game registry: the single owner of per-game state.
//!
//! ```text
//! initialize(games, probe, persistence)
//!   per game:  installed     = path set && probe.path_exists(path, dir)
//!              favourited    = id in persistence.favourite_games()
//!              bepinex_setup = probe.is_mod_loader_installed(path)  (path only)
//!   then, under the lock: keep existing mod_cache per id, swap map
//!
//! toggle_favourite(id)
//!   lock --> flip flag --> collect ids --> unlock
//!   set_favourite_games(ids) --> save()        (after the flip, may fail)
//! ```
//!
//! The handle is cheap to clone. Locks are held only for synchronous field
//! access, never across an await.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Catalog, Game, GameFlags};
use crate::backend::{PathProbe, PersistenceStore};
use crate::error::{ModlistResult, RegistryError};
use crate::package::Package;

type GameMap = BTreeMap<String, Game>;

/// Shared registry of games keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: Arc<RwLock<GameMap>>,
}

impl GameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, GameMap> {
        self.games.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GameMap> {
        self.games.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rebuilds the registry from `games`, resolving each game's flags.
    ///
    /// Probe and persistence failures are logged and count as `false`.
    /// Catalogs already cached for an identifier survive the rebuild.
    /// Returns the registry size.
    pub async fn initialize(
        &self,
        games: Vec<Game>,
        probe: &dyn PathProbe,
        persistence: &dyn PersistenceStore,
    ) -> usize {
        let favourites = persistence.favourite_games().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read favourite games");
            Vec::new()
        });

        let mut resolved = GameMap::new();
        for mut game in games {
            let installed = match &game.path {
                Some(path) => probe.path_exists(path, true).await.unwrap_or_else(|e| {
                    tracing::warn!(game = %game.identifier, error = %e, "Path check failed");
                    false
                }),
                None => false,
            };
            game.flags.set(GameFlags::INSTALLED, installed);
            game.flags
                .set(GameFlags::FAVOURITED, favourites.contains(&game.identifier));

            if let Some(path) = &game.path {
                let setup = probe.is_mod_loader_installed(path).await.unwrap_or_else(|e| {
                    tracing::warn!(game = %game.identifier, error = %e, "Mod loader check failed");
                    false
                });
                game.flags.set(GameFlags::BEPINEX_SETUP, setup);
            } else {
                game.flags.remove(GameFlags::BEPINEX_SETUP);
            }

            resolved.insert(game.identifier.clone(), game);
        }

        let mut current = self.write();
        for (id, game) in &mut resolved {
            if let Some(cache) = current.get(id).and_then(|g| g.mod_cache.clone()) {
                game.mod_cache = Some(cache);
            }
        }
        *current = resolved;

        tracing::debug!(count = current.len(), "Game registry initialized");
        current.len()
    }

    /// The registry's entry for `game.identifier`, else `game` itself.
    #[must_use]
    pub fn set_active_game(&self, game: Game) -> Game {
        self.read().get(&game.identifier).cloned().unwrap_or(game)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Game> {
        self.read().get(id).cloned()
    }

    /// First game whose identifier, title or alias matches `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Game> {
        self.read().values().find(|g| g.matches_name(name)).cloned()
    }

    /// All games, ordered by identifier.
    #[must_use]
    pub fn games(&self) -> Vec<Game> {
        self.read().values().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The cached catalog of a game, if populated.
    #[must_use]
    pub fn cache(&self, id: &str) -> Option<Catalog> {
        self.read().get(id).and_then(|g| g.mod_cache.clone())
    }

    /// Replaces a game's catalog wholesale.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::GameNotFound` if the game is not registered.
    pub fn update_cache(&self, id: &str, entries: Vec<Package>) -> ModlistResult<()> {
        let mut games = self.write();
        let game = games
            .get_mut(id)
            .ok_or_else(|| RegistryError::GameNotFound(id.to_string()))?;
        game.mod_cache = Some(entries.into());
        Ok(())
    }

    /// Drops a game's catalog so the next refresh fetches it again.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::GameNotFound` if the game is not registered.
    pub fn invalidate_cache(&self, id: &str) -> ModlistResult<()> {
        let mut games = self.write();
        let game = games
            .get_mut(id)
            .ok_or_else(|| RegistryError::GameNotFound(id.to_string()))?;
        game.mod_cache = None;
        Ok(())
    }

    /// Identifiers of all favourited games.
    #[must_use]
    pub fn favourite_ids(&self) -> Vec<String> {
        favourite_ids_of(&self.read())
    }

    /// Flips a game's favourite flag, then persists the favourites list.
    ///
    /// The flip is not rolled back if persisting fails; the failure is logged.
    /// Returns the new flag value.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::GameNotFound` if the game is not registered.
    pub async fn toggle_favourite(
        &self,
        id: &str,
        persistence: &dyn PersistenceStore,
    ) -> ModlistResult<bool> {
        let (favourited, ids) = {
            let mut games = self.write();
            let game = games
                .get_mut(id)
                .ok_or_else(|| RegistryError::GameNotFound(id.to_string()))?;
            game.flags.toggle(GameFlags::FAVOURITED);
            let favourited = game.favourited();
            (favourited, favourite_ids_of(&games))
        };

        if let Err(e) = persistence.set_favourite_games(ids).await {
            tracing::error!(game = %id, error = %e, "Failed to update favourite games");
            return Ok(favourited);
        }
        if let Err(e) = persistence.save().await {
            tracing::error!(game = %id, error = %e, "Failed to save favourite games");
        }

        Ok(favourited)
    }
}

fn favourite_ids_of(games: &GameMap) -> Vec<String> {
    games
        .values()
        .filter(|g| g.favourited())
        .map(|g| g.identifier.clone())
        .collect()
}
