// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wiring of the library components a command runs against.

use std::sync::Arc;

use crate::backend::{FsPathProbe, FsProfileProvider, JsonPersistence};
use crate::config::Config;
use crate::error::{RegistryError, Result};
use crate::game::{Game, GameRegistry};
use crate::modlist::ModListEngine;
use crate::net::ProgressDisplay;
use crate::thunderstore::ThunderstoreClient;

/// Registry, repository and stores built from a [`Config`].
pub struct AppContext {
    pub config: Config,
    pub registry: GameRegistry,
    pub client: Arc<ThunderstoreClient>,
    pub persistence: JsonPersistence,
    pub profiles: FsProfileProvider,
}

impl AppContext {
    /// Loads persisted state and initializes the game registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unresolved or the
    /// persistence file exists but cannot be parsed.
    pub async fn load(config: Config) -> Result<Self> {
        let games_dir = config.paths.games_dir()?;
        let persistence = JsonPersistence::load(config.paths.persistence_file()?).await?;

        let progress = if config.thunderstore.progress {
            ProgressDisplay::Bar
        } else {
            ProgressDisplay::Silent
        };
        let mut client = ThunderstoreClient::new(&config.thunderstore.base_url, &games_dir)
            .with_excluded(config.thunderstore.excluded_packages.clone())
            .with_progress(progress);
        if let Some(timeout) = config.thunderstore.timeout() {
            client = client.with_timeout(timeout);
        }

        let registry = GameRegistry::new();
        let games = config.game_list().into_iter().map(Game::from).collect();
        let count = registry.initialize(games, &FsPathProbe, &persistence).await;
        tracing::debug!(count, data_dir = %games_dir.display(), "Loaded application context");

        Ok(Self {
            profiles: FsProfileProvider::new(games_dir),
            config,
            registry,
            client: Arc::new(client),
            persistence,
        })
    }

    /// Looks a game up by identifier, title or alias.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::GameNotFound` if nothing matches.
    pub fn game(&self, name: &str) -> Result<Game> {
        self.registry
            .find(name)
            .ok_or_else(|| RegistryError::GameNotFound(name.to_string()).into())
    }

    /// An engine over the shared registry, paged per `[modlist]`.
    #[must_use]
    pub fn engine(&self) -> ModListEngine {
        ModListEngine::new(self.registry.clone(), self.client.clone())
            .with_page_size(self.config.modlist.page_size)
    }
}
