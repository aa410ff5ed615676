// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod list engine: fetch, cache, filter, sort and paginate a game's catalog.
//!
//! ```text
//! select_game(game) --> registry.set_active_game --> reset state
//!
//! refresh(fetch_if_empty)
//!   no active game / not THUNDERSTORE --> error
//!   fetch_if_empty && cache empty:
//!       loading = true
//!       repository.fetch_catalog(id) --> registry.update_cache(id, ..)
//!       (failure: log [game id], continue)
//!   mods = compute_mod_list(search, sort) --> first_page()
//!   loading = false                            (guard drop)
//!
//! compute_mod_list:  registry.cache(id) --> search filter --> rating desc
//! set_page(first, rows):  first < 0 --> warn, unchanged
//!                         else current_page = mods[first .. first+rows]
//! ```
//!
//! Mutators take `&mut self`, so one engine never runs two refreshes at once.

pub mod page;
pub mod search;

use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::ModRepository;
use crate::error::{ModlistResult, RegistryError};
use crate::game::{Game, GameRegistry, ModPlatform};
use crate::install::{InstallCoordinator, InstallDialog, InstallOutcome};
use crate::package::Package;
use crate::profile::Profile;
use crate::status::Flag;

pub use page::{DEFAULT_PAGE_SIZE, PageWindow};
pub use search::{filter_by_search, matches_search, sort_by_rating};

/// State behind a mod list view for the active game.
pub struct ModListEngine {
    registry: GameRegistry,
    repository: Arc<dyn ModRepository>,
    installer: Arc<InstallCoordinator>,
    active: Option<Game>,
    search: Option<String>,
    loading: Flag,
    mods: Vec<Package>,
    page: PageWindow,
    default_page_size: usize,
}

impl ModListEngine {
    /// Creates an engine sharing `registry` and installing through `repository`.
    #[must_use]
    pub fn new(registry: GameRegistry, repository: Arc<dyn ModRepository>) -> Self {
        Self {
            registry,
            installer: Arc::new(InstallCoordinator::new(repository.clone())),
            repository,
            active: None,
            search: None,
            loading: Flag::new(),
            mods: Vec::new(),
            page: PageWindow::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the number of rows [`Self::first_page`] shows.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self.page = PageWindow::new(page_size);
        self
    }

    /// Makes `game` active and resets search, list and page.
    pub fn select_game(&mut self, game: Game) -> Game {
        let active = self.registry.set_active_game(game);
        tracing::debug!(game = %active.identifier, "Selected game");

        self.active = Some(active.clone());
        self.search = None;
        self.mods.clear();
        self.page = PageWindow::new(self.default_page_size);
        active
    }

    #[must_use]
    pub const fn active_game(&self) -> Option<&Game> {
        self.active.as_ref()
    }

    fn thunderstore_game(&self) -> ModlistResult<&Game> {
        let game = self.active.as_ref().ok_or(RegistryError::NoActiveGame)?;
        if game.platform != ModPlatform::Thunderstore {
            return Err(RegistryError::UnsupportedPlatform {
                identifier: game.identifier.clone(),
                platform: game.platform.to_string(),
                expected: ModPlatform::Thunderstore.to_string(),
            }
            .into());
        }
        Ok(game)
    }

    /// Recomputes the list from the cache and returns to the first page.
    ///
    /// With `fetch_if_empty`, an empty cache is filled from the repository
    /// first while `loading` is raised. A failed fetch is logged and the list
    /// is recomputed from whatever is cached.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if no game is active or the active game is
    /// not a Thunderstore game.
    pub async fn refresh(&mut self, fetch_if_empty: bool) -> ModlistResult<()> {
        let id = self.thunderstore_game()?.identifier.clone();

        let loading =
            (fetch_if_empty && self.registry.cache(&id).is_none()).then(|| self.loading.raise());

        if loading.is_some() {
            match self.repository.fetch_catalog(&id).await {
                Ok(packages) => {
                    let count = packages.len();
                    match self.registry.update_cache(&id, packages) {
                        Ok(()) => tracing::info!(game = %id, count, "Cached mods"),
                        Err(e) => {
                            tracing::error!(game = %id, error = %e, "Failed to update mod cache");
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(game = %id, error = %e, "Failed to fetch mods");
                }
            }
        }

        self.mods = self.compute_mod_list(true, true);
        self.first_page();
        Ok(())
    }

    /// The active game's cached catalog, optionally searched and sorted.
    ///
    /// Empty when no game is active or nothing is cached.
    #[must_use]
    pub fn compute_mod_list(&self, apply_search: bool, apply_sort: bool) -> Vec<Package> {
        let Some(cache) = self
            .active
            .as_ref()
            .and_then(|g| self.registry.cache(&g.identifier))
        else {
            return Vec::new();
        };

        let mut mods = if apply_search {
            filter_by_search(&cache, self.search.as_deref())
        } else {
            cache.to_vec()
        };
        if apply_sort {
            sort_by_rating(&mut mods);
        }
        mods
    }

    /// Stores the search query, recomputes the list and returns to page one.
    pub fn set_search(&mut self, query: Option<&str>) {
        self.search = query.map(ToString::to_string);
        self.mods = self.compute_mod_list(true, true);
        self.first_page();
    }

    /// Entries of `mods` included in `profile`; see [`search::filter_by_profile`].
    #[must_use]
    pub fn filter_by_profile(mods: &[Package], profile: Option<&Profile>) -> Vec<Package> {
        search::filter_by_profile(mods, profile)
    }

    /// Moves the page window. Returns `false` and changes nothing if
    /// `first_index` is negative.
    pub fn set_page(&mut self, first_index: i64, page_size: usize) -> bool {
        self.page.set(first_index, page_size, &self.mods)
    }

    /// Shows the first page with the configured page size.
    pub fn first_page(&mut self) {
        self.page.set(0, self.default_page_size, &self.mods);
    }

    /// Attaches latest versions to current-page entries that lack one.
    ///
    /// Returns how many entries were resolved. Failures are logged per entry.
    pub async fn resolve_latest_versions(&mut self) -> usize {
        let Some(id) = self.active.as_ref().map(|g| g.identifier.clone()) else {
            return 0;
        };

        let first = self.page.first_index();
        let mut resolved = 0;
        for (offset, entry) in self.page.current_mut().iter_mut().enumerate() {
            if entry.latest_version.is_some() {
                continue;
            }
            match self
                .repository
                .fetch_latest_version(&id, &entry.owner, &entry.name)
                .await
            {
                Ok(version) => {
                    if let Some(listed) = self.mods.get_mut(first + offset) {
                        listed.latest_version = Some(version.clone());
                    }
                    entry.latest_version = Some(version);
                    resolved += 1;
                }
                Err(e) => {
                    tracing::warn!(game = %id, package = %entry.full_name, error = %e, "Failed to resolve latest version");
                }
            }
        }
        resolved
    }

    /// Installs `full_name` for the active game through the coordinator.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NoActiveGame` if no game is selected.
    pub async fn install_mod(
        &self,
        full_name: &str,
        dialog: Option<&dyn InstallDialog>,
    ) -> ModlistResult<InstallOutcome> {
        let game = self.active.as_ref().ok_or(RegistryError::NoActiveGame)?;
        Ok(self.installer.install_mod(full_name, game, dialog).await)
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    #[must_use]
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// The full filtered and sorted list.
    #[must_use]
    pub fn mods(&self) -> &[Package] {
        &self.mods
    }

    #[must_use]
    pub fn current_page(&self) -> &[Package] {
        self.page.current()
    }

    #[must_use]
    pub const fn page_first_index(&self) -> usize {
        self.page.first_index()
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page.page_size()
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub const fn installer(&self) -> &Arc<InstallCoordinator> {
        &self.installer
    }

    #[must_use]
    pub const fn registry(&self) -> &GameRegistry {
        &self.registry
    }
}
