// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-slot install coordinator.
//!
//! ```text
//! install_mod(full_name, game, dialog)
//!   try_acquire(installing) --fail--> Busy (backend untouched)
//!        |
//!        v
//!   dialog: closable=false, visible=true
//!   repository.install_by_name(title, id, full_name)
//!        |-- Ok(v)  --> last_installed = v --> Installed(v)
//!        `-- Err(e) --> log [game id]      --> Failed
//!   guard drop: installing=false, dialog closable=true
//! ```

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;

use crate::backend::ModRepository;
use crate::game::Game;
use crate::package::PackageVersion;
use crate::status::Flag;

/// UI surface shown while an install runs.
pub trait InstallDialog: Send + Sync {
    fn set_closable(&self, closable: bool);
    fn set_visible(&self, visible: bool);
}

/// Result of an install request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The backend installed this version.
    Installed(PackageVersion),
    /// The backend call failed; the error was logged.
    Failed,
    /// Another install was in flight; nothing was attempted.
    Busy,
}

impl InstallOutcome {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Installed(_))
    }
}

/// Drives installs through a [`ModRepository`], one at a time.
pub struct InstallCoordinator {
    repository: Arc<dyn ModRepository>,
    installing: Flag,
    last_installed: watch::Sender<Option<PackageVersion>>,
}

impl std::fmt::Debug for InstallCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallCoordinator")
            .field("installing", &self.installing.get())
            .field("last_installed", &*self.last_installed.borrow())
            .finish_non_exhaustive()
    }
}

/// Clears the in-flight state on every exit path.
struct InstallGuard<'a> {
    installing: &'a Flag,
    dialog: Option<&'a dyn InstallDialog>,
}

impl Drop for InstallGuard<'_> {
    fn drop(&mut self) {
        self.installing.set(false);
        if let Some(dialog) = self.dialog {
            dialog.set_closable(true);
        }
    }
}

impl InstallCoordinator {
    #[must_use]
    pub fn new(repository: Arc<dyn ModRepository>) -> Self {
        let (last_installed, _rx) = watch::channel(None);
        Self {
            repository,
            installing: Flag::new(),
            last_installed,
        }
    }

    /// Installs the latest version of `full_name` (`Owner-Name`) for `game`.
    ///
    /// Never fails: backend errors are logged and reported as
    /// [`InstallOutcome::Failed`].
    pub async fn install_mod(
        &self,
        full_name: &str,
        game: &Game,
        dialog: Option<&dyn InstallDialog>,
    ) -> InstallOutcome {
        if !self.installing.try_acquire() {
            tracing::warn!(game = %game.identifier, package = %full_name, "Install already in progress");
            return InstallOutcome::Busy;
        }
        let _guard = InstallGuard {
            installing: &self.installing,
            dialog,
        };

        if let Some(dialog) = dialog {
            dialog.set_closable(false);
            dialog.set_visible(true);
        }

        let start = Instant::now();
        match self
            .repository
            .install_by_name(&game.title, &game.identifier, full_name)
            .await
        {
            Ok(version) => {
                tracing::info!(
                    game = %game.identifier,
                    package = %full_name,
                    version = %version.version_number,
                    elapsed = ?start.elapsed(),
                    "Installed mod"
                );
                self.last_installed.send_replace(Some(version.clone()));
                InstallOutcome::Installed(version)
            }
            Err(e) => {
                tracing::error!(game = %game.identifier, package = %full_name, error = %e, "Failed to install mod");
                InstallOutcome::Failed
            }
        }
    }

    #[must_use]
    pub fn installing(&self) -> bool {
        self.installing.get()
    }

    #[must_use]
    pub fn subscribe_installing(&self) -> watch::Receiver<bool> {
        self.installing.subscribe()
    }

    /// The most recently installed version, kept across failed attempts.
    #[must_use]
    pub fn last_installed(&self) -> Option<PackageVersion> {
        self.last_installed.borrow().clone()
    }

    #[must_use]
    pub fn subscribe_last_installed(&self) -> watch::Receiver<Option<PackageVersion>> {
        self.last_installed.subscribe()
    }
}

#[cfg(test)]
mod tests;
