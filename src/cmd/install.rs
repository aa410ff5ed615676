// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command implementation for modlist-rs.

use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;

use anyhow::bail;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::mods::InstallArgs;
use crate::cmd::AppContext;
use crate::error::Result;
use crate::install::{InstallDialog, InstallOutcome};

fn dialog_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg} ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Terminal stand-in for the install dialog: a spinner while it is visible.
pub struct SpinnerDialog {
    message: String,
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerDialog {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            spinner: Mutex::new(None),
        }
    }
}

impl InstallDialog for SpinnerDialog {
    fn set_closable(&self, closable: bool) {
        if closable
            && let Some(spinner) = self
                .spinner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take()
        {
            spinner.finish_and_clear();
        }
    }

    fn set_visible(&self, visible: bool) {
        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if visible && slot.is_none() {
            let spinner = ProgressBar::new_spinner()
                .with_style(dialog_style())
                .with_message(self.message.clone());
            spinner.enable_steady_tick(Duration::from_millis(100));
            *slot = Some(spinner);
        } else if !visible && let Some(spinner) = slot.take() {
            spinner.finish_and_clear();
        }
    }
}

/// Main handler for the install command.
///
/// # Errors
///
/// Returns an error if the game is unknown or the install did not succeed.
pub async fn run_install_command(args: &InstallArgs, ctx: &AppContext) -> Result<()> {
    let game = ctx.game(&args.game.game)?;
    let mut engine = ctx.engine();
    engine.select_game(game);

    let dialog = SpinnerDialog::new(format!("Installing {}", args.full_name));
    match engine.install_mod(&args.full_name, Some(&dialog)).await? {
        InstallOutcome::Installed(version) => {
            println!("Installed {}", version.full_name);
            Ok(())
        }
        InstallOutcome::Failed => bail!("failed to install '{}'", args.full_name),
        InstallOutcome::Busy => bail!("another install is in progress"),
    }
}
