// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Observable boolean status flags (`loading`, `installing`).
//!
//! A [`Flag`] is a `watch` channel sender; observers subscribe and see every
//! transition. [`Flag::raise`] returns a guard that lowers the flag on drop,
//! so the flag is cleared on every exit path.

use std::sync::Arc;
use tokio::sync::watch;

/// A shared, observable boolean.
#[derive(Debug, Clone)]
pub struct Flag {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for Flag {
    fn default() -> Self {
        Self::new()
    }
}

impl Flag {
    /// Creates a lowered flag.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    #[must_use]
    pub fn get(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn set(&self, value: bool) {
        self.tx.send_replace(value);
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Raises the flag if it is lowered. Returns `false` if it was already up.
    ///
    /// Check and set happen under the channel's lock.
    pub fn try_acquire(&self) -> bool {
        self.tx.send_if_modified(|raised| {
            if *raised {
                false
            } else {
                *raised = true;
                true
            }
        })
    }

    /// Raises the flag until the returned guard is dropped.
    #[must_use = "the flag is lowered as soon as the guard is dropped"]
    pub fn raise(&self) -> FlagGuard {
        self.set(true);
        FlagGuard { flag: self.clone() }
    }
}

/// Lowers its [`Flag`] when dropped.
#[derive(Debug)]
pub struct FlagGuard {
    flag: Flag,
}

impl Drop for FlagGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests;
