// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pagination window over the computed mod list.

use crate::package::Package;

/// Rows per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 40;

/// The visible slice of the mod list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    first_index: usize,
    page_size: usize,
    current: Vec<Package>,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            first_index: 0,
            page_size,
            current: Vec::new(),
        }
    }

    /// Moves the window to `first_index` and re-slices `mods`.
    ///
    /// A negative index is rejected with a warning and leaves the window
    /// untouched. Indexes past the end yield an empty page.
    pub fn set(&mut self, first_index: i64, page_size: usize, mods: &[Package]) -> bool {
        let Ok(first) = usize::try_from(first_index) else {
            tracing::warn!(first_index, "Ignoring negative page index");
            return false;
        };

        self.first_index = first;
        self.page_size = page_size;
        self.current = mods.iter().skip(first).take(page_size).cloned().collect();
        true
    }

    #[must_use]
    pub const fn first_index(&self) -> usize {
        self.first_index
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn current(&self) -> &[Package] {
        &self.current
    }

    pub(super) fn current_mut(&mut self) -> &mut [Package] {
        &mut self.current
    }
}
