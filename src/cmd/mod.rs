// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> AppContext::load(config) --> cmd::run_* handlers
//!   options, games, mods, install, favourite, profiles
//! ```

pub mod context;
pub mod favourite;
pub mod games;
pub mod install;
pub mod mods;
pub mod options;
pub mod profiles;

pub use context::AppContext;
