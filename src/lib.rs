// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          mods / install / games
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '------------+--------------'
//!                           v
//!                 modlist (ModListEngine)
//!                  |        |         |
//!                  v        v         v
//!               game     profile   install
//!             registry    store   coordinator
//!                  |                  |
//!                  +--------+---------+
//!                           v
//!         backend (ModRepository, PathProbe, ...)
//!                  |                  |
//!                  v                  v
//!            thunderstore        fs / json files
//!                  |
//!                 net   HTTP/DL
//!
//!   +-----------------------------------------------+
//!   |  foundation   error, logging, status, package |
//!   +-----------------------------------------------+
//! ```

pub mod backend;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod game;
pub mod install;
pub mod logging;
pub mod modlist;
pub mod net;
pub mod package;
pub mod profile;
pub mod status;
pub mod thunderstore;
