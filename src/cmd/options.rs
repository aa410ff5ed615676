// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for modlist-rs.

use crate::config::Config;

/// Display current configuration options, then the files they came from.
pub fn run_options_command(config: &Config, config_files: &[String]) {
    for line in config.format_options() {
        println!("{line}");
    }

    println!();
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
