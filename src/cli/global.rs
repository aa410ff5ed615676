// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← global.log_file override
//! --data-dir DIR    ← paths.data_dir override
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > defaults
//! ```

use anyhow::{Context, bail};
use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Directory holding persisted state, profiles and downloaded archives.
    #[arg(short = 'd', long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Sets an option, such as 'modlist.page_size=20'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    ///
    /// `--set` entries come first so the dedicated flags win.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--set` entry is not `section.key=value`.
    pub fn to_config_overrides(&self) -> crate::error::Result<Vec<(String, String)>> {
        let mut overrides = Vec::with_capacity(self.options.len() + 4);

        for option in &self.options {
            overrides.push(parse_override(option)?);
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".to_string(), level.to_string()));
        }

        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".to_string(), path.display().to_string()));
        }

        if let Some(ref dir) = self.data_dir {
            overrides.push(("paths.data_dir".to_string(), dir.display().to_string()));
        }

        Ok(overrides)
    }
}

/// Splits `section.key=value`.
fn parse_override(option: &str) -> crate::error::Result<(String, String)> {
    let (key, value) = option
        .split_once('=')
        .with_context(|| format!("option '{option}' is missing '='"))?;
    let key = key.trim();
    if !key.contains('.') || key.starts_with('.') || key.ends_with('.') {
        bail!("option key '{key}' must be 'section.key'");
    }
    Ok((key.to_string(), value.trim().to_string()))
}
