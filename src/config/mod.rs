// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modlist-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <data_dir>/modlist.toml
//! 3. ./modlist.toml (cwd)
//! 4. --ini files
//! 5. MODLIST_* env vars
//! 6. CLI overrides (--set, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODLIST_GLOBAL__OUTPUT_LOG_LEVEL=4       → global.output_log_level = 4
//! MODLIST_THUNDERSTORE__BASE_URL=http://.. → thunderstore.base_url
//! MODLIST_MODLIST__PAGE_SIZE=20            → modlist.page_size = 20
//! ```
//!
//! # Games
//!
//! ```toml
//! [[games]]
//! identifier = "lethal-company"   # overrides the built-in entry
//! title = "Lethal Company"
//! path = "/games/Lethal Company"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::game::{GameDefinition, builtin_games};

pub use loader::ConfigLoader;
pub use paths::PathsConfig;
pub use types::{GlobalConfig, ModlistConfig, ThunderstoreConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub thunderstore: ThunderstoreConfig,
    pub modlist: ModlistConfig,
    pub paths: PathsConfig,
    /// Additional games, or overrides of built-in ones by identifier.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<GameDefinition>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modlist_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modlist.toml")
    ///     .with_env_prefix("MODLIST")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve default paths and validate every section.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for invalid values or duplicate game
    /// identifiers.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve();
        self.thunderstore.validate()?;
        self.modlist.validate()?;

        let mut seen = BTreeSet::new();
        for game in &self.games {
            if !seen.insert(game.identifier.as_str()) {
                return Err(ConfigError::InvalidValue {
                    section: "games".to_string(),
                    key: "identifier".to_string(),
                    message: format!("duplicate game '{}'", game.identifier),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Built-in games merged with `[[games]]`.
    ///
    /// A configured game replaces the built-in entry with the same
    /// identifier in place; new games are appended.
    #[must_use]
    pub fn game_list(&self) -> Vec<GameDefinition> {
        let mut games = builtin_games();
        for configured in &self.games {
            match games
                .iter_mut()
                .find(|g| g.identifier == configured.identifier)
            {
                Some(existing) => *existing = configured.clone(),
                None => games.push(configured.clone()),
            }
        }
        games
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_thunderstore_options(&mut options);
        options.insert(
            "modlist.page_size".into(),
            self.modlist.page_size.to_string(),
        );
        options.insert(
            "paths.data_dir".into(),
            self.paths
                .data_dir
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        for game in &self.games {
            let path = game
                .path
                .as_ref()
                .map_or_else(String::new, |p| format!(" ({})", p.display()));
            options.insert(
                format!("games.{}", game.identifier),
                format!("{}{path}", game.title),
            );
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| {
                format!("{key:<max_key_len$} = {value}")
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.json_log".into(), self.global.json_log.to_string());
    }

    fn format_thunderstore_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "thunderstore.base_url".into(),
            self.thunderstore.base_url.clone(),
        );
        options.insert(
            "thunderstore.excluded_packages".into(),
            self.thunderstore.excluded_packages.len().to_string(),
        );
        options.insert(
            "thunderstore.timeout_secs".into(),
            self.thunderstore.timeout_secs.to_string(),
        );
        options.insert(
            "thunderstore.progress".into(),
            self.thunderstore.progress.to_string(),
        );
    }
}
