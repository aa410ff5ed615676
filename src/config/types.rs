// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! [global]        log levels, log file
//! [thunderstore]  base_url, excluded_packages, timeout_secs, progress
//! [modlist]       page_size
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::modlist::DEFAULT_PAGE_SIZE;
use crate::thunderstore::{DEFAULT_BASE_URL, DEFAULT_EXCLUDED_PACKAGES};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub json_log: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
            json_log: false,
        }
    }
}

/// Thunderstore API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThunderstoreConfig {
    pub base_url: String,
    /// `Owner-Name` of packages hidden from catalogs (mod managers, tools).
    pub excluded_packages: Vec<String>,
    /// Request timeout; 0 disables it.
    pub timeout_secs: u64,
    /// Show download progress bars.
    pub progress: bool,
}

impl Default for ThunderstoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            excluded_packages: DEFAULT_EXCLUDED_PACKAGES
                .iter()
                .map(ToString::to_string)
                .collect(),
            timeout_secs: 60,
            progress: true,
        }
    }
}

impl ThunderstoreConfig {
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                section: "thunderstore".to_string(),
                key: "base_url".to_string(),
                message: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        Ok(())
    }
}

/// Mod list view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModlistConfig {
    /// Rows on the first page after a refresh or search.
    pub page_size: usize,
}

impl Default for ModlistConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ModlistConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                section: "modlist".to_string(),
                key: "page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
