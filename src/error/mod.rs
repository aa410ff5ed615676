// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                ModlistError (~24 bytes)
//!                        |
//!   +--------+-------+---+----+--------+--------+------+
//!   |        |       |        |        |        |      |
//!   v        v       v        v        v        v      v
//! Registry Profile Install Network  Config  Persist  Io/Other
//!   Box      Box     Box     Box      Box      Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Registry    GameNotFound, UnsupportedPlatform, NoActiveGame
//!   Profile     NotFound, ModAlreadyPresent
//!   Install     PackageNotFound, NoVersions, DependencyNotFound, Malformed
//!   Network     Reqwest, HttpError, InvalidUrl, DownloadFailed
//!   Config      ParseError, MissingKey, InvalidValue
//!   Persistence ReadFailed, WriteFailed
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModlistError`].
pub type ModlistResult<T> = std::result::Result<T, ModlistError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ModlistError {
    /// Game registry lookup or state error.
    #[error("registry error: {0}")]
    Registry(#[from] Box<RegistryError>),

    /// Profile lookup or manifest error.
    #[error("profile error: {0}")]
    Profile(#[from] Box<ProfileError>),

    /// Package installation error.
    #[error("install error: {0}")]
    Install(#[from] Box<InstallError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Persistence read or write failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] Box<PersistenceError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl ModlistError {
    /// Create a generic [`ModlistError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModlistError {
                fn from(err: $error) -> Self {
                    ModlistError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    RegistryError => Registry,
    ProfileError => Profile,
    InstallError => Install,
    NetworkError => Network,
    ConfigError => Config,
    PersistenceError => Persistence,
    std::io::Error => Io,
}

// --- Registry Errors ---

/// Game registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No game with the identifier exists in the registry.
    #[error("game '{0}' not found in registry")]
    GameNotFound(String),

    /// The game is hosted on a platform this operation does not handle.
    #[error("game '{identifier}' is a {platform} game, expected {expected}")]
    UnsupportedPlatform {
        identifier: String,
        platform: String,
        expected: String,
    },

    /// An operation needed an active game but none was selected.
    #[error("no game selected")]
    NoActiveGame,
}

// --- Profile Errors ---

/// Profile errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No profile with the given name exists for the game.
    #[error("profile '{name}' not found for '{game}'")]
    NotFound { game: String, name: String },

    /// The mod is already listed in the profile manifest.
    #[error("{platform} mod '{full_name}' is already in the profile")]
    ModAlreadyPresent { platform: String, full_name: String },
}

// --- Install Errors ---

/// Package installation errors.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The package does not exist in the community.
    #[error("package '{full_name}' not found in community '{community}'")]
    PackageNotFound {
        community: String,
        full_name: String,
    },

    /// The package exists but has no published version.
    #[error("package '{0}' has no versions")]
    NoVersions(String),

    /// A dependency string could not be resolved.
    #[error("dependency '{0}' not found")]
    DependencyNotFound(String),

    /// A dependency string was not in `Owner-Name-Version` form.
    #[error("malformed dependency string '{0}'")]
    MalformedDependency(String),
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// I/O error during download.
    #[error("io error during download: {0}")]
    Io(#[from] std::io::Error),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Persistence Errors ---

/// Errors reading or writing persisted application state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Failed to read a persisted file.
    #[error("failed to read '{path}': {message}")]
    ReadFailed { path: String, message: String },

    /// Failed to write a persisted file.
    #[error("failed to write '{path}': {message}")]
    WriteFailed { path: String, message: String },
}

#[cfg(test)]
mod tests;
