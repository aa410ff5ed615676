// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, InstallError, ModlistError, ModlistResult, RegistryError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "thunderstore".to_string(),
        key: "base_url".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'base_url' in section '[thunderstore]'"
    );
}

#[test]
fn test_registry_error_display() {
    let err = RegistryError::UnsupportedPlatform {
        identifier: "skyrim".to_string(),
        platform: "NEXUS_MODS".to_string(),
        expected: "THUNDERSTORE".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"game 'skyrim' is a NEXUS_MODS game, expected THUNDERSTORE"
    );
}

#[test]
fn test_boxed_conversion_keeps_message() {
    let err: ModlistError = RegistryError::GameNotFound("valheim".to_string()).into();
    assert!(matches!(err, ModlistError::Registry(_)));
    assert_eq!(
        err.to_string(),
        "registry error: game 'valheim' not found in registry"
    );

    let err: ModlistError = InstallError::DependencyNotFound("A-B-1.0.0".to_string()).into();
    assert!(matches!(err, ModlistError::Install(_)));
}

#[test]
fn test_other_error() {
    let err = ModlistError::other("something broke");
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_modlist_error_size() {
    // Box<str> variants are 16 bytes (fat pointer), plus discriminant
    let size = std::mem::size_of::<ModlistError>();
    assert!(size <= 24, "ModlistError is {size} bytes, expected <= 24");
}

#[test]
fn test_modlist_result_size() {
    let size = std::mem::size_of::<ModlistResult<()>>();
    assert!(size <= 24, "ModlistResult<()> is {size} bytes, expected <= 24");
}
