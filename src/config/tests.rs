// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, PathsConfig};
use crate::game::ModPlatform;
use crate::logging::LogLevel;
use crate::modlist::DEFAULT_PAGE_SIZE;
use crate::thunderstore::DEFAULT_BASE_URL;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.thunderstore.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.thunderstore.excluded_packages.len(), 13);
    assert_eq!(config.modlist.page_size, DEFAULT_PAGE_SIZE);
    assert!(config.games.is_empty());
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_file = "/tmp/modlist.log"
json_log = true

[thunderstore]
base_url = "http://localhost:8080"
excluded_packages = ["ebkr-r2modman"]
timeout_secs = 0
progress = false

[modlist]
page_size = 25

[paths]
data_dir = "/srv/modlist"
"#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("/tmp/modlist.log")));
    assert!(config.global.json_log);
    assert_eq!(config.thunderstore.base_url, "http://localhost:8080");
    assert_eq!(config.thunderstore.excluded_packages, ["ebkr-r2modman"]);
    assert_eq!(config.thunderstore.timeout(), None);
    assert!(!config.thunderstore.progress);
    assert_eq!(config.modlist.page_size, 25);
    assert_eq!(config.paths.data_dir, Some(PathBuf::from("/srv/modlist")));
}

#[test]
fn test_timeout_default() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.thunderstore.timeout(), Some(Duration::from_secs(60)));
}

#[test]
fn test_unknown_field_rejected() {
    let result = Config::parse("[modlist]\nrows = 10\n");
    assert!(result.is_err());

    let result = Config::parse("[nonsense]\nkey = 1\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_zero_page_size_rejected() {
    let err = Config::parse("[modlist]\npage_size = 0\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'page_size' in section '[modlist]': must be at least 1"
    );
}

#[test]
fn test_non_http_base_url_rejected() {
    let err = Config::parse("[thunderstore]\nbase_url = \"ftp://thunderstore.io\"\n").unwrap_err();
    assert!(err.to_string().contains("base_url"));
    assert!(err.to_string().contains("ftp://thunderstore.io"));
}

#[test]
fn test_parse_games() {
    let config = Config::parse(
        r#"
[[games]]
identifier = "lethal-company"
title = "Lethal Company"
path = "/games/Lethal Company"

[[games]]
identifier = "skyrim"
title = "Skyrim"
platform = "NEXUS_MODS"
aliases = ["tes5"]
"#,
    )
    .unwrap();

    assert_eq!(config.games.len(), 2);
    assert_eq!(
        config.games[0].path,
        Some(PathBuf::from("/games/Lethal Company"))
    );
    assert_eq!(config.games[0].platform, ModPlatform::Thunderstore);
    assert_eq!(config.games[1].platform, ModPlatform::NexusMods);
    assert_eq!(config.games[1].aliases, ["tes5"]);
}

#[test]
fn test_duplicate_games_rejected() {
    let err = Config::parse(
        r#"
[[games]]
identifier = "valheim"
title = "Valheim"

[[games]]
identifier = "valheim"
title = "Valheim Again"
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate game 'valheim'"));
}

#[test]
fn test_game_list_overrides_builtin_in_place() {
    let config = Config::parse(
        r#"
[[games]]
identifier = "lethal-company"
title = "Lethal Company"
path = "/games/lc"

[[games]]
identifier = "skyrim"
title = "Skyrim"
platform = "NEXUS_MODS"
"#,
    )
    .unwrap();

    let builtin = crate::game::builtin_games();
    let games = config.game_list();
    assert_eq!(games.len(), builtin.len() + 1);

    let position = builtin
        .iter()
        .position(|g| g.identifier == "lethal-company")
        .unwrap();
    assert_eq!(games[position].path, Some(PathBuf::from("/games/lc")));
    assert!(games[position].aliases.is_empty());
    assert_eq!(games.last().map(|g| g.identifier.as_str()), Some("skyrim"));
}

#[test]
fn test_set_override_wins() {
    let config = ConfigLoader::new()
        .add_toml_str("[modlist]\npage_size = 25\n")
        .set("modlist.page_size", 10_i64)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.modlist.page_size, 10);
}

#[test]
fn test_later_source_wins() {
    let config = ConfigLoader::new()
        .add_toml_str("[thunderstore]\ntimeout_secs = 5\nprogress = false\n")
        .add_toml_str("[thunderstore]\ntimeout_secs = 30\n")
        .build()
        .unwrap();
    assert_eq!(config.thunderstore.timeout_secs, 30);
    assert!(!config.thunderstore.progress);
}

#[test]
fn test_required_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("missing.toml"));
    assert!(result.is_err());
}

#[test]
fn test_optional_file_missing_is_not_listed() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new()
        .add_toml_file_optional(dir.path().join("missing.toml"))
        .add_toml_str("");
    assert_eq!(
        loader.format_loaded_files(),
        vec!["1. [string] <string>".to_string()]
    );
    assert!(loader.build().is_ok());
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("modlist.toml");
    std::fs::write(&path, "[modlist]\npage_size = 12\n").unwrap();

    let loader = ConfigLoader::new().add_toml_file(&path);
    assert_eq!(loader.loaded_files(), vec![("file".to_string(), path)]);
    assert_eq!(loader.build().unwrap().modlist.page_size, 12);
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[paths]
data_dir = "/srv/modlist"

[[games]]
identifier = "valheim"
title = "Valheim"
path = "/games/valheim"
"#,
    )
    .unwrap();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    games.valheim                  = Valheim (/games/valheim)
    global.file_log_level          = 4
    global.json_log                = false
    global.log_file                =
    global.output_log_level        = 3
    modlist.page_size              = 40
    paths.data_dir                 = /srv/modlist
    thunderstore.base_url          = https://thunderstore.io
    thunderstore.excluded_packages = 13
    thunderstore.progress          = true
    thunderstore.timeout_secs      = 60
    ");
}

#[test]
fn test_paths_helpers() {
    let paths = PathsConfig {
        data_dir: Some(PathBuf::from("/srv/modlist")),
    };
    assert_eq!(paths.games_dir().unwrap(), PathBuf::from("/srv/modlist/Games"));
    assert_eq!(
        paths.persistence_file().unwrap(),
        PathBuf::from("/srv/modlist/persistence.json")
    );
    assert_eq!(
        paths.config_file().unwrap(),
        PathBuf::from("/srv/modlist/modlist.toml")
    );
}

#[test]
fn test_unresolved_paths_error() {
    let paths = PathsConfig::default();
    let err = paths.data_dir().unwrap_err();
    assert!(err.to_string().contains("data_dir"));
}

#[test]
fn test_resolve_fills_data_dir() {
    let mut paths = PathsConfig::default();
    paths.resolve();
    assert!(paths.data_dir.is_some());

    let mut explicit = PathsConfig {
        data_dir: Some(PathBuf::from("/x")),
    };
    explicit.resolve();
    assert_eq!(explicit.data_dir, Some(PathBuf::from("/x")));
}
