// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

use super::*;
use crate::backend::test_utils::{MemoryPersistence, MockProbe};
use crate::error::{ModlistError, RegistryError};

fn probe_with(existing: &[&str], with_loader: &[&str]) -> MockProbe {
    MockProbe {
        existing: existing.iter().map(PathBuf::from).collect(),
        with_loader: with_loader.iter().map(PathBuf::from).collect(),
        failing: BTreeSet::new(),
    }
}

#[test]
fn test_game_from_definition() {
    let def: GameDefinition = toml_like_definition();
    let game = Game::from(def);
    assert_eq!(game.identifier, "lethal-company");
    assert_eq!(game.platform, ModPlatform::Thunderstore);
    assert!(game.flags.is_empty());
    assert!(game.mod_cache.is_none());
}

fn toml_like_definition() -> GameDefinition {
    serde_json::from_str(
        r#"{"identifier":"lethal-company","title":"Lethal Company","path":"/games/lc","aliases":["LC"]}"#,
    )
    .unwrap()
}

#[test]
fn test_definition_rejects_unknown_fields() {
    let result: Result<GameDefinition, _> =
        serde_json::from_str(r#"{"identifier":"x","title":"X","exe":"x.exe"}"#);
    assert!(result.is_err());
}

#[test]
fn test_matches_name_is_case_insensitive() {
    let game = Game::from(toml_like_definition());
    assert!(game.matches_name("LETHAL-COMPANY"));
    assert!(game.matches_name("lethal company"));
    assert!(game.matches_name("lc"));
    assert!(!game.matches_name("valheim"));
}

#[test]
fn test_builtin_games_have_unique_identifiers() {
    let games = builtin_games();
    let ids: BTreeSet<_> = games.iter().map(|g| g.identifier.as_str()).collect();
    assert_eq!(ids.len(), games.len());
    assert!(ids.contains("lethal-company"));
}

#[test]
fn test_platform_serde_names() {
    assert_eq!(
        serde_json::to_string(&ModPlatform::NexusMods).unwrap(),
        r#""NEXUS_MODS""#
    );
    assert_eq!(ModPlatform::Thunderstore.to_string(), "THUNDERSTORE");
}

#[tokio::test]
async fn test_initialize_marks_existing_path_installed() {
    let registry = GameRegistry::new();
    let probe = probe_with(&["/games/lc"], &[]);
    let persistence = MemoryPersistence::default();

    let count = registry
        .initialize(
            vec![Game::new("lethal-company", "Lethal Company").with_path("/games/lc")],
            &probe,
            &persistence,
        )
        .await;

    assert_eq!(count, 1);
    let game = registry.get("lethal-company").unwrap();
    assert!(game.installed());
    assert!(!game.favourited());
    assert!(!game.bepinex_setup());
}

#[tokio::test]
async fn test_initialize_resolves_all_flags() {
    let registry = GameRegistry::new();
    let probe = probe_with(&["/games/valheim"], &["/games/valheim"]);
    let persistence = MemoryPersistence::with_favourites(&["valheim", "palworld"]);

    registry
        .initialize(
            vec![
                Game::new("valheim", "Valheim").with_path("/games/valheim"),
                Game::new("palworld", "Palworld"),
                Game::new("subnautica", "Subnautica").with_path("/missing"),
            ],
            &probe,
            &persistence,
        )
        .await;

    let valheim = registry.get("valheim").unwrap();
    assert_eq!(
        valheim.flags,
        GameFlags::INSTALLED | GameFlags::FAVOURITED | GameFlags::BEPINEX_SETUP
    );
    assert_eq!(registry.get("palworld").unwrap().flags, GameFlags::FAVOURITED);
    assert!(registry.get("subnautica").unwrap().flags.is_empty());
}

#[tokio::test]
async fn test_initialize_clears_loader_flag_without_path() {
    let registry = GameRegistry::new();
    let mut stale = Game::new("palworld", "Palworld");
    stale.flags = GameFlags::INSTALLED | GameFlags::BEPINEX_SETUP;

    registry
        .initialize(vec![stale], &MockProbe::default(), &MemoryPersistence::default())
        .await;

    assert!(registry.get("palworld").unwrap().flags.is_empty());
}

#[tokio::test]
async fn test_initialize_treats_probe_failure_as_not_installed() {
    let registry = GameRegistry::new();
    let mut probe = probe_with(&[], &[]);
    probe.failing.insert(PathBuf::from("/locked"));

    registry
        .initialize(
            vec![Game::new("valheim", "Valheim").with_path("/locked")],
            &probe,
            &MemoryPersistence::default(),
        )
        .await;

    assert!(!registry.get("valheim").unwrap().installed());
}

#[tokio::test]
async fn test_initialize_preserves_cached_catalog() {
    let registry = GameRegistry::new();
    let probe = MockProbe::default();
    let persistence = MemoryPersistence::default();
    let games = || vec![Game::new("valheim", "Valheim")];

    registry.initialize(games(), &probe, &persistence).await;
    registry
        .update_cache("valheim", vec![Package::new("A", "One", 1)])
        .unwrap();

    registry.initialize(games(), &probe, &persistence).await;
    let cache = registry.cache("valheim").unwrap();
    assert_eq!(cache.len(), 1);
    assert_eq!(cache[0].full_name, "A-One");
}

#[tokio::test]
async fn test_initialize_replaces_contents() {
    let registry = GameRegistry::new();
    let probe = MockProbe::default();
    let persistence = MemoryPersistence::default();

    registry
        .initialize(
            vec![Game::new("valheim", "Valheim"), Game::new("palworld", "Palworld")],
            &probe,
            &persistence,
        )
        .await;
    let count = registry
        .initialize(vec![Game::new("palworld", "Palworld")], &probe, &persistence)
        .await;

    assert_eq!(count, 1);
    assert!(registry.get("valheim").is_none());
}

#[test]
fn test_update_cache_unknown_game() {
    let registry = GameRegistry::new();
    let err = registry
        .update_cache("nope", vec![Package::new("A", "One", 1)])
        .unwrap_err();
    assert!(matches!(
        err,
        ModlistError::Registry(ref e) if matches!(**e, RegistryError::GameNotFound(ref id) if id == "nope")
    ));
    assert!(registry.invalidate_cache("nope").is_err());
}

#[tokio::test]
async fn test_invalidate_cache_clears_catalog() {
    let registry = GameRegistry::new();
    registry
        .initialize(
            vec![Game::new("valheim", "Valheim")],
            &MockProbe::default(),
            &MemoryPersistence::default(),
        )
        .await;
    registry.update_cache("valheim", Vec::new()).unwrap();
    assert!(registry.cache("valheim").is_some());

    registry.invalidate_cache("valheim").unwrap();
    assert!(registry.cache("valheim").is_none());
}

#[tokio::test]
async fn test_set_active_game_prefers_registry_entry() {
    let registry = GameRegistry::new();
    registry
        .initialize(
            vec![Game::new("valheim", "Valheim").with_path("/games/valheim")],
            &probe_with(&["/games/valheim"], &[]),
            &MemoryPersistence::default(),
        )
        .await;

    let active = registry.set_active_game(Game::new("valheim", "stale title"));
    assert_eq!(active.title, "Valheim");
    assert!(active.installed());

    let unknown = registry.set_active_game(Game::new("rounds", "ROUNDS"));
    assert_eq!(unknown.title, "ROUNDS");
    assert!(registry.get("rounds").is_none());
}

#[tokio::test]
async fn test_toggle_favourite_persists_ids() {
    let registry = GameRegistry::new();
    let persistence = MemoryPersistence::with_favourites(&["palworld"]);
    registry
        .initialize(
            vec![Game::new("valheim", "Valheim"), Game::new("palworld", "Palworld")],
            &MockProbe::default(),
            &persistence,
        )
        .await;

    assert!(registry.toggle_favourite("valheim", &persistence).await.unwrap());
    assert_eq!(
        *persistence.favourites.lock().unwrap(),
        ["palworld".to_string(), "valheim".to_string()]
    );

    assert!(!registry.toggle_favourite("palworld", &persistence).await.unwrap());
    assert_eq!(registry.favourite_ids(), ["valheim".to_string()]);
    assert_eq!(persistence.saves.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_toggle_favourite_keeps_flip_when_save_fails() {
    let registry = GameRegistry::new();
    let persistence = MemoryPersistence {
        fail_save: true,
        ..MemoryPersistence::default()
    };
    registry
        .initialize(
            vec![Game::new("valheim", "Valheim")],
            &MockProbe::default(),
            &persistence,
        )
        .await;

    assert!(registry.toggle_favourite("valheim", &persistence).await.unwrap());
    assert!(registry.get("valheim").unwrap().favourited());
    assert_eq!(persistence.saves.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_toggle_favourite_unknown_game() {
    let registry = GameRegistry::new();
    let persistence = MemoryPersistence::default();
    assert!(registry.toggle_favourite("nope", &persistence).await.is_err());
    assert!(persistence.favourites.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_alias() {
    let registry = GameRegistry::new();
    let games = builtin_games().into_iter().map(Game::from).collect();
    registry
        .initialize(games, &MockProbe::default(), &MemoryPersistence::default())
        .await;

    assert_eq!(registry.find("LC").unwrap().identifier, "lethal-company");
    assert_eq!(registry.find("Risk of Rain 2").unwrap().identifier, "riskofrain2");
    assert!(registry.find("minecraft").is_none());
}
