// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use super::*;
use crate::backend::test_utils::MockRepository;

#[derive(Default)]
struct RecordingDialog {
    calls: Mutex<Vec<(&'static str, bool)>>,
}

impl InstallDialog for RecordingDialog {
    fn set_closable(&self, closable: bool) {
        self.calls.lock().unwrap().push(("closable", closable));
    }

    fn set_visible(&self, visible: bool) {
        self.calls.lock().unwrap().push(("visible", visible));
    }
}

fn lethal_company() -> Game {
    Game::new("lethal-company", "Lethal Company")
}

#[tokio::test]
async fn test_install_success_records_version() {
    let version = PackageVersion::new("Owen3H", "CSync", "5.0.1");
    let repo = Arc::new(MockRepository::new().with_install_result(version.clone()));
    let coordinator = InstallCoordinator::new(repo.clone());
    repo.observe(coordinator.subscribe_installing());

    let outcome = coordinator
        .install_mod("Owen3H-CSync", &lethal_company(), None)
        .await;

    assert_eq!(outcome, InstallOutcome::Installed(version.clone()));
    assert!(outcome.succeeded());
    assert_eq!(coordinator.last_installed(), Some(version));
    // Raised while the backend ran, lowered after
    assert_eq!(repo.observed(), [true]);
    assert!(!coordinator.installing());
}

#[tokio::test]
async fn test_install_failure_clears_flag() {
    let repo = Arc::new(MockRepository::new());
    let coordinator = InstallCoordinator::new(repo.clone());
    repo.observe(coordinator.subscribe_installing());

    let outcome = coordinator
        .install_mod("Nobody-Nothing", &lethal_company(), None)
        .await;

    assert_eq!(outcome, InstallOutcome::Failed);
    assert!(!outcome.succeeded());
    assert_eq!(repo.observed(), [true]);
    assert!(!coordinator.installing());
    assert!(coordinator.last_installed().is_none());
}

#[tokio::test]
async fn test_failure_keeps_previous_last_installed() {
    let version = PackageVersion::new("A", "One", "1.0.0");
    let ok = InstallCoordinator::new(Arc::new(
        MockRepository::new().with_install_result(version.clone()),
    ));
    ok.install_mod("A-One", &lethal_company(), None).await;

    let failing = InstallCoordinator {
        repository: Arc::new(MockRepository::new()),
        installing: Flag::new(),
        last_installed: watch::channel(ok.last_installed()).0,
    };
    failing.install_mod("B-Two", &lethal_company(), None).await;
    assert_eq!(failing.last_installed(), Some(version));
}

#[tokio::test]
async fn test_dialog_is_shown_and_restored() {
    let dialog = RecordingDialog::default();
    let coordinator = InstallCoordinator::new(Arc::new(MockRepository::new()));

    coordinator
        .install_mod("Nobody-Nothing", &lethal_company(), Some(&dialog))
        .await;

    assert_eq!(
        *dialog.calls.lock().unwrap(),
        [("closable", false), ("visible", true), ("closable", true)]
    );
}

#[tokio::test]
async fn test_second_install_is_rejected_while_busy() {
    let gate = Arc::new(Notify::new());
    let repo = Arc::new(
        MockRepository::new()
            .with_install_result(PackageVersion::new("A", "One", "1.0.0"))
            .with_install_gate(gate.clone()),
    );
    let coordinator = Arc::new(InstallCoordinator::new(repo.clone()));
    let mut installing = coordinator.subscribe_installing();

    let first = tokio::spawn({
        let coordinator = coordinator.clone();
        async move {
            let game = lethal_company();
            coordinator.install_mod("A-One", &game, None).await
        }
    });

    installing.wait_for(|busy| *busy).await.unwrap();
    let dialog = RecordingDialog::default();
    let second = coordinator
        .install_mod("B-Two", &lethal_company(), Some(&dialog))
        .await;

    assert_eq!(second, InstallOutcome::Busy);
    assert!(dialog.calls.lock().unwrap().is_empty());
    assert!(coordinator.installing());

    gate.notify_one();
    assert!(first.await.unwrap().succeeded());
    assert_eq!(repo.install_calls.load(Ordering::SeqCst), 1);
    assert!(!coordinator.installing());
}
