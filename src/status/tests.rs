// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;

#[test]
fn test_raise_lowers_on_drop() {
    let flag = Flag::new();
    let rx = flag.subscribe();
    {
        let _guard = flag.raise();
        assert!(*rx.borrow());
    }
    assert!(!flag.get());
}

#[test]
fn test_try_acquire_is_single_slot() {
    let flag = Flag::new();
    assert!(flag.try_acquire());
    assert!(!flag.try_acquire());
    flag.set(false);
    assert!(flag.try_acquire());
}

#[tokio::test]
async fn test_subscribers_see_transitions() {
    let flag = Flag::new();
    let mut rx = flag.subscribe();
    let waiter = tokio::spawn(async move {
        rx.wait_for(|raised| *raised).await.map(|v| *v).unwrap_or(false)
    });

    let guard = flag.raise();
    assert!(waiter.await.unwrap());
    drop(guard);
    assert!(!flag.get());
}
