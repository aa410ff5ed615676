// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory collaborators for unit tests.
//!
//! Mocks record the engine's status flags at the moment they are called so
//! tests can assert what was visible during a suspension point.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{Notify, watch};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use super::{ModRepository, PathProbe, PersistenceStore};
use crate::package::{Package, PackageVersion};

/// Scriptable [`ModRepository`].
#[derive(Default)]
pub(crate) struct MockRepository {
    catalog: Option<Vec<Package>>,
    install_result: Option<PackageVersion>,
    install_gate: Option<Arc<Notify>>,
    pub(crate) fetch_calls: AtomicUsize,
    pub(crate) install_calls: AtomicUsize,
    pub(crate) latest_calls: AtomicUsize,
    flag_probe: Mutex<Option<watch::Receiver<bool>>>,
    pub(crate) observed_flags: Mutex<Vec<bool>>,
}

impl MockRepository {
    /// A repository whose fetches fail until a catalog is set.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_catalog(mut self, catalog: Vec<Package>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub(crate) fn with_install_result(mut self, version: PackageVersion) -> Self {
        self.install_result = Some(version);
        self
    }

    /// Makes `install_by_name` wait until the gate is notified.
    pub(crate) fn with_install_gate(mut self, gate: Arc<Notify>) -> Self {
        self.install_gate = Some(gate);
        self
    }

    /// Records the flag's value on every fetch or install call.
    pub(crate) fn observe(&self, flag: watch::Receiver<bool>) {
        *self.flag_probe.lock().unwrap() = Some(flag);
    }

    fn record_flag(&self) {
        if let Some(rx) = self.flag_probe.lock().unwrap().as_ref() {
            self.observed_flags.lock().unwrap().push(*rx.borrow());
        }
    }

    pub(crate) fn observed(&self) -> Vec<bool> {
        self.observed_flags.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModRepository for MockRepository {
    async fn fetch_catalog(&self, game_id: &str) -> Result<Vec<Package>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.record_flag();
        tokio::task::yield_now().await;
        self.catalog
            .clone()
            .ok_or_else(|| anyhow::anyhow!("community '{game_id}' unavailable"))
    }

    async fn fetch_latest_version(
        &self,
        _game_id: &str,
        owner: &str,
        name: &str,
    ) -> Result<PackageVersion> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        if owner == "Broken" {
            anyhow::bail!("no versions for {owner}-{name}");
        }
        Ok(PackageVersion::new(owner, name, "1.0.0"))
    }

    async fn install_by_name(
        &self,
        _game_title: &str,
        game_id: &str,
        full_name: &str,
    ) -> Result<PackageVersion> {
        self.install_calls.fetch_add(1, Ordering::SeqCst);
        self.record_flag();
        if let Some(gate) = &self.install_gate {
            gate.notified().await;
        }
        self.install_result
            .clone()
            .ok_or_else(|| anyhow::anyhow!("{full_name} not found in {game_id}"))
    }
}

/// [`PathProbe`] answering from fixed sets of paths.
#[derive(Default)]
pub(crate) struct MockProbe {
    pub(crate) existing: BTreeSet<PathBuf>,
    pub(crate) with_loader: BTreeSet<PathBuf>,
    pub(crate) failing: BTreeSet<PathBuf>,
}

#[async_trait]
impl PathProbe for MockProbe {
    async fn path_exists(&self, path: &Path, _is_dir: bool) -> Result<bool> {
        if self.failing.contains(path) {
            anyhow::bail!("permission denied: {}", path.display());
        }
        Ok(self.existing.contains(path))
    }

    async fn is_mod_loader_installed(&self, path: &Path) -> Result<bool> {
        Ok(self.with_loader.contains(path))
    }
}

/// [`PersistenceStore`] that keeps everything in memory.
#[derive(Default)]
pub(crate) struct MemoryPersistence {
    pub(crate) favourites: Mutex<Vec<String>>,
    pub(crate) saves: AtomicUsize,
    pub(crate) fail_save: bool,
}

impl MemoryPersistence {
    pub(crate) fn with_favourites(ids: &[&str]) -> Self {
        Self {
            favourites: Mutex::new(ids.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl PersistenceStore for MemoryPersistence {
    async fn favourite_games(&self) -> Result<Vec<String>> {
        Ok(self.favourites.lock().unwrap().clone())
    }

    async fn set_favourite_games(&self, ids: Vec<String>) -> Result<()> {
        *self.favourites.lock().unwrap() = ids;
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        if self.fail_save {
            anyhow::bail!("read-only filesystem");
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs a synchronous closure while capturing WARN+ tracing output.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .with_target(false)
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.lock().unwrap()).to_string();
    (value, logs)
}
