// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP plumbing: shared client, JSON fetch and archive downloads.
//!
//! ```text
//! global_client()   OnceLock, connection pool, keep-alive
//! build_client(t)   same User-Agent, request timeout t
//!
//! fetch_json::<T>(client, url)   GET --> status check --> serde
//!
//! Downloader::new()
//!   .client() .url() .file() .progress() .silent()
//!        |
//!        v
//!   download() --> bytes written
//!     Bar     [=====>     ] 5MB/10MB
//!     Spinner * 5MB @ 1MB/s
//!     Silent  (none)
//!   partial file removed on any error path
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;

use crate::error::{ModlistResult, NetworkError};

/// Removes a partially written file on drop unless kept.
struct PartialFileGuard {
    path: PathBuf,
    keep: bool,
}

impl PartialFileGuard {
    const fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    const fn keep(&mut self) {
        self.keep = true;
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

fn user_agent() -> String {
    format!("modlist-rs/{}", env!("CARGO_PKG_VERSION"))
}

/// Process-wide client without a request timeout.
pub fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| build_client(None))
}

/// Builds a client with the crate User-Agent and an optional timeout.
///
/// Falls back to a default client if the builder rejects the settings.
#[must_use]
pub fn build_client(timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder().user_agent(user_agent());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| Client::new())
}

/// GETs `url` and deserializes the JSON body.
///
/// # Errors
///
/// Returns `NetworkError::HttpError` on a non-success status and
/// `NetworkError::Reqwest` if the request or decoding fails.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> ModlistResult<T> {
    let response = client.get(url).send().await.map_err(NetworkError::Reqwest)?;

    if !response.status().is_success() {
        return Err(NetworkError::HttpError {
            status: response.status().as_u16(),
            url: url.to_string(),
        }
        .into());
    }

    Ok(response.json().await.map_err(NetworkError::Reqwest)?)
}

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} {msg} {bytes} @ {binary_bytes_per_sec}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Progress display style for downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// Bar with size and ETA, spinner when the size is unknown.
    #[default]
    Bar,
    Spinner,
    Silent,
}

/// Streams a URL to a file.
#[derive(Debug)]
pub struct Downloader {
    client: Client,
    url: Option<String>,
    output_file: Option<PathBuf>,
    progress_display: ProgressDisplay,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: None,
            output_file: None,
            progress_display: ProgressDisplay::default(),
        }
    }

    /// Uses `client` instead of the global one.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    #[must_use]
    pub const fn progress(mut self, style: ProgressDisplay) -> Self {
        self.progress_display = style;
        self
    }

    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.progress_display = ProgressDisplay::Silent;
        self
    }

    fn create_progress_bar(&self, total_size: u64, label: String) -> Option<ProgressBar> {
        let pb = match self.progress_display {
            ProgressDisplay::Silent => return None,
            ProgressDisplay::Bar if total_size > 0 => {
                let pb = ProgressBar::new(total_size);
                pb.set_style(bar_style());
                pb
            }
            ProgressDisplay::Bar | ProgressDisplay::Spinner => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(spinner_style());
                pb
            }
        };
        pb.set_message(label);
        Some(pb)
    }

    /// Downloads to the configured file and returns the number of bytes written.
    ///
    /// Parent directories are created. The file is removed if anything fails
    /// after it was created.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if no URL or file is set, the request fails,
    /// the server answers with a non-success status, or writing fails.
    pub async fn download(&self) -> ModlistResult<u64> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()))?;
        let output = self
            .output_file
            .as_ref()
            .ok_or_else(|| NetworkError::DownloadFailed {
                url: url.clone(),
                message: "no output file specified".to_string(),
            })?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.clone(),
            }
            .into());
        }

        let total_size = response.content_length().unwrap_or(0);
        let label = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let progress_bar = self.create_progress_bar(total_size, label);

        if let Some(parent) = output.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| NetworkError::DownloadFailed {
                    url: url.clone(),
                    message: format!("failed to create {}: {e}", parent.display()),
                })?;
        }

        let mut file =
            tokio::fs::File::create(output)
                .await
                .map_err(|e| NetworkError::DownloadFailed {
                    url: url.clone(),
                    message: format!("failed to create {}: {e}", output.display()),
                })?;
        let mut guard = PartialFileGuard::new(output.clone());

        let mut written = 0u64;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(NetworkError::Reqwest)?;
            file.write_all(&chunk)
                .await
                .map_err(|e| NetworkError::DownloadFailed {
                    url: url.clone(),
                    message: format!("failed to write {}: {e}", output.display()),
                })?;
            written += chunk.len() as u64;

            if let Some(pb) = &progress_bar {
                pb.inc(chunk.len() as u64);
            }
        }

        file.flush().await.map_err(|e| NetworkError::DownloadFailed {
            url: url.clone(),
            message: format!("failed to flush {}: {e}", output.display()),
        })?;

        guard.keep();
        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        tracing::debug!(url = %url, path = %output.display(), bytes = written, "Downloaded");
        Ok(written)
    }
}
