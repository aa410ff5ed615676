// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the network module using wiremock.

use modlist_rs::error::{ModlistError, NetworkError};
use modlist_rs::net::{self, Downloader};
use serde::Deserialize;
use tempfile::TempDir;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn http_status(err: ModlistError) -> u16 {
    match err {
        ModlistError::Network(boxed) => match *boxed {
            NetworkError::HttpError { status, .. } => status,
            other => panic!("Expected NetworkError::HttpError, got {other:?}"),
        },
        other => panic!("Expected ModlistError::Network, got {other:?}"),
    }
}

// =============================================================================
// fetch_json tests
// =============================================================================

#[derive(Debug, Deserialize, PartialEq)]
struct Entry {
    name: String,
}

#[tokio::test]
async fn test_fetch_json_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entries"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"name":"CSync"}]"#))
        .mount(&mock_server)
        .await;

    let url = format!("{}/entries", mock_server.uri());
    let entries: Vec<Entry> = net::fetch_json(net::global_client(), &url).await.unwrap();

    assert_eq!(
        entries,
        [Entry {
            name: "CSync".to_string()
        }]
    );
}

#[tokio::test]
async fn test_fetch_json_http_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let url = format!("{}/entries", mock_server.uri());
    let err = net::fetch_json::<Vec<Entry>>(net::global_client(), &url)
        .await
        .unwrap_err();
    assert_eq!(http_status(err), 503);
}

#[tokio::test]
async fn test_fetch_json_invalid_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/entries", mock_server.uri());
    let err = net::fetch_json::<Vec<Entry>>(net::global_client(), &url)
        .await
        .unwrap_err();
    assert!(matches!(err, ModlistError::Network(_)));
}

// =============================================================================
// Downloader tests
// =============================================================================

#[tokio::test]
async fn test_download_file_success() {
    let mock_server = MockServer::start().await;
    let content = b"PK\x03\x04 archive bytes";
    Mock::given(method("GET"))
        .and(path("/download/Owen3H/CSync/5.0.1/"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(&mock_server)
        .await;

    let dir = temp_dir();
    let output = dir.path().join("ModCache").join("Owen3H-CSync-5.0.1.zip");
    let written = Downloader::new()
        .url(format!("{}/download/Owen3H/CSync/5.0.1/", mock_server.uri()))
        .file(&output)
        .silent()
        .download()
        .await
        .unwrap();

    assert_eq!(written, content.len() as u64);
    assert_eq!(std::fs::read(&output).unwrap(), content);
}

#[tokio::test]
async fn test_download_http_error_leaves_no_file() {
    for status in [404, 500] {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        let dir = temp_dir();
        let output = dir.path().join("missing.zip");
        let err = Downloader::new()
            .url(format!("{}/missing.zip", mock_server.uri()))
            .file(&output)
            .silent()
            .download()
            .await
            .unwrap_err();

        assert_eq!(http_status(err), status);
        assert!(!output.exists());
    }
}

#[tokio::test]
async fn test_download_requires_url_and_file() {
    let err = Downloader::new().silent().download().await.unwrap_err();
    assert!(err.to_string().contains("no URL provided"));

    let err = Downloader::new()
        .url("http://127.0.0.1:9/never")
        .silent()
        .download()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no output file specified"));
}

#[tokio::test]
async fn test_download_with_custom_client() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = temp_dir();
    let output = dir.path().join("file.bin");
    Downloader::new()
        .client(net::build_client(Some(std::time::Duration::from_secs(5))))
        .url(format!("{}/file.bin", mock_server.uri()))
        .file(&output)
        .silent()
        .download()
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "ok");
}
