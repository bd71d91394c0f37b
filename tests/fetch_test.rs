//! Fetcher and CLI tests against a mock HTTP server.
//!
//! The fetcher is blocking, so mock-server tests run the client through
//! `spawn_blocking` inside the tokio runtime wiremock needs.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sitemap_parser::{Fetch, HttpFetcher, Result, SiteMapParser, SitemapError};

const URLSET_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/</loc>
    <lastmod>2024-01-01</lastmod>
    <changefreq>daily</changefreq>
    <priority>0.8</priority>
  </url>
</urlset>"#;

async fn serve_sitemap(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_from_uri_fetches_and_parses() {
    let server = serve_sitemap(200, URLSET_BODY).await;
    let uri = format!("{}/sitemap.xml", server.uri());

    let parser: Result<SiteMapParser> =
        tokio::task::spawn_blocking(move || SiteMapParser::from_uri(&uri))
            .await
            .unwrap();

    let parser = parser.unwrap();
    assert!(parser.has_urls());
    let first = parser
        .get_urls()
        .unwrap()
        .iter()
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(first.loc(), "https://example.com/");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_non_success_status() {
    let server = serve_sitemap(404, "not found").await;
    let uri = format!("{}/sitemap.xml", server.uri());

    let result: Result<Vec<u8>> = tokio::task::spawn_blocking(move || {
        let fetcher = HttpFetcher::new()?;
        fetcher.fetch(&uri)
    })
    .await
    .unwrap();

    match result {
        Err(SitemapError::FetchStatus { status, .. }) => assert_eq!(status.as_u16(), 404),
        other => panic!("Expected FetchStatus error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_connection_error() {
    // Port is bound then dropped, so nothing is listening. An unpooled
    // server is required: pooled `MockServer::start` keeps listening
    // after drop.
    let uri = {
        let server = MockServer::builder().start().await;
        format!("{}/sitemap.xml", server.uri())
    };

    let result: Result<Vec<u8>> = tokio::task::spawn_blocking(move || {
        let fetcher = HttpFetcher::new()?;
        fetcher.fetch(&uri)
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(SitemapError::Fetch { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_fetches_from_server() {
    let server = serve_sitemap(200, URLSET_BODY).await;
    let uri = format!("{}/sitemap.xml", server.uri());

    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("smapper")
            .unwrap()
            .arg(&uri)
            .assert()
            .success()
            .stdout(predicate::str::contains("https://example.com/"));
    })
    .await
    .unwrap();
}

#[test]
fn test_cli_file_mode_json() {
    Command::cargo_bin("smapper")
        .unwrap()
        .args(["--file", "tests/fixtures/urlset_a.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://www.example.com/page/a/1"))
        .stdout(predicate::str::contains("\"priority\":0.8"));
}

#[test]
fn test_cli_file_mode_csv() {
    Command::cargo_bin("smapper")
        .unwrap()
        .args(["--file", "tests/fixtures/sitemap_index.xml", "--exporter", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\"loc\",\"lastmod\""));
}

#[test]
fn test_cli_missing_file_fails() {
    Command::cargo_bin("smapper")
        .unwrap()
        .args(["--file", "tests/fixtures/does_not_exist.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_cli_unknown_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.xml");
    std::fs::write(&path, "<rss version=\"2.0\"/>").unwrap();

    Command::cargo_bin("smapper")
        .unwrap()
        .args(["--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized root element"));
}
