//! HTTP fetcher collaborator for downloading sitemap documents.
//!
//! The parser facade only needs "bytes for a URI"; that seam is the
//! [`Fetch`] trait so tests and embedders can substitute their own
//! transport (or a cache) without touching parsing code.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{Result, SitemapError};

/// User agent string identifying this parser.
const USER_AGENT: &str = concat!("smapper/", env!("CARGO_PKG_VERSION"));

/// Maximum number of input characters echoed into debug logs.
const LOG_PREVIEW_CHARS: usize = 256;

/// Capability to retrieve raw bytes for a URI.
pub trait Fetch {
    /// Fetch the document behind `uri`.
    ///
    /// # Errors
    /// Returns `SitemapError::Fetch` on transport failure and
    /// `SitemapError::FetchStatus` on a non-success HTTP status.
    fn fetch(&self, uri: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher backed by reqwest.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout and user agent.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/xml;charset=utf-8"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        tracing::info!(uri, "Requesting sitemap data");

        let response = self
            .client
            .get(uri)
            .send()
            .map_err(|source| SitemapError::Fetch {
                uri: uri.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(uri, status = %status, "Sitemap request failed");
            return Err(SitemapError::FetchStatus {
                uri: uri.to_string(),
                status,
            });
        }

        let bytes = response.bytes().map_err(|source| SitemapError::Fetch {
            uri: uri.to_string(),
            source,
        })?;

        tracing::debug!(uri, len = bytes.len(), "Received sitemap data");
        Ok(bytes.to_vec())
    }
}

/// Decode downloaded bytes as UTF-8 text.
///
/// Invalid sequences are replaced rather than rejected; the XML parser will
/// report a syntax error if the result is not a usable document. Logs a
/// truncated preview of the input for diagnostics.
#[must_use]
pub fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    let text = String::from_utf8_lossy(bytes).into_owned();

    let preview: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    tracing::debug!(context, preview = %preview, "Decoded document bytes");

    text
}
