//! Sitemap parser - Fetch and parse XML sitemaps and sitemap indexes.
//!
//! This crate downloads (or accepts) a sitemap document, classifies it as a
//! `<sitemapindex>` or a `<urlset>`, exposes its children as lazily
//! iterated, validated records, and serializes them to JSON or CSV.
//!
//! # Example
//!
//! ```
//! use sitemap_parser::SiteMapParser;
//!
//! let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <changefreq>daily</changefreq>
//!   </url>
//! </urlset>"#;
//!
//! let parser = SiteMapParser::from_xml(xml)?;
//! assert!(parser.has_urls());
//! for url in parser.get_urls()? {
//!     println!("{}", url?.loc());
//! }
//! # Ok::<(), sitemap_parser::SitemapError>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, URL normalization and location validation
//! - [`error`]: Error types and Result alias
//! - [`http`]: Fetcher collaborator (the [`http::Fetch`] seam)
//! - [`xml`]: Element adapter over the XML DOM
//! - [`records`]: Validated record types (`Sitemap`, `Url`)
//! - [`sitemap_index`] / [`url_set`]: Lazy, restartable record collections
//! - [`parser`]: The `SiteMapParser` facade
//! - [`exporters`]: JSON and CSV exporters
//! - [`cli`]: Command-line interface for the `smapper` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod exporters;
pub mod http;
pub mod parser;
pub mod records;
pub mod sitemap_index;
pub mod url_set;
pub mod xml;

// Re-export the main surface
pub use error::{Result, SitemapError, ValidationError};
pub use exporters::{CsvExporter, Exporter, JsonExporter};
pub use http::{Fetch, HttpFetcher};
pub use parser::{DocumentKind, SiteMapParser};
pub use records::{ChangeFreq, FieldValue, Record, Sitemap, Url};
pub use sitemap_index::SitemapIndex;
pub use url_set::UrlSet;
