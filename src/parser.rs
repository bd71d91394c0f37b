//! Parser facade: fetch, parse, classify, and expose a sitemap document.

use std::fmt;

use roxmltree::{Document, Node};

use crate::error::{Result, SitemapError};
use crate::http::{bytes_to_string, Fetch, HttpFetcher};
use crate::sitemap_index::SitemapIndex;
use crate::url_set::UrlSet;
use crate::xml::get_tag_name;

/// The two recognized sitemap document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A `<sitemapindex>` root listing other sitemap documents.
    SitemapIndex,
    /// A `<urlset>` root listing page URLs.
    UrlSet,
}

impl DocumentKind {
    /// The root element's local tag name for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SitemapIndex => "sitemapindex",
            Self::UrlSet => "urlset",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a root element by its local tag name.
///
/// The two checks are independent; a root that is neither kind yields
/// `None` and the caller fails closed instead of assuming a url set.
#[must_use]
pub fn classify(root: Node<'_, '_>) -> Option<DocumentKind> {
    match get_tag_name(root) {
        "sitemapindex" => Some(DocumentKind::SitemapIndex),
        "urlset" => Some(DocumentKind::UrlSet),
        _ => None,
    }
}

/// Exactly one collection survives construction.
#[derive(Debug, Clone)]
enum Parsed {
    Index(SitemapIndex),
    Urls(UrlSet),
}

/// Parses a sitemap or sitemap index and exposes the matching collection.
///
/// Construction fetches (or accepts) the document text, parses it, and
/// classifies the root once; the resulting kind never changes. Either the
/// whole object is usable or construction fails.
///
/// # Example
/// ```
/// use sitemap_parser::SiteMapParser;
///
/// let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://example.com/</loc></url>
/// </urlset>"#;
///
/// let parser = SiteMapParser::from_xml(xml)?;
/// assert!(parser.has_urls());
/// assert!(!parser.has_sitemaps());
/// # Ok::<(), sitemap_parser::SitemapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SiteMapParser {
    parsed: Parsed,
}

impl SiteMapParser {
    /// Fetch `uri` over HTTP and parse the response body.
    ///
    /// # Errors
    /// Fetch, syntax, and classification failures all abort construction.
    pub fn from_uri(uri: &str) -> Result<Self> {
        let fetcher = HttpFetcher::new()?;
        Self::from_uri_with(uri, &fetcher)
    }

    /// Fetch `uri` through the given fetcher and parse the response body.
    ///
    /// The seam for injecting a cache-backed or mock transport.
    pub fn from_uri_with(uri: &str, fetcher: &dyn Fetch) -> Result<Self> {
        let bytes = fetcher.fetch(uri)?;
        Self::from_xml(bytes_to_string(&bytes, uri))
    }

    /// Treat the input as literal XML text instead of a URI.
    ///
    /// # Errors
    /// `SitemapError::Syntax` for malformed XML and
    /// `SitemapError::UnknownDocumentKind` when the root element is neither
    /// `<sitemapindex>` nor `<urlset>`.
    pub fn from_xml(xml: impl Into<String>) -> Result<Self> {
        let xml = xml.into();

        let kind = {
            let doc = Document::parse(&xml)?;
            let root = doc.root_element();
            classify(root).ok_or_else(|| SitemapError::UnknownDocumentKind {
                tag_name: get_tag_name(root).to_string(),
            })?
        };

        let parsed = match kind {
            DocumentKind::SitemapIndex => {
                tracing::info!("Root element is sitemap index");
                Parsed::Index(SitemapIndex::new(xml)?)
            }
            DocumentKind::UrlSet => {
                tracing::info!("Root element is url set");
                Parsed::Urls(UrlSet::new(xml)?)
            }
        };

        Ok(Self { parsed })
    }

    /// The kind decided at construction.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        match self.parsed {
            Parsed::Index(_) => DocumentKind::SitemapIndex,
            Parsed::Urls(_) => DocumentKind::UrlSet,
        }
    }

    /// Whether the document contained sitemaps (a `<sitemapindex>` root).
    #[must_use]
    pub fn has_sitemaps(&self) -> bool {
        self.kind() == DocumentKind::SitemapIndex
    }

    /// Whether the document contained urls (a `<urlset>` root).
    #[must_use]
    pub fn has_urls(&self) -> bool {
        self.kind() == DocumentKind::UrlSet
    }

    /// Retrieve the sitemap collection.
    ///
    /// Check [`has_sitemaps`](Self::has_sitemaps) first to avoid the error
    /// path.
    ///
    /// # Errors
    /// `SitemapError::WrongKind` if the document is a `<urlset>`.
    pub fn get_sitemaps(&self) -> Result<&SitemapIndex> {
        match &self.parsed {
            Parsed::Index(index) => Ok(index),
            Parsed::Urls(_) => Err(SitemapError::WrongKind {
                requested: DocumentKind::SitemapIndex,
                actual: DocumentKind::UrlSet,
            }),
        }
    }

    /// Retrieve the url collection.
    ///
    /// # Errors
    /// `SitemapError::WrongKind` if the document is a `<sitemapindex>`.
    pub fn get_urls(&self) -> Result<&UrlSet> {
        match &self.parsed {
            Parsed::Urls(urls) => Ok(urls),
            Parsed::Index(_) => Err(SitemapError::WrongKind {
                requested: DocumentKind::UrlSet,
                actual: DocumentKind::SitemapIndex,
            }),
        }
    }
}
