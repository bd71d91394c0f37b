//! The `<urlset>` collection: lazily produces [`Url`] records.

use roxmltree::{Document, Node};

use crate::error::{Result, SitemapError, ValidationError};
use crate::parser::DocumentKind;
use crate::records::Url;
use crate::xml::{element_children, get_tag_name, text_content};

/// Fields recognized on a `<url>` element. Unrecognized child tags are
/// ignored for forward compatibility with sitemap extensions.
const ALLOWED_FIELDS: [&str; 4] = ["loc", "lastmod", "changefreq", "priority"];

/// Represents a `<urlset>` document.
///
/// Owns the document text; every call to [`iter`](Self::iter) walks the
/// tree afresh, so two iterators obtained from the same set progress
/// independently and always start from the first child.
#[derive(Debug, Clone)]
pub struct UrlSet {
    xml: String,
}

impl UrlSet {
    /// Create a URL set from document text.
    ///
    /// # Errors
    /// `SitemapError::Syntax` if the text is not well-formed XML,
    /// `SitemapError::WrongKind` if the root is a `<sitemapindex>`, and
    /// `SitemapError::UnknownDocumentKind` for any other root element.
    pub fn new(xml: impl Into<String>) -> Result<Self> {
        let xml = xml.into();

        let root_name = {
            let doc = Document::parse(&xml)?;
            get_tag_name(doc.root_element()).to_string()
        };
        match root_name.as_str() {
            "urlset" => Ok(Self { xml }),
            "sitemapindex" => Err(SitemapError::WrongKind {
                requested: DocumentKind::UrlSet,
                actual: DocumentKind::SitemapIndex,
            }),
            other => Err(SitemapError::UnknownDocumentKind {
                tag_name: other.to_string(),
            }),
        }
    }

    /// Iterate over the `<url>` children in document order.
    ///
    /// Each child element becomes a validated [`Url`]; a malformed child
    /// yields an `Err` and ends the sequence there.
    #[must_use]
    pub fn iter(&self) -> UrlIter<'_> {
        tracing::debug!("Generating urls from url set");
        UrlIter::new(&self.xml)
    }
}

impl<'a> IntoIterator for &'a UrlSet {
    type Item = Result<Url>;
    type IntoIter = UrlIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Create a [`Url`] record from a `<url>` element.
///
/// Captures child tags named in the allowed field list and ignores
/// everything else, then builds the record field by field so each value is
/// validated on assignment.
///
/// # Errors
/// `ValidationError` if `loc` is missing or a present field value is
/// malformed.
pub fn url_from_element(element: Node<'_, '_>) -> std::result::Result<Url, ValidationError> {
    let mut fields: Vec<(&str, String)> = Vec::new();

    for child in element_children(element) {
        let name = get_tag_name(child);
        if let Some(&known) = ALLOWED_FIELDS.iter().find(|&&f| f == name) {
            if let Some(value) = text_content(child) {
                fields.push((known, value));
            }
        }
    }

    let loc = fields
        .iter()
        .find(|(name, _)| *name == "loc")
        .map(|(_, value)| value.clone())
        .ok_or(ValidationError::MissingLocation)?;

    let mut url = Url::new(&loc)?;
    for (name, value) in &fields {
        match *name {
            "lastmod" => url.set_lastmod(value)?,
            "changefreq" => url.set_changefreq(value)?,
            "priority" => url.set_priority_str(value)?,
            _ => {}
        }
    }

    tracing::debug!(loc = %url.loc(), "Built url record");
    Ok(url)
}

/// Lazy iterator over the records of a [`UrlSet`].
///
/// Holds its own parse of the document, so the collection itself carries no
/// cursor state.
pub struct UrlIter<'a> {
    doc: Option<Document<'a>>,
    parse_error: Option<SitemapError>,
    pos: usize,
}

impl<'a> UrlIter<'a> {
    fn new(xml: &'a str) -> Self {
        // The collection only holds text that already parsed once, so the
        // error path is unreachable in practice but still surfaced cleanly.
        match Document::parse(xml) {
            Ok(doc) => Self {
                doc: Some(doc),
                parse_error: None,
                pos: 0,
            },
            Err(e) => Self {
                doc: None,
                parse_error: Some(e.into()),
                pos: 0,
            },
        }
    }
}

impl Iterator for UrlIter<'_> {
    type Item = Result<Url>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.parse_error.take() {
            return Some(Err(err));
        }

        let doc = self.doc.as_ref()?;
        let child = element_children(doc.root_element()).nth(self.pos)?;
        self.pos += 1;

        match url_from_element(child) {
            Ok(url) => Some(Ok(url)),
            Err(e) => {
                // A malformed record aborts the sequence at that element.
                self.doc = None;
                Some(Err(e.into()))
            }
        }
    }
}
