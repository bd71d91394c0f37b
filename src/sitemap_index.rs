//! The `<sitemapindex>` collection: lazily produces [`Sitemap`] records.

use roxmltree::{Document, Node};

use crate::error::{Result, SitemapError, ValidationError};
use crate::parser::DocumentKind;
use crate::records::Sitemap;
use crate::xml::{element_children, get_tag_name, text_content};

/// Represents a `<sitemapindex>` document.
///
/// Owns the document text; every call to [`iter`](Self::iter) walks the
/// tree afresh, so two iterators obtained from the same index progress
/// independently and always start from the first child.
#[derive(Debug, Clone)]
pub struct SitemapIndex {
    xml: String,
}

impl SitemapIndex {
    /// Create a sitemap index from document text.
    ///
    /// # Errors
    /// `SitemapError::Syntax` if the text is not well-formed XML,
    /// `SitemapError::WrongKind` if the root is a `<urlset>`, and
    /// `SitemapError::UnknownDocumentKind` for any other root element.
    pub fn new(xml: impl Into<String>) -> Result<Self> {
        let xml = xml.into();

        let root_name = {
            let doc = Document::parse(&xml)?;
            get_tag_name(doc.root_element()).to_string()
        };
        match root_name.as_str() {
            "sitemapindex" => Ok(Self { xml }),
            "urlset" => Err(SitemapError::WrongKind {
                requested: DocumentKind::SitemapIndex,
                actual: DocumentKind::UrlSet,
            }),
            other => Err(SitemapError::UnknownDocumentKind {
                tag_name: other.to_string(),
            }),
        }
    }

    /// Iterate over the `<sitemap>` children in document order.
    ///
    /// Each child element becomes a validated [`Sitemap`]; a malformed
    /// child yields an `Err` and ends the sequence there.
    #[must_use]
    pub fn iter(&self) -> SitemapIter<'_> {
        tracing::debug!("Generating sitemaps from sitemap index");
        SitemapIter::new(&self.xml)
    }
}

impl<'a> IntoIterator for &'a SitemapIndex {
    type Item = Result<Sitemap>;
    type IntoIter = SitemapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Create a [`Sitemap`] record from a `<sitemap>` element.
///
/// Recognized child tags are `loc` and `lastmod`; anything else (sitemap
/// extensions) is ignored.
///
/// # Errors
/// `ValidationError` if `loc` is missing or a present field value is
/// malformed.
pub fn sitemap_from_element(element: Node<'_, '_>) -> std::result::Result<Sitemap, ValidationError> {
    let mut loc = None;
    let mut lastmod = None;

    for child in element_children(element) {
        match get_tag_name(child) {
            "loc" => loc = text_content(child),
            "lastmod" => lastmod = text_content(child),
            _ => {}
        }
    }

    let loc = loc.ok_or(ValidationError::MissingLocation)?;
    let mut sitemap = Sitemap::new(&loc)?;
    if let Some(value) = lastmod {
        sitemap.set_lastmod(&value)?;
    }

    tracing::debug!(loc = %sitemap.loc(), "Built sitemap record");
    Ok(sitemap)
}

/// Lazy iterator over the records of a [`SitemapIndex`].
///
/// Holds its own parse of the document, so the collection itself carries no
/// cursor state.
pub struct SitemapIter<'a> {
    doc: Option<Document<'a>>,
    parse_error: Option<SitemapError>,
    pos: usize,
}

impl<'a> SitemapIter<'a> {
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

impl Iterator for SitemapIter<'_> {
    type Item = Result<Sitemap>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.parse_error.take() {
            return Some(Err(err));
        }

        let doc = self.doc.as_ref()?;
        let child = element_children(doc.root_element()).nth(self.pos)?;
        self.pos += 1;

        match sitemap_from_element(child) {
            Ok(sitemap) => Some(Ok(sitemap)),
            Err(e) => {
                // A malformed record aborts the sequence at that element.
                self.doc = None;
                Some(Err(e.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INDEX_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap>
    <loc>https://www.example.com/sitemap1.xml</loc>
    <lastmod>2005-01-01</lastmod>
  </sitemap>
  <sitemap>
    <loc>https://www.example.com/sitemap2.xml</loc>
  </sitemap>
</sitemapindex>"#;

    #[test]
    fn test_new_accepts_sitemapindex_root() {
        assert!(SitemapIndex::new(INDEX_XML).is_ok());
    }

    #[test]
    fn test_new_rejects_urlset_root() {
        let err = SitemapIndex::new("<urlset/>").unwrap_err();
        assert!(matches!(err, SitemapError::WrongKind { .. }));
    }

    #[test]
    fn test_new_rejects_unknown_root() {
        let err = SitemapIndex::new("<rss/>").unwrap_err();
        assert!(matches!(err, SitemapError::UnknownDocumentKind { .. }));
    }

    #[test]
    fn test_iter_yields_records_in_document_order() {
        let index = SitemapIndex::new(INDEX_XML).unwrap();
        let sitemaps: Vec<_> = index.iter().collect::<Result<_>>().unwrap();

        assert_eq!(sitemaps.len(), 2);
        assert_eq!(sitemaps[0].loc(), "https://www.example.com/sitemap1.xml");
        assert_eq!(
            sitemaps[0].lastmod().map(|dt| dt.to_rfc3339()),
            Some("2005-01-01T00:00:00+00:00".to_string())
        );
        assert_eq!(sitemaps[1].loc(), "https://www.example.com/sitemap2.xml");
        assert_eq!(sitemaps[1].lastmod(), None);
    }

    #[test]
    fn test_iter_is_restartable() {
        let index = SitemapIndex::new(INDEX_XML).unwrap();

        let mut first = index.iter();
        let mut second = index.iter();

        // Advancing one iterator does not move the other
        let a = first.next().unwrap().unwrap();
        first.next().unwrap().unwrap();
        assert!(first.next().is_none());

        let b = second.next().unwrap().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sitemap_from_element_missing_loc() {
        let xml = "<sitemap><lastmod>2005-01-01</lastmod></sitemap>";
        let doc = Document::parse(xml).unwrap();
        let err = sitemap_from_element(doc.root_element()).unwrap_err();
        assert_eq!(err, ValidationError::MissingLocation);
    }

    #[test]
    fn test_malformed_record_aborts_sequence() {
        let xml = r#"<sitemapindex>
  <sitemap><loc>https://example.com/a.xml</loc></sitemap>
  <sitemap><loc>not-a-url</loc></sitemap>
  <sitemap><loc>https://example.com/b.xml</loc></sitemap>
</sitemapindex>"#;
        let index = SitemapIndex::new(xml).unwrap();
        let mut iter = index.iter();

        assert!(iter.next().unwrap().is_ok());
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }
}
