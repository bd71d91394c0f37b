//! Error types for the sitemap parser.
//!
//! Uses the dual-error pattern: `SitemapError` for library consumers with
//! full context, and `ValidationError` for field-level failures raised
//! while constructing records.

use thiserror::Error;

use crate::parser::DocumentKind;
use crate::records::ChangeFreq;

/// Main error type for the sitemap parser library.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// HTTP client setup failed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Network or transport failure while fetching a sitemap.
    #[error("Failed to fetch {uri}: {source}")]
    Fetch {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("Unexpected HTTP status {status} for {uri}")]
    FetchStatus {
        uri: String,
        status: reqwest::StatusCode,
    },

    /// The document is not well-formed XML.
    #[error("XML syntax error: {0}")]
    Syntax(#[from] roxmltree::Error),

    /// The root element is neither `<sitemapindex>` nor `<urlset>`.
    #[error("Unrecognized root element <{tag_name}>: expected <sitemapindex> or <urlset>")]
    UnknownDocumentKind { tag_name: String },

    /// An accessor for one collection kind was called on a document of the other kind.
    #[error("Requested {requested} records from a <{actual}> document")]
    WrongKind {
        requested: DocumentKind,
        actual: DocumentKind,
    },

    /// A record field violated the sitemap protocol's constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Field-level validation failure raised during record construction.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Required `<loc>` element is missing or empty.
    #[error("Missing required <loc> element")]
    MissingLocation,

    /// `loc` does not look like an absolute http(s) URL.
    #[error("'{0}' is not a valid URL: expected it to start with http:// or https://")]
    InvalidLocation(String),

    /// `changefreq` is not one of the allowed values.
    #[error("'{value}' is not an allowed changefreq value: {names:?}", value = .0, names = ChangeFreq::NAMES)]
    InvalidChangeFreq(String),

    /// `priority` is a number outside the closed range [0.0, 1.0].
    #[error("Priority {0} is not between 0.0 and 1.0")]
    PriorityOutOfRange(f64),

    /// `priority` is not representable as a number.
    #[error("'{0}' is not a valid priority value")]
    InvalidPriority(String),

    /// `lastmod` could not be parsed as a W3C/ISO-8601 timestamp.
    #[error("'{0}' is not a valid lastmod timestamp")]
    InvalidLastMod(String),
}

/// Result type alias for sitemap parser operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_rejected_value() {
        let err = ValidationError::InvalidLocation("ftp://example.com".to_string());
        assert!(err.to_string().contains("ftp://example.com"));

        let err = ValidationError::InvalidChangeFreq("fortnightly".to_string());
        assert!(err.to_string().contains("fortnightly"));
        assert!(err.to_string().contains("daily"));

        let err = ValidationError::PriorityOutOfRange(1.5);
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_wrong_kind_names_actual_kind() {
        let err = SitemapError::WrongKind {
            requested: DocumentKind::SitemapIndex,
            actual: DocumentKind::UrlSet,
        };
        assert_eq!(
            err.to_string(),
            "Requested sitemapindex records from a <urlset> document"
        );
    }

    #[test]
    fn test_validation_error_converts_to_sitemap_error() {
        let err = SitemapError::from(ValidationError::MissingLocation);
        assert!(matches!(err, SitemapError::Validation(_)));
        assert_eq!(err.to_string(), "Missing required <loc> element");
    }
}
