//! Configuration constants and validation functions for the sitemap parser.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ValidationError;

/// HTTP timeout in seconds.
///
/// Sitemaps are usually small, but some sites serve URL sets with tens of
/// thousands of entries from slow origins.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Location pattern: absolute http or https URL.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LOCATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid regex"));

/// Validate a record location (`<loc>` value).
///
/// The sitemap protocol requires absolute URLs; everything the protocol
/// accepts starts with an http or https scheme.
///
/// # Arguments
/// * `loc` - The location value to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ValidationError::InvalidLocation)` if invalid
///
/// # Examples
/// ```
/// use sitemap_parser::config::validate_location;
///
/// assert!(validate_location("https://example.com/page").is_ok());
/// assert!(validate_location("not-a-url").is_err());
/// ```
pub fn validate_location(loc: &str) -> Result<(), ValidationError> {
    if LOCATION_PATTERN.is_match(loc) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLocation(loc.to_string()))
    }
}

/// Normalize user input into a fetchable sitemap URL.
///
/// Prepends `http://` when no scheme is present and appends `sitemap.xml`
/// when the path does not already point at an XML document. This mirrors
/// what people type into the CLI: a bare domain rather than a full sitemap
/// location.
///
/// # Examples
/// ```
/// use sitemap_parser::config::normalize_sitemap_url;
///
/// assert_eq!(
///     normalize_sitemap_url("example.com"),
///     "http://example.com/sitemap.xml"
/// );
/// assert_eq!(
///     normalize_sitemap_url("https://example.com/sitemap.xml"),
///     "https://example.com/sitemap.xml"
/// );
/// ```
#[must_use]
pub fn normalize_sitemap_url(url: &str) -> String {
    let mut url = url.to_string();

    if !url.starts_with("https://") && !url.starts_with("http://") {
        url = format!("http://{url}");
    }

    if !url.ends_with(".xml") {
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str("sitemap.xml");
    }

    url
}
