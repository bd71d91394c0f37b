//! Export parsed sitemap data to text formats.
//!
//! Exporters only consume the [`Record`](crate::records::Record) field
//! table: an ordered field list plus per-field access by name. Nothing
//! format-specific lives in the record types themselves.

mod csv;
mod json;

pub use csv::CsvExporter;
pub use json::JsonExporter;

use crate::error::Result;
use crate::parser::SiteMapParser;

/// Capability contract for all exporters.
pub trait Exporter {
    /// Name used to select the exporter on the command line, e.g. `"csv"`.
    fn short_name(&self) -> &'static str;

    /// Render the parser's sitemap records.
    ///
    /// # Errors
    /// `SitemapError::WrongKind` if the document is a url set, plus any
    /// validation error raised while iterating.
    fn export_sitemaps(&self, parser: &SiteMapParser) -> Result<String>;

    /// Render the parser's url records.
    ///
    /// # Errors
    /// `SitemapError::WrongKind` if the document is a sitemap index, plus
    /// any validation error raised while iterating.
    fn export_urls(&self, parser: &SiteMapParser) -> Result<String>;
}
