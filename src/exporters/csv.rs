//! CSV exporter: header row in field order, one CRLF-terminated row per
//! record, non-numeric fields double-quoted.

use super::Exporter;
use crate::error::Result;
use crate::parser::SiteMapParser;
use crate::records::{FieldValue, Record};

/// Renders records as CSV text without a trailing line terminator.
pub struct CsvExporter;

const LINE_TERMINATOR: &str = "\r\n";

/// Quote a textual field, doubling any embedded quotes.
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

fn render_field(value: FieldValue) -> String {
    match value {
        FieldValue::Empty => "\"\"".to_string(),
        FieldValue::Text(text) => quote(&text),
        FieldValue::Number(n) => n.to_string(),
    }
}

fn collate<R, I>(records: I) -> Result<String>
where
    R: Record,
    I: Iterator<Item = Result<R>>,
{
    let header = R::field_names()
        .iter()
        .map(|name| quote(name))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = vec![header];
    for record in records {
        let record = record?;
        let row = R::field_names()
            .iter()
            .map(|name| render_field(record.field(name)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    Ok(lines.join(LINE_TERMINATOR))
}

impl Exporter for CsvExporter {
    fn short_name(&self) -> &'static str {
        "csv"
    }

    fn export_sitemaps(&self, parser: &SiteMapParser) -> Result<String> {
        collate(parser.get_sitemaps()?.iter())
    }

    fn export_urls(&self, parser: &SiteMapParser) -> Result<String> {
        collate(parser.get_urls()?.iter())
    }
}
