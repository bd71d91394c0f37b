//! JSON exporter: one object per record, fields in protocol order.

use serde_json::{Map, Number, Value};

use super::Exporter;
use crate::error::Result;
use crate::parser::SiteMapParser;
use crate::records::{FieldValue, Record};

/// Renders records as a JSON array of field→value objects.
///
/// Absent fields are emitted as `null`, priorities as numbers, and
/// timestamps as RFC 3339 strings.
pub struct JsonExporter;

fn collate<R, I>(records: I) -> Result<Value>
where
    R: Record,
    I: Iterator<Item = Result<R>>,
{
    let mut rows = Vec::new();

    for record in records {
        let record = record?;
        let mut row = Map::new();
        for &name in R::field_names() {
            let value = match record.field(name) {
                FieldValue::Empty => Value::Null,
                FieldValue::Text(text) => Value::String(text),
                FieldValue::Number(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
            };
            row.insert(name.to_string(), value);
        }
        rows.push(Value::Object(row));
    }

    Ok(Value::Array(rows))
}

impl Exporter for JsonExporter {
    fn short_name(&self) -> &'static str {
        "json"
    }

    fn export_sitemaps(&self, parser: &SiteMapParser) -> Result<String> {
        let rows = collate(parser.get_sitemaps()?.iter())?;
        Ok(serde_json::to_string(&rows)?)
    }

    fn export_urls(&self, parser: &SiteMapParser) -> Result<String> {
        let rows = collate(parser.get_urls()?.iter())?;
        Ok(serde_json::to_string(&rows)?)
    }
}
