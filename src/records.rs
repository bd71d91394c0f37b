//! Typed sitemap records: `Sitemap` (one child of a sitemap index) and
//! `Url` (one child of a URL set).
//!
//! Every field is validated when it is assigned, never later: a record that
//! exists is a record that satisfies the sitemap protocol's constraints.
//! Each record type also carries a fixed, ordered field table used by the
//! exporters, so format code never needs to know record internals.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::config::validate_location;
use crate::error::ValidationError;

/// Expected change frequency of a URL, from the sitemap protocol's closed
/// enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// All allowed protocol values, in the order the protocol documents them.
    pub const NAMES: [&'static str; 7] = [
        "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
    ];

    /// Get the protocol string value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl FromStr for ChangeFreq {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            other => Err(ValidationError::InvalidChangeFreq(other.to_string())),
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `<lastmod>` value.
///
/// The protocol allows W3C Datetime, which is a subset of ISO-8601: a full
/// timestamp with offset, a timestamp without offset, or a bare date.
/// Values without an offset are interpreted as UTC; a bare date means
/// midnight UTC.
pub(crate) fn parse_lastmod(value: &str) -> Result<DateTime<FixedOffset>, ValidationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().fixed_offset());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    Err(ValidationError::InvalidLastMod(value.to_string()))
}

/// A single exported field value.
///
/// Exporters need to distinguish numbers from text (CSV quotes only
/// non-numeric fields, JSON emits numbers unquoted) and absent values from
/// empty ones.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Field not set on this record.
    Empty,
    /// Textual value; timestamps are already rendered as RFC 3339.
    Text(String),
    /// Numeric value.
    Number(f64),
}

/// Capability shared by all record types: an ordered field table plus
/// per-field access by name.
pub trait Record {
    /// The fixed, ordered list of exportable field names.
    fn field_names() -> &'static [&'static str]
    where
        Self: Sized;

    /// Look up a field value by name. Unknown names are `Empty`.
    fn field(&self, name: &str) -> FieldValue;
}

/// Representation of one `<sitemap>` child of a `<sitemapindex>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sitemap {
    loc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lastmod: Option<DateTime<FixedOffset>>,
}

impl Sitemap {
    /// Exportable fields, in protocol order.
    pub const FIELDS: [&'static str; 2] = ["loc", "lastmod"];

    /// Create a sitemap record pointing at `loc`.
    ///
    /// # Errors
    /// `ValidationError::InvalidLocation` if `loc` is not an absolute
    /// http(s) URL.
    pub fn new(loc: &str) -> Result<Self, ValidationError> {
        validate_location(loc)?;
        Ok(Self {
            loc: loc.to_string(),
            lastmod: None,
        })
    }

    /// Set the last-modified timestamp from its textual form.
    ///
    /// # Errors
    /// `ValidationError::InvalidLastMod` if the value is not a W3C datetime.
    pub fn set_lastmod(&mut self, value: &str) -> Result<(), ValidationError> {
        self.lastmod = Some(parse_lastmod(value)?);
        Ok(())
    }

    /// Location of the child sitemap document.
    #[must_use]
    pub fn loc(&self) -> &str {
        &self.loc
    }

    /// When the child sitemap was last modified, if declared.
    #[must_use]
    pub fn lastmod(&self) -> Option<DateTime<FixedOffset>> {
        self.lastmod
    }
}

impl Record for Sitemap {
    fn field_names() -> &'static [&'static str] {
        &Self::FIELDS
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "loc" => FieldValue::Text(self.loc.clone()),
            "lastmod" => self
                .lastmod
                .map_or(FieldValue::Empty, |dt| FieldValue::Text(dt.to_rfc3339())),
            _ => FieldValue::Empty,
        }
    }
}

impl fmt::Display for Sitemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.loc)
    }
}

/// Representation of one `<url>` child of a `<urlset>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Url {
    loc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lastmod: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changefreq: Option<ChangeFreq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<f64>,
}

impl Url {
    /// Exportable fields, in protocol order.
    pub const FIELDS: [&'static str; 4] = ["loc", "lastmod", "changefreq", "priority"];

    /// Create a URL record pointing at `loc`.
    ///
    /// # Errors
    /// `ValidationError::InvalidLocation` if `loc` is not an absolute
    /// http(s) URL.
    pub fn new(loc: &str) -> Result<Self, ValidationError> {
        validate_location(loc)?;
        Ok(Self {
            loc: loc.to_string(),
            lastmod: None,
            changefreq: None,
            priority: None,
        })
    }

    /// Set the last-modified timestamp from its textual form.
    ///
    /// # Errors
    /// `ValidationError::InvalidLastMod` if the value is not a W3C datetime.
    pub fn set_lastmod(&mut self, value: &str) -> Result<(), ValidationError> {
        self.lastmod = Some(parse_lastmod(value)?);
        Ok(())
    }

    /// Set the change frequency from its textual form.
    ///
    /// # Errors
    /// `ValidationError::InvalidChangeFreq` if the value is not one of the
    /// protocol's enumeration.
    pub fn set_changefreq(&mut self, value: &str) -> Result<(), ValidationError> {
        self.changefreq = Some(value.parse()?);
        Ok(())
    }

    /// Set the crawl priority.
    ///
    /// # Errors
    /// `ValidationError::PriorityOutOfRange` unless `0.0 <= priority <= 1.0`.
    pub fn set_priority(&mut self, priority: f64) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&priority) {
            return Err(ValidationError::PriorityOutOfRange(priority));
        }
        self.priority = Some(priority);
        Ok(())
    }

    /// Set the crawl priority from its textual form.
    ///
    /// # Errors
    /// `ValidationError::InvalidPriority` if the value is not a number,
    /// `ValidationError::PriorityOutOfRange` if it is out of range.
    pub fn set_priority_str(&mut self, value: &str) -> Result<(), ValidationError> {
        let priority: f64 = value
            .parse()
            .map_err(|_| ValidationError::InvalidPriority(value.to_string()))?;
        self.set_priority(priority)
    }

    /// Location of the page.
    #[must_use]
    pub fn loc(&self) -> &str {
        &self.loc
    }

    /// When the page was last modified, if declared.
    #[must_use]
    pub fn lastmod(&self) -> Option<DateTime<FixedOffset>> {
        self.lastmod
    }

    /// Declared change frequency, if any.
    #[must_use]
    pub fn changefreq(&self) -> Option<ChangeFreq> {
        self.changefreq
    }

    /// Declared crawl priority, if any.
    #[must_use]
    pub fn priority(&self) -> Option<f64> {
        self.priority
    }
}

impl Record for Url {
    fn field_names() -> &'static [&'static str] {
        &Self::FIELDS
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "loc" => FieldValue::Text(self.loc.clone()),
            "lastmod" => self
                .lastmod
                .map_or(FieldValue::Empty, |dt| FieldValue::Text(dt.to_rfc3339())),
            "changefreq" => self
                .changefreq
                .map_or(FieldValue::Empty, |cf| {
                    FieldValue::Text(cf.as_str().to_string())
                }),
            "priority" => self.priority.map_or(FieldValue::Empty, FieldValue::Number),
            _ => FieldValue::Empty,
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.loc)
    }
}
