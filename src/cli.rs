//! Command-line interface for the `smapper` binary.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::normalize_sitemap_url;
use crate::error::{Result, SitemapError};
use crate::exporters::{CsvExporter, Exporter, JsonExporter};
use crate::parser::SiteMapParser;

/// smapper - Fetch a sitemap and export its records.
#[derive(Parser)]
#[command(name = "smapper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Sitemap URL or bare domain (normalized to http://<domain>/sitemap.xml)
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub uri: Option<String>,

    /// Read literal sitemap XML from a file instead of fetching a URL
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub exporter: ExportFormat,

    /// Write output to a file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Selectable export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}

/// Execute a parsed invocation.
fn execute(cli: &Cli) -> Result<()> {
    let parser = build_parser(cli)?;

    let exporter: &dyn Exporter = match cli.exporter {
        ExportFormat::Json => &JsonExporter,
        ExportFormat::Csv => &CsvExporter,
    };

    let rendered = if parser.has_sitemaps() {
        exporter.export_sitemaps(&parser)?
    } else {
        exporter.export_urls(&parser)?
    };

    eprintln!(
        "{} <{}> document, exported as {}",
        style("Parsed").green().bold(),
        style(parser.kind()).cyan(),
        exporter.short_name()
    );

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Construct the parser from whichever input mode was given.
fn build_parser(cli: &Cli) -> Result<SiteMapParser> {
    if let Some(path) = &cli.file {
        let xml = fs::read_to_string(path)?;
        return SiteMapParser::from_xml(xml);
    }

    let Some(uri) = &cli.uri else {
        // clap's required_unless_present makes this unreachable from main
        return Err(SitemapError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "either a URI or --file is required",
        )));
    };

    let url = normalize_sitemap_url(uri);
    eprintln!(
        "{} {}",
        style("Fetching").bold(),
        style(&url).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Downloading sitemap...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = SiteMapParser::from_uri(&url);
    pb.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_parse_uri() {
        let cli = Cli::parse_from(["smapper", "example.com"]);
        assert_eq!(cli.uri, Some("example.com".to_string()));
        assert_eq!(cli.exporter, ExportFormat::Json);
        assert!(cli.file.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_parse_csv_exporter() {
        let cli = Cli::parse_from(["smapper", "example.com", "--exporter", "csv"]);
        assert_eq!(cli.exporter, ExportFormat::Csv);
    }

    #[test]
    fn test_cli_parse_file_mode() {
        let cli = Cli::parse_from(["smapper", "--file", "sitemap.xml"]);
        assert!(cli.uri.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("sitemap.xml")));
    }

    #[test]
    fn test_cli_requires_uri_or_file() {
        assert!(Cli::try_parse_from(["smapper"]).is_err());
        assert!(Cli::try_parse_from(["smapper", "example.com", "--file", "x.xml"]).is_err());
    }

    #[test]
    fn test_execute_file_mode_writes_output() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(
            input,
            "<urlset><url><loc>https://example.com/</loc></url></urlset>"
        )
        .unwrap();
        let output = tempfile::NamedTempFile::new().unwrap();

        let cli = Cli {
            uri: None,
            file: Some(input.path().to_path_buf()),
            exporter: ExportFormat::Json,
            output: Some(output.path().to_path_buf()),
        };
        execute(&cli).unwrap();

        let written = fs::read_to_string(output.path()).unwrap();
        assert!(written.contains("https://example.com/"));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_execute_file_mode_unknown_document() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, "<html/>").unwrap();

        let cli = Cli {
            uri: None,
            file: Some(input.path().to_path_buf()),
            exporter: ExportFormat::Json,
            output: None,
        };
        assert!(matches!(
            execute(&cli),
            Err(SitemapError::UnknownDocumentKind { .. })
        ));
    }
}
