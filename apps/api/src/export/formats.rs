//! Export Formatter — serializes generated variants and session records to
//! downloadable documents. Total over any input list: an empty list yields a
//! header-only or empty-bodied document, never an error.

use std::fmt;
use std::str::FromStr;

use crate::copy::generator::AdVariant;
use crate::tracking::models::PostingLogEntry;

/// Supported download formats for variant exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Md,
    Html,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "classified_variants.csv",
            ExportFormat::Md => "classified_variants.md",
            ExportFormat::Html => "classified_variants.html",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Md => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "md" => Ok(ExportFormat::Md),
            "html" => Ok(ExportFormat::Html),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown export format '{}' (expected csv, md, or html)", self.0)
    }
}

/// Serializes variants to the requested format as UTF-8 bytes.
pub fn export_variants(variants: &[AdVariant], format: ExportFormat) -> Vec<u8> {
    match format {
        ExportFormat::Csv => variants_csv(variants),
        ExportFormat::Md => variants_markdown(variants),
        ExportFormat::Html => variants_html(variants),
    }
    .into_bytes()
}

fn variants_csv(variants: &[AdVariant]) -> String {
    let mut out = String::from("headline,body\n");
    for variant in variants {
        out.push_str(&csv_field(&variant.headline));
        out.push(',');
        out.push_str(&csv_field(&variant.body));
        out.push('\n');
    }
    out
}

fn variants_markdown(variants: &[AdVariant]) -> String {
    let mut lines = vec!["# Classified Ads".to_string(), String::new()];
    for (i, variant) in variants.iter().enumerate() {
        lines.push(format!("## Ad {}", i + 1));
        lines.push(format!("**Headline:** {}", variant.headline));
        lines.push(String::new());
        lines.push(variant.body.clone());
        lines.push(String::new());
    }
    lines.join("\n")
}

// Field values are deliberately NOT HTML-escaped: the exporter mirrors the
// legacy document byte-for-byte. See DESIGN.md before changing this.
fn variants_html(variants: &[AdVariant]) -> String {
    let mut lines = vec!["<html><body><h1>Classified Ads</h1>".to_string()];
    for (i, variant) in variants.iter().enumerate() {
        lines.push(format!("<h2>Ad {}</h2>", i + 1));
        lines.push(format!(
            "<p><strong>Headline:</strong> {}</p>",
            variant.headline
        ));
        lines.push(format!("<pre>{}</pre>", variant.body));
        lines.push("<hr/>".to_string());
    }
    lines.push("</body></html>".to_string());
    lines.join("\n")
}

/// Serializes the posting history to CSV with columns `time,site,note,link`.
/// Timestamps are UTC, second precision, no offset suffix.
pub fn history_csv(entries: &[PostingLogEntry]) -> Vec<u8> {
    let mut out = String::from("time,site,note,link\n");
    for entry in entries {
        out.push_str(&entry.time.format("%Y-%m-%dT%H:%M:%S").to_string());
        out.push(',');
        out.push_str(&csv_field(&entry.site));
        out.push(',');
        out.push_str(&csv_field(&entry.note));
        out.push(',');
        out.push_str(&csv_field(&entry.link));
        out.push('\n');
    }
    out.into_bytes()
}

/// Quotes a CSV field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled. Plain fields pass through unchanged.
fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
