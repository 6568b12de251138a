/// Generic renderers for Report types
///
/// These renderers work with the generic `Report` type and can render
/// reports from any command that implements `Reportable`.
pub mod csv;
pub mod json;
pub mod text;

pub use self::csv::render_csv;
pub use self::json::render_json;
pub use self::text::render_text;

use crate::report::core::Report;
use anyhow::Result;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => anyhow::bail!("Unknown format '{}'. Use: text, json, csv", s),
        }
    }
}

pub fn render_report(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => render_text(report),
        ReportFormat::Json => render_json(report),
        ReportFormat::Csv => render_csv(report),
    }
}
