/// Generic CSV renderer for Report type
use crate::report::core::{Report, Section, SectionContent, Table};
use anyhow::Result;

/// Render a Report to CSV format
///
/// Since CSV is inherently tabular, this renderer:
/// - Exports Table sections as separate CSV blocks
/// - Exports Metrics as key-value pairs
/// - Writes bullet lists as comments
pub fn render_csv(report: &Report) -> Result<String> {
    let mut output = String::new();

    // Metadata as comments
    output.push_str(&format!("# {}\n", report.title));
    output.push_str(&format!("# Command: {}\n", report.command));
    output.push_str(&format!(
        "# Generated: {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    for (key, value) in &report.metadata {
        output.push_str(&format!("# {}: {}\n", key, value));
    }
    output.push('\n');

    for section in &report.sections {
        render_section(&mut output, section);
    }

    Ok(output)
}

fn render_section(output: &mut String, section: &Section) {
    output.push_str(&format!("# {}\n", section.title));

    match &section.content {
        SectionContent::Metrics(metrics) => {
            output.push_str("Metric,Value\n");
            for metric in metrics {
                output.push_str(&format!(
                    "\"{}\",\"{}\"\n",
                    escape_csv(&metric.label),
                    escape_csv(&metric.value)
                ));
            }
        }
        SectionContent::Table(table) => render_table(output, table),
        SectionContent::BulletList(items) => {
            for item in items {
                output.push_str(&format!("# - {}\n", item));
            }
        }
    }

    output.push('\n');
}

fn render_table(output: &mut String, table: &Table) {
    let header: Vec<String> = table
        .headers
        .iter()
        .map(|h| format!("\"{}\"", escape_csv(h)))
        .collect();
    output.push_str(&header.join(","));
    output.push('\n');

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .map(|c| format!("\"{}\"", escape_csv(&c.value)))
            .collect();
        output.push_str(&cells.join(","));
        output.push('\n');
    }
}

/// Escape CSV special characters
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}
