/// Generic text renderer for Report type
use crate::report::core::{CellStyle, Metric, MetricSeverity, Report, Section, SectionContent, Table};
use anyhow::Result;

/// Render a Report to plain text format
pub fn render_text(report: &Report) -> Result<String> {
    let mut output = String::new();

    // Title
    output.push_str(&format!("{}\n", report.title));
    output.push_str(&format!("{}\n\n", "=".repeat(report.title.chars().count())));

    // Metadata
    output.push_str(&format!("Command: {}\n", report.command));
    output.push_str(&format!(
        "Generated: {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    for (key, value) in &report.metadata {
        output.push_str(&format!("{}: {}\n", key, value));
    }
    output.push('\n');

    for section in &report.sections {
        render_section(&mut output, section);
    }

    Ok(output)
}

fn render_section(output: &mut String, section: &Section) {
    output.push_str(&format!("{}\n", section.title));
    output.push_str(&format!("{}\n", "-".repeat(section.title.chars().count())));

    match &section.content {
        SectionContent::Metrics(metrics) => render_metrics(output, metrics),
        SectionContent::Table(table) => render_table(output, table),
        SectionContent::BulletList(items) => {
            for item in items {
                output.push_str(&format!("  ▶ {}\n", item));
            }
        }
    }

    output.push('\n');
}

fn render_metrics(output: &mut String, metrics: &[Metric]) {
    for metric in metrics {
        let severity_indicator = match metric.severity {
            MetricSeverity::Warning => "⚠",
            MetricSeverity::Info => "ℹ",
            MetricSeverity::Normal => "●",
        };

        output.push_str(&format!(
            "  {} {}: {}\n",
            severity_indicator, metric.label, metric.value
        ));
    }
}

fn render_table(output: &mut String, table: &Table) {
    if table.rows.is_empty() {
        output.push_str("  (empty)\n");
        return;
    }

    // Calculate column widths
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(styled(cell.style, &cell.value).chars().count());
            }
        }
    }

    // Header
    let header: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:width$}", h, width = *w))
        .collect();
    output.push_str(&format!("  {}\n", header.join("  ").trim_end()));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&format!("  {}\n", rule.join("  ")));

    // Rows
    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:width$}", styled(cell.style, &cell.value), width = *w))
            .collect();
        output.push_str(&format!("  {}\n", cells.join("  ").trim_end()));
    }
}

fn styled(style: CellStyle, value: &str) -> String {
    let prefix = match style {
        CellStyle::Warning => "⚠ ",
        CellStyle::Normal => "",
    };
    format!("{}{}", prefix, value)
}
