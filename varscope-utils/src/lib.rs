//! Shared utilities for varscope
//!
//! Provides report generation, console output helpers and the comparison
//! plot renderer.

pub mod output;
pub mod plot;
pub mod report;

// Re-export commonly used types
pub use output::{
    color_swatch, create_standard_table, error, format_percent, header_cell, info, parse_hex_rgb,
    success, warning,
};
pub use plot::{render_comparison_plot, PlotPoint};
pub use report::{render_csv, render_json, render_report, render_text, Report, ReportFormat, Reportable};
