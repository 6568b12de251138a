/// Report generation utilities
///
/// Provides a generic reporting framework shared by the varscope commands.
///
/// ## Usage
/// 1. Implement `Reportable` for your command's result type
/// 2. Call `result.to_report()` to get a generic `Report`
/// 3. Use renderers (`render_text`, `render_json`, `render_csv`) to output in desired format
pub mod core;
pub mod renderers;

// Re-export core generic types
pub use core::{
    Cell, CellStyle, Metric, MetricSeverity, Report, ReportBuilder, Reportable, Section,
    SectionContent, Table,
};

// Re-export generic renderers
pub use renderers::{render_csv, render_json, render_report, render_text, ReportFormat};
