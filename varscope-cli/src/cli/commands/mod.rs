pub mod plot;
pub mod resolve;
pub mod summarize;
pub mod taxonomy;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use varscope_bio::aggregate::GroupAggregator;
use varscope_bio::color::{ColorAssigner, Palette};
use varscope_bio::formats::freyja::{parse_bootstrap, parse_demix};
use varscope_bio::taxonomy::{NameResolver, TaxonomyTable};
use varscope_core::config::load_config_or_default;
use varscope_core::{AggregateResult, Config, VarscopeError};
use varscope_utils::format_percent;
use varscope_utils::report::{
    render_report, Cell, CellStyle, Metric, MetricSeverity, Report, ReportFormat, Reportable,
    Section, Table,
};

/// Configuration plus the lookup tables built from it
pub struct Session {
    pub config: Config,
    pub table: TaxonomyTable,
    pub palette: Palette,
}

impl Session {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = load_config_or_default(config_path)?;
        let table = TaxonomyTable::from_config(&config.taxonomy);
        let palette = Palette::from_config(&config.palette)?;
        tracing::debug!(
            "Session ready: {} taxonomy entries, {} palette colors",
            table.len(),
            palette.len()
        );

        Ok(Self {
            config,
            table,
            palette,
        })
    }

    pub fn resolver(&self) -> NameResolver<'_> {
        NameResolver::new(&self.table)
    }

    pub fn colors(&self) -> ColorAssigner<'_> {
        ColorAssigner::new(&self.palette)
    }

    /// Report format from the command line, else from the configuration.
    /// A bad configured value is a configuration error.
    pub fn report_format(&self, requested: Option<&str>) -> Result<ReportFormat> {
        if let Some(requested) = requested {
            return requested.parse();
        }

        let configured = &self.config.output.report_format;
        configured.parse::<ReportFormat>().map_err(|e| {
            anyhow::Error::from(VarscopeError::Configuration(format!(
                "[output] report_format: {}",
                e
            )))
        })
    }

    /// Read both Freyja outputs of a sample and aggregate them by display name
    pub fn summarize_sample(&self, demix: &Path, bootstrap: &Path) -> Result<SampleSummary> {
        let estimates = parse_demix(demix)
            .with_context(|| format!("Failed to read demix output {}", demix.display()))?;
        let boot = parse_bootstrap(bootstrap)
            .with_context(|| format!("Failed to read bootstrap output {}", bootstrap.display()))?;

        let aggregation = GroupAggregator::new(self.resolver()).aggregate_estimates(&estimates, &boot)?;

        let colors = self.colors();
        let groups = aggregation
            .results
            .iter()
            .map(|result| SummaryGroup {
                color: colors.color_for(&result.name).to_string(),
                result: result.clone(),
            })
            .collect();

        Ok(SampleSummary {
            title: self.config.plot.title.clone(),
            demix: demix.to_path_buf(),
            bootstrap: bootstrap.to_path_buf(),
            point_total_percent: 100.0 * estimates.total_fraction(),
            groups,
            bootstrap_only: aggregation.bootstrap_only,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SummaryGroup {
    pub result: AggregateResult,
    pub color: String,
}

/// Aggregated sample ready for plotting and reporting
#[derive(Debug, Clone)]
pub struct SampleSummary {
    pub title: String,
    pub demix: PathBuf,
    pub bootstrap: PathBuf,
    pub point_total_percent: f64,
    pub groups: Vec<SummaryGroup>,
    pub bootstrap_only: Vec<String>,
}

impl Reportable for SampleSummary {
    fn to_report(&self) -> Report {
        let non_finite = self.groups.iter().filter(|g| !g.result.is_finite()).count();

        let mut metrics = vec![
            Metric::new("Groups", self.groups.len()),
            Metric::new("Point estimate total (%)", format_percent(self.point_total_percent)),
            Metric::new("Bootstrap-only names dropped", self.bootstrap_only.len()).with_severity(
                if self.bootstrap_only.is_empty() {
                    MetricSeverity::Normal
                } else {
                    MetricSeverity::Info
                },
            ),
        ];
        if non_finite > 0 {
            metrics.push(
                Metric::new("Groups with non-finite values", non_finite)
                    .with_severity(MetricSeverity::Warning),
            );
        }

        let mut table = Table::new(
            ["Name", "Color", "Point %", "Median %", "Spread %"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
        );
        for group in &self.groups {
            let r = &group.result;
            let style = if r.is_finite() {
                CellStyle::Normal
            } else {
                CellStyle::Warning
            };
            table.add_row(vec![
                Cell::new(&r.name).with_style(style),
                Cell::new(&group.color),
                Cell::new(format_percent(r.total_percent)),
                Cell::new(format_percent(r.median_percent)),
                Cell::new(format_percent(r.spread_percent)),
            ]);
        }

        let mut builder = Report::builder(&self.title, "summarize")
            .metadata("demix", self.demix.display().to_string())
            .metadata("bootstrap", self.bootstrap.display().to_string())
            .section(Section::summary("Summary", metrics))
            .section(Section::table("Groups", table));

        if !self.bootstrap_only.is_empty() {
            builder = builder.section(Section::bullets(
                "Bootstrap-only names (not plotted)",
                self.bootstrap_only.clone(),
            ));
        }

        builder.build()
    }
}

/// Save a report to a file in the specified format
pub fn save_report<T: Reportable>(result: &T, format: ReportFormat, output_path: &Path) -> Result<()> {
    let content = render_report(&result.to_report(), format)?;
    std::fs::write(output_path, content)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
    Ok(())
}
