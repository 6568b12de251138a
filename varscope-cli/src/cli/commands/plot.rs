use super::{save_report, Session};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use varscope_utils::output::{info, success, warning};
use varscope_utils::plot::{render_comparison_plot, PlotPoint};

#[derive(Args)]
pub struct PlotArgs {
    /// Freyja demix output of the sample
    #[arg(value_name = "DEMIX")]
    pub demix: PathBuf,

    /// Freyja bootstrap lineage percentiles (CSV)
    #[arg(value_name = "BOOT")]
    pub bootstrap: PathBuf,

    /// Plot file; `.svg` writes SVG, other extensions a bitmap
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Plot title (overrides the configured title)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Report output file path
    #[arg(long = "report-output", value_name = "FILE")]
    pub report_output: Option<PathBuf>,

    /// Report output format (text, json, csv)
    #[arg(long = "report-format", value_name = "FORMAT")]
    pub report_format: Option<String>,
}

pub fn run(args: PlotArgs, config_path: Option<&Path>) -> Result<()> {
    let session = Session::load(config_path)?;
    let report_format = session.report_format(args.report_format.as_deref())?;

    let mut summary = session.summarize_sample(&args.demix, &args.bootstrap)?;
    let mut plot_config = session.config.plot.clone();
    if let Some(title) = args.title {
        plot_config.title = title.clone();
        summary.title = title;
    }

    let points: Vec<PlotPoint> = summary
        .groups
        .iter()
        .map(|g| {
            PlotPoint::new(
                g.result.name.clone(),
                g.result.total_percent,
                g.result.median_percent,
                g.result.spread_percent,
                g.color.clone(),
            )
        })
        .collect();

    if !summary.bootstrap_only.is_empty() {
        info(&format!(
            "Not plotted, bootstrap only: {}",
            summary.bootstrap_only.join(", ")
        ));
    }

    let skipped = points.iter().filter(|p| !p.is_finite()).count();
    if skipped > 0 {
        warning(&format!("{} groups with non-finite values left off the plot", skipped));
    }

    render_comparison_plot(&points, &args.output, &plot_config)?;
    success(&format!(
        "Plotted {} groups to {}",
        points.len() - skipped,
        args.output.display()
    ));

    if let Some(report_path) = &args.report_output {
        save_report(&summary, report_format, report_path)?;
        success(&format!("Report saved to {}", report_path.display()));
    }

    Ok(())
}
