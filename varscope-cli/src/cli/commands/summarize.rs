use super::Session;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use varscope_utils::report::{render_report, Reportable};

#[derive(Args)]
pub struct SummarizeArgs {
    /// Freyja demix output of the sample
    #[arg(value_name = "DEMIX")]
    pub demix: PathBuf,

    /// Freyja bootstrap lineage percentiles (CSV)
    #[arg(value_name = "BOOT")]
    pub bootstrap: PathBuf,

    /// Output format (text, json, csv); defaults to the configured format
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,
}

pub fn run(args: SummarizeArgs, config_path: Option<&Path>) -> Result<()> {
    let session = Session::load(config_path)?;
    let format = session.report_format(args.format.as_deref())?;

    let summary = session.summarize_sample(&args.demix, &args.bootstrap)?;
    print!("{}", render_report(&summary.to_report(), format)?);
    Ok(())
}
