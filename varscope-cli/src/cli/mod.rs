pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "varscope",
    version,
    about = "Compare Freyja demix estimates with bootstrap percentiles",
    long_about = "Varscope groups SARS-CoV-2 lineage abundances from a Freyja demix run under \
                  their WHO display names, combines them with the bootstrap percentiles of the \
                  same sample and plots point estimate against bootstrap median."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $VARSCOPE_HOME/config.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plot demix estimates against bootstrap medians
    Plot(commands::plot::PlotArgs),

    /// Print the per display name summary of a sample
    Summarize(commands::summarize::SummarizeArgs),

    /// Show the display name and color of lineage codes
    Resolve(commands::resolve::ResolveArgs),

    /// List the active lineage to display name table
    Taxonomy(commands::taxonomy::TaxonomyArgs),
}
