use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use varscope_core::VarscopeError;
use varscope_utils::output::error;

fn main() {
    let cli = Cli::parse();

    // -v flags win over VARSCOPE_LOG
    let log_level = match cli.verbose {
        0 => std::env::var("VARSCOPE_LOG").unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error(&format!("Error: {:#}", e));

        let exit_code = match e.downcast_ref::<VarscopeError>() {
            Some(VarscopeError::Configuration(_)) => 2,
            Some(VarscopeError::Io(_)) => 3,
            Some(VarscopeError::Parse(_)) => 4,
            Some(VarscopeError::Structural(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Plot(args) => crate::cli::commands::plot::run(args, config_path),
        Commands::Summarize(args) => crate::cli::commands::summarize::run(args, config_path),
        Commands::Resolve(args) => crate::cli::commands::resolve::run(args, config_path),
        Commands::Taxonomy(args) => crate::cli::commands::taxonomy::run(args, config_path),
    }
}
