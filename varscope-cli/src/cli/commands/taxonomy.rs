use super::Session;
use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::Path;
use varscope_utils::output::{create_standard_table, header_cell};

#[derive(Args)]
pub struct TaxonomyArgs {
    /// Only list codes mapping to this display name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

pub fn run(args: TaxonomyArgs, config_path: Option<&Path>) -> Result<()> {
    let session = Session::load(config_path)?;

    let mut table = create_standard_table();
    table.set_header(vec![header_cell("Lineage code"), header_cell("Display name")]);

    let mut shown = 0;
    for (code, name) in session.table.iter() {
        if args.name.as_deref().is_some_and(|wanted| wanted != name) {
            continue;
        }
        table.add_row(vec![code, name]);
        shown += 1;
    }

    println!("{}", table);
    println!(
        "{} {} of {} entries{}",
        "▶".cyan(),
        shown,
        session.table.len(),
        if session.config.taxonomy.replace_defaults {
            " (built-in table replaced by configuration)"
        } else {
            ""
        }
    );

    Ok(())
}
