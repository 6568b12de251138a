use super::Session;
use anyhow::Result;
use clap::Args;
use std::path::Path;
use varscope_utils::output::{color_swatch, create_standard_table, header_cell};

#[derive(Args)]
pub struct ResolveArgs {
    /// Lineage codes to resolve (e.g. B.1.617.2 AY.4 BA.2.12.1)
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(serde::Serialize)]
struct Resolution<'a> {
    code: &'a str,
    name: String,
    color: &'a str,
}

pub fn run(args: ResolveArgs, config_path: Option<&Path>) -> Result<()> {
    let session = Session::load(config_path)?;
    let resolver = session.resolver();
    let colors = session.colors();

    let resolutions: Vec<Resolution> = args
        .codes
        .iter()
        .map(|code| {
            let name = resolver.resolve(code);
            let color = colors.color_for(&name);
            Resolution {
                code,
                name,
                color,
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
        return Ok(());
    }

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Display name"),
        header_cell("Color"),
    ]);
    for r in &resolutions {
        table.add_row(vec![r.code.to_string(), r.name.clone(), color_swatch(r.color)]);
    }
    println!("{}", table);

    Ok(())
}
