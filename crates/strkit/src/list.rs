use crate::prelude::{println, *};
use colored::Colorize;
use strkit_core::CatalogEntry;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let catalog = global.start_plugin().on_catalog();

    if options.json {
        println!("{}", format_catalog_json(&catalog)?);
    } else {
        output_formatted(&catalog);
    }

    Ok(())
}

/// Convert the catalog to a JSON string
fn format_catalog_json(catalog: &[CatalogEntry]) -> Result<String> {
    serde_json::to_string_pretty(catalog).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn output_formatted(catalog: &[CatalogEntry]) {
    if catalog.is_empty() {
        println!("{}", "No functors registered.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Functor".bold(),
        "Label".bold(),
        "Description".bold()
    ]);

    for entry in catalog {
        table.add_row(prettytable::row![
            entry.target.bright_cyan(),
            entry.label,
            entry.description
        ]);
    }

    table.printstd();
    println!("\n{} functors", catalog.len());
}
