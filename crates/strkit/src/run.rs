use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use strkit_core::{CatalogEntry, Item, StringPlugin};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct RunOptions {
    /// Functor to run (see `strkit list`)
    #[arg(value_name = "FUNCTOR")]
    pub functor: String,

    /// Input handed to the functor
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Print only the target of the given result (1-indexed)
    #[arg(short, long)]
    pub select: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: RunOptions, global: crate::Global) -> Result<()> {
    let plugin = global.start_plugin();

    if global.verbose {
        eprintln!(
            "Running {} with input {:?}",
            options.functor, options.input
        );
    }

    let items = run_data(&plugin, &options.functor, options.input.as_deref())?;

    if let Some(index) = options.select {
        let target = select_target(&plugin, &items, index)?;
        println!("{target}");
        return Ok(());
    }

    if options.json {
        println!("{}", format_items_json(&items)?);
    } else {
        println!("{}", format_items_text(&items));
    }

    Ok(())
}

/// Dispatch `functor` the way a host does: a one-item chain ending in its reference.
///
/// A single error entry is turned into an `Err`.
pub fn run_data(plugin: &StringPlugin, functor: &str, input: Option<&str>) -> Result<Vec<Item>> {
    let reference = plugin
        .on_catalog()
        .into_iter()
        .find(|entry| entry.target == functor)
        .unwrap_or_else(|| CatalogEntry {
            label: functor.to_string(),
            description: String::new(),
            target: functor.to_string(),
        });

    let items = plugin
        .on_suggest(input, &[Item::Reference(reference)])
        .unwrap_or_default();

    if let [Item::Error(error)] = items.as_slice() {
        return Err(Error::Conversion(error.description.clone()).into());
    }

    Ok(items)
}

/// The target the host would copy for the `index`-th (1-indexed) item.
fn select_target<'a>(plugin: &StringPlugin, items: &'a [Item], index: usize) -> Result<&'a str> {
    index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .and_then(|item| plugin.on_execute(item))
        .ok_or_else(|| {
            Error::InvalidSelection {
                index,
                available: items.len(),
            }
            .into()
        })
}

fn format_items_json(items: &[Item]) -> Result<String> {
    serde_json::to_string_pretty(items).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_items_text(items: &[Item]) -> String {
    if items.is_empty() {
        return format!("{}", "No results.".yellow());
    }

    let mut result = String::new();
    for (idx, item) in items.iter().enumerate() {
        result.push_str(&format!(
            "{} {}\n",
            format!("[{}]", idx + 1).yellow().bold(),
            item.label().white().bold()
        ));
        result.push_str(&format!("    {}\n", item.description().dimmed()));
    }

    result.trim_end().to_string()
}
