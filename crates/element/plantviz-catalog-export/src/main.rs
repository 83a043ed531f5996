use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use plantviz_element_core::{Catalog, ElementRegistry};

/// Export the built-in element catalog as JSON.
#[derive(Parser, Debug)]
#[command(name = "plantviz-catalog-export", version, about)]
struct Args {
    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export a single element.
    #[arg(short, long, value_name = "ID")]
    element: Option<String>,

    /// Single-line JSON.
    #[arg(long)]
    compact: bool,
}

fn select(catalog: Catalog, element: Option<&str>) -> Result<Catalog> {
    let Some(id) = element else {
        return Ok(catalog);
    };
    let entry = catalog
        .entry(id)
        .cloned()
        .with_context(|| format!("unknown element '{id}'"))?;
    Ok(Catalog {
        version: catalog.version,
        elements: vec![entry],
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let registry = ElementRegistry::builtin().context("register built-in elements")?;
    let catalog = select(registry.catalog(), args.element.as_deref())?;
    log::debug!("exporting {} element(s)", catalog.elements.len());

    let json = if args.compact {
        serde_json::to_string(&catalog)
    } else {
        serde_json::to_string_pretty(&catalog)
    }
    .context("serialize catalog")?;

    match args.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
            log::info!("wrote catalog to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
