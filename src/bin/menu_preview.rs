use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use virtual_menu_items::{MaterializedItem, MenuFilters, MenuObject, RegistrySeed};

#[derive(Parser)]
#[command(name = "menu-preview")]
#[command(about = "Preview a menu with virtual items merged in")]
struct Cli {
    /// Seed file with registrations (JSON)
    #[arg(long)]
    seed: PathBuf,
    /// Menu slug to render
    #[arg(long)]
    menu: String,
    /// Existing host items (JSON array); empty when omitted
    #[arg(long)]
    items: Option<PathBuf>,
    /// Item count the host reports; defaults to the number of existing items
    #[arg(long)]
    count: Option<usize>,
}

#[derive(Serialize)]
struct Preview {
    menu: MenuObject,
    items: Vec<MaterializedItem>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let seed = RegistrySeed::from_path(&cli.seed)
        .with_context(|| format!("failed to load seed {}", cli.seed.display()))?;
    let resolver = seed.resolver();
    let mut registry = seed.build_registry();
    let stored = seed.apply(&mut registry, &resolver);
    info!(stored, objects = resolver.len(), "seed applied");

    let existing: Vec<MaterializedItem> = match &cli.items {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read items {}", path.display()))?;
            serde_json::from_str(&raw).context("items file is not a JSON array of menu items")?
        }
        None => Vec::new(),
    };

    let menu = MenuObject::new(cli.menu.clone()).with_count(cli.count.unwrap_or(existing.len()));
    let items = registry.filter_menu_items(existing, &menu);
    let menu = registry.filter_menu_object(menu);

    let preview = Preview { menu, items };
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
