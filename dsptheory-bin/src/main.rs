//! dsptheory - how many factories does it take?
//!
//! Resolves an item's production chain against dsp-wiki.com and prints the
//! facility counts needed to keep a target number of factories fed.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use dsptheory_lib::prelude::*;
use dsptheory_wiki::WikiClient;

mod error;
use error::AppError;

#[derive(Parser, Debug)]
#[command(name = "dsptheory")]
#[command(about = "Compute facility counts for a Dyson Sphere Program production chain")]
struct Args {
    /// Item to resolve, by wiki name (e.g. Iron_Ingot)
    item: Option<String>,

    /// Number of factories of the target item to sustain
    #[arg(short, long, default_value_t = 1)]
    num: i64,

    /// How many ingredient levels to descend
    #[arg(short, long, default_value_t = 1)]
    depth: u32,

    /// Print the wiki's item listing as JSON and exit
    #[arg(short, long)]
    list: bool,

    /// Fetch and cache every listed item, then exit
    #[arg(long)]
    cache_all: bool,

    /// Path to the item index file
    #[arg(long)]
    cache: Option<PathBuf>,
}

fn default_cache_path() -> Result<PathBuf, AppError> {
    dirs::home_dir()
        .map(|home| home.join(".dsptheory").join("index.json"))
        .ok_or(AppError::NoHome)
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    let client = WikiClient::new();
    let cache_path = match args.cache {
        Some(path) => path,
        None => default_cache_path()?,
    };
    let cache = ItemCache::new(cache_path);

    if args.list {
        let listing = client.list_items()?;
        println!("{}", serde_json::to_string(&listing)?);
        return Ok(());
    }

    if args.cache_all {
        let cached = prime_cache(&cache, &client)?;
        println!("cached {cached} items");
        return Ok(());
    }

    let Some(item_name) = args.item else {
        Args::command().print_help()?;
        return Ok(());
    };

    let item = resolve_item(&item_name, &cache, &client)?;

    let Rate::Known(base) = base_speed(&item, PRIMARY_RECIPE) else {
        println!("{item_name} has no base speed!");
        return Ok(());
    };

    let target = args.num as f64 * base;
    println!(
        "{} {} Factories produce {}/s and require:",
        args.num, item.name, target
    );

    let entries = resolve_chain(&item, target, args.depth, &cache, &client)?;
    println!("{}", render_report(&entries, args.depth));

    Ok(())
}
