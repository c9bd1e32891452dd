use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use recipe_finder::config::AppConfig;
use recipe_finder::formatting::{describe, format_row, table_header};
use recipe_finder::ingredient_input::{parse_ingredient_text, read_ingredient_file};
use recipe_finder::search::{parse_complexity_filter, RecipeFinder};
use recipe_finder::sorting::{sort_results, SortKey};

/// Find recipes you can cook with the ingredients you have
#[derive(Debug, Parser)]
#[command(name = "recipe-finder", version, about)]
struct Cli {
    /// Recipe catalog (JSON); overrides RECIPES_PATH
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Ingredients on hand, comma separated
    #[arg(short, long, value_name = "LIST")]
    ingredients: Option<String>,

    /// Text file with one ingredient per line
    #[arg(long, value_name = "PATH")]
    ingredients_file: Option<PathBuf>,

    /// Only show recipes of this complexity (light, medium, hard or any)
    #[arg(short, long, default_value = "any")]
    complexity: String,

    /// Sort by time, complexity or match; overrides DEFAULT_SORT
    #[arg(short, long)]
    sort: Option<String>,

    /// Print the detail view for every result
    #[arg(long)]
    details: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting recipe finder");

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;

    let catalog_path = cli.catalog.clone().unwrap_or(config.recipes_path.clone());
    let finder = RecipeFinder::from_path(&catalog_path)
        .with_context(|| format!("Could not load recipes from {}", catalog_path.display()))?;

    let mut ingredients = Vec::new();
    if let Some(path) = &cli.ingredients_file {
        ingredients.extend(read_ingredient_file(path)?);
    }
    if let Some(text) = &cli.ingredients {
        ingredients.extend(parse_ingredient_text(text));
    }
    if ingredients.is_empty() {
        warn!("No ingredients given; use --ingredients or --ingredients-file");
    }

    let complexity = parse_complexity_filter(&cli.complexity)?;
    let sort_key = cli
        .sort
        .as_deref()
        .map(SortKey::parse)
        .unwrap_or(config.default_sort);

    let results = finder.search(&ingredients, complexity);
    let mut ranked = sort_results(&results, sort_key);
    if let Some(max) = config.max_results {
        ranked.truncate(max);
    }

    if ranked.is_empty() {
        println!("No matching recipes found.");
        return Ok(());
    }

    println!("{}", table_header());
    for result in &ranked {
        println!("{}", format_row(result));
    }

    if cli.details {
        for result in &ranked {
            println!("\n{}", describe(result));
        }
    }

    Ok(())
}
