// Recipe corpus loading
// Produces the raw ingredient lists the graph is built from

pub mod cooklang_parser;

use crate::error::{Error, Result};
use crate::graph::{IngredientNetwork, Normalizer};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Raw ingredient mentions of one recipe, in source order.
pub type RawRecipe = Vec<String>;

/// One record of a JSON corpus. Fields other than `ingredients` are ignored.
#[derive(Debug, Clone, Deserialize)]
struct RecipeRecord {
    ingredients: Vec<String>,
}

/// Load recipes from a JSON file or a directory of `.cook` files.
pub fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<RawRecipe>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::dataset_unavailable(
            path,
            "not found. Download the recipe dataset and place it at this path",
        ));
    }

    let recipes = if path.is_dir() {
        load_cook_dir(path)?
    } else {
        load_json(path)?
    };

    info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Parse a JSON array of recipe records.
pub fn parse_json(content: &str) -> Result<Vec<RawRecipe>> {
    let records: Vec<RecipeRecord> = serde_json::from_str(content)
        .map_err(|e| Error::DatasetParse(format!("Invalid recipe JSON: {e}")))?;

    Ok(records.into_iter().map(|r| r.ingredients).collect())
}

fn load_json(path: &Path) -> Result<Vec<RawRecipe>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::dataset_unavailable(path, format!("failed to read: {e}")))?;
    parse_json(&content)
}

fn load_cook_dir(dir: &Path) -> Result<Vec<RawRecipe>> {
    let unreadable =
        |e: std::io::Error| Error::dataset_unavailable(dir, format!("failed to list directory: {e}"));

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("cook") {
            files.push(path);
        }
    }
    files.sort();

    let mut recipes = Vec::with_capacity(files.len());
    for path in &files {
        match read_cook_recipe(path) {
            Ok(ingredients) => recipes.push(ingredients),
            Err(e) => warn!("Skipping recipe: {}", e.log_safe()),
        }
    }

    if recipes.is_empty() {
        return Err(Error::dataset_unavailable(
            dir,
            "directory contains no parseable .cook recipes",
        ));
    }

    Ok(recipes)
}

/// Read one `.cook` file into its raw ingredient list.
fn read_cook_recipe(path: &Path) -> Result<RawRecipe> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::RecipeParse(format!("{}: {e}", path.display())))?;

    let parsed = cooklang_parser::parse_ingredients(&content)
        .map_err(|e| Error::RecipeParse(format!("{}: {e:#}", path.display())))?;

    debug!(
        "Parsed {} ({} ingredients)",
        parsed.title.as_deref().unwrap_or_else(|| {
            path.file_stem().and_then(|s| s.to_str()).unwrap_or("unknown")
        }),
        parsed.ingredients.len()
    );
    Ok(parsed.ingredients)
}

/// Load a corpus and build its network.
pub fn build_network(
    path: impl AsRef<Path>,
    normalizer: Normalizer,
    min_cooccurrence: u64,
) -> Result<IngredientNetwork> {
    let recipes = load_recipes(path)?;
    Ok(IngredientNetwork::build(
        recipes,
        normalizer,
        min_cooccurrence,
    ))
}
