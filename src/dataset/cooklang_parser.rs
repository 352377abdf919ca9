// Cooklang parsing for recipe directories
use anyhow::{Context, Result};
use cooklang::{Converter, CooklangParser, Extensions};
use tracing::{debug, warn};

/// Ingredients mentioned in one Cooklang recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookIngredients {
    pub title: Option<String>,
    pub ingredients: Vec<String>,
}

/// Parse a Cooklang recipe and list its ingredient names in order of
/// first mention. References to an earlier ingredient (`@&name`) are
/// skipped since they name the same ingredient again.
pub fn parse_ingredients(content: &str) -> Result<CookIngredients> {
    debug!("Parsing Cooklang recipe with cooklang library");

    let parser = CooklangParser::new(Extensions::empty(), Converter::default());
    let parsed = parser.parse(content);

    if parsed.report().has_warnings() {
        for warning in parsed.report().warnings() {
            warn!("Recipe parsing warning: {}", warning);
        }
    }

    let (recipe, _warnings) = parsed
        .into_result()
        .context("Failed to parse recipe with cooklang parser")?;

    let title = recipe
        .metadata
        .map
        .get("title")
        .and_then(|t| t.as_str())
        .map(|t| t.to_string());

    let ingredients = recipe
        .ingredients
        .iter()
        .filter(|ingredient| ingredient.reference.is_none())
        .map(|ingredient| ingredient.name.to_string())
        .collect();

    Ok(CookIngredients { title, ingredients })
}
