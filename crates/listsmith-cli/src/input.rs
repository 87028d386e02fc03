//! Item and comparable-sale input.

use crate::error::{CliError, Result};
use listsmith_domain::ItemDetails;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Item definition as written in an input JSON file.
///
/// Every field is optional here; required fields are checked when the
/// item is validated for generation so that all gaps are reported at once.
#[derive(Debug, Default, Deserialize)]
pub struct ItemDefinition {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<ItemDefinition> for ItemDetails {
    fn from(def: ItemDefinition) -> Self {
        ItemDetails {
            brand: def.brand,
            model: def.model,
            variant: def.variant,
            condition: def.condition,
            notes: def.notes,
        }
    }
}

/// Parse a JSON array of items.
pub fn parse_items(json_data: &str) -> Result<Vec<ItemDetails>> {
    let defs: Vec<ItemDefinition> = serde_json::from_str(json_data)?;

    if defs.is_empty() {
        return Err(CliError::InvalidInput("No items provided".to_string()));
    }

    Ok(defs.into_iter().map(Into::into).collect())
}

/// Load items from a JSON file.
pub fn load_items(path: &Path) -> Result<Vec<ItemDetails>> {
    let json_data = fs::read_to_string(path)?;
    parse_items(&json_data)
}

/// Load comparable sales, one per non-blank line.
pub fn load_comparables(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_comparables(&contents))
}

fn parse_comparables(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Built-in item for single-item mode.
pub fn sample_item() -> ItemDetails {
    ItemDetails {
        brand: Some("Example Brand".to_string()),
        model: Some("Example Model".to_string()),
        variant: None,
        condition: Some("New".to_string()),
        notes: Some("Sample notes".to_string()),
    }
}

/// Built-in items for batch mode.
pub fn sample_items() -> Vec<ItemDetails> {
    vec![
        ItemDetails {
            brand: Some("Example Brand".to_string()),
            model: Some("Model A".to_string()),
            variant: None,
            condition: Some("New".to_string()),
            notes: Some("Sample notes".to_string()),
        },
        ItemDetails {
            brand: Some("Another Brand".to_string()),
            model: Some("Model B".to_string()),
            variant: None,
            condition: Some("Used".to_string()),
            notes: Some("Light wear".to_string()),
        },
        ItemDetails {
            brand: Some("Premium Brand".to_string()),
            model: Some("Pro Model C".to_string()),
            variant: Some("Limited Edition".to_string()),
            condition: Some("New".to_string()),
            notes: Some("Collector's item, original packaging".to_string()),
        },
    ]
}

/// Built-in comparable sales.
pub fn sample_comparables() -> Vec<String> {
    vec![
        "Similar item sold for $15 (New)".to_string(),
        "Used version sold for $8-10".to_string(),
        "Limited edition variant sold for $25".to_string(),
    ]
}
