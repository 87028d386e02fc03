//! Single-item generation.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::input;
use crate::output::Formatter;
use listsmith_domain::{GenerationService, ItemDetails};
use listsmith_generator::{ListingGenerator, ListingOutcome};
use std::fmt::Display;

/// Pick the item for single-item mode.
///
/// Detail flags win, then the first entry of `--input`, then the built-in
/// sample.
pub fn single_item(cli: &Cli) -> Result<ItemDetails> {
    if cli.has_item_flags() {
        return Ok(ItemDetails {
            brand: cli.brand.clone(),
            model: cli.model.clone(),
            variant: cli.variant.clone(),
            condition: cli.condition.clone(),
            notes: cli.notes.clone(),
        });
    }

    match &cli.input {
        Some(path) => input::load_items(path)?
            .into_iter()
            .next()
            .ok_or_else(|| CliError::InvalidInput("No items provided".to_string())),
        None => Ok(input::sample_item()),
    }
}

/// Generate and print one listing.
pub async fn execute_single<L>(
    generator: &ListingGenerator<L>,
    details: ItemDetails,
    formatter: &Formatter,
) -> Result<ListingOutcome>
where
    L: GenerationService + Send + Sync + 'static,
    L::Error: Display,
{
    let outcome = generator.generate_from_details(details).await?;

    if outcome.listing.is_incomplete() {
        eprintln!("{}", formatter.warning("Generated listing is incomplete"));
    }

    println!("{}", formatter.format_outcome(1, &outcome)?);

    Ok(outcome)
}
