//! Command implementations.

pub mod batch;
pub mod single;

pub use self::batch::{batch_items, execute_batch};
pub use self::single::{execute_single, single_item};

use crate::error::Result;
use crate::input;
use listsmith_domain::GenerationService;
use listsmith_generator::{GeneratorConfig, ListingGenerator};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Comparable sales from a file, or the built-in samples.
pub fn load_comparables(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => input::load_comparables(path),
        None => Ok(input::sample_comparables()),
    }
}

/// Build a generator over `provider` with optional template text.
pub fn build_generator<L>(
    provider: L,
    config: GeneratorConfig,
    comparables: Vec<String>,
    template: Option<&Path>,
) -> Result<ListingGenerator<L>>
where
    L: GenerationService + Send + Sync + 'static,
    L::Error: Display,
{
    debug!("Using {} comparable sales", comparables.len());
    let generator = ListingGenerator::new(provider, config)?.with_comparables(comparables);

    match template {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            debug!("Using prompt template from {}", path.display());
            Ok(generator.with_template(text)?)
        }
        None => Ok(generator),
    }
}
