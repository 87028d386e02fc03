//! Batch generation.

use crate::cli::Cli;
use crate::error::Result;
use crate::input;
use crate::output::Formatter;
use indicatif::{ProgressBar, ProgressStyle};
use listsmith_domain::{GenerationService, ItemDetails};
use listsmith_generator::{BatchReport, ListingGenerator};
use std::fmt::Display;

/// Items for batch mode: `--input` or the built-in samples.
pub fn batch_items(cli: &Cli) -> Result<Vec<ItemDetails>> {
    match &cli.input {
        Some(path) => input::load_items(path),
        None => Ok(input::sample_items()),
    }
}

/// Generate listings for every item and print them.
pub async fn execute_batch<L>(
    generator: &ListingGenerator<L>,
    items: Vec<ItemDetails>,
    workers: usize,
    formatter: &Formatter,
    show_progress: bool,
) -> Result<BatchReport>
where
    L: GenerationService + Send + Sync + 'static,
    L::Error: Display,
{
    let pb = if show_progress {
        create_progress_bar(items.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let report = generator
        .generate_batch_with_progress(items, workers, |done, _| pb.set_position(done as u64))
        .await;
    pb.finish_and_clear();

    println!("{}", formatter.format_batch(&report)?);

    Ok(report)
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("Generating [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})")
        .unwrap_or_else(|e| {
            eprintln!("Failed to create progress bar template: {}", e);
            ProgressStyle::default_bar()
        })
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}
