//! Flat-file export of generated listings.

use crate::error::Result;
use chrono::{DateTime, Local};
use listsmith_generator::ListingOutcome;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Export file name for a given time.
pub fn export_file_name(now: DateTime<Local>) -> String {
    format!("listings_{}.txt", now.format("%Y%m%d-%H%M%S"))
}

/// Render outcomes in export layout, numbered from 1.
pub fn render_export(outcomes: &[ListingOutcome]) -> String {
    let mut out = String::new();
    for (i, outcome) in outcomes.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "=== LISTING #{} ===\nTitle: {}\nDescription: {}\nPrice Range: {}\nQuality Score: {}/100\n\n\n",
            i + 1,
            outcome.listing.title,
            outcome.listing.description,
            outcome.listing.price_range,
            outcome.report.score,
        );
    }
    out
}

/// Write outcomes to a timestamped file in `dir`, returning its path.
pub fn export_results(outcomes: &[ListingOutcome], dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(Local::now()));
    fs::write(&path, render_export(outcomes))?;
    debug!("Wrote {} listings to {}", outcomes.len(), path.display());
    Ok(path)
}
