//! Parse model output into a listing
//!
//! The model is asked to answer inside a `<START>` ... `<END>` block with
//! `Title:`, `Description:` and `Price Range:` labels, in that order. Parsing
//! walks the text explicitly: find the block, then search forward from each
//! label. It never fails; anything missing comes back as an empty field.

use listsmith_domain::GeneratedListing;
use tracing::{debug, warn};

/// Opening marker of the listing block
pub const START_MARKER: &str = "<START>";

/// Closing marker of the listing block
pub const END_MARKER: &str = "<END>";

const TITLE_LABEL: &str = "Title:";
const DESCRIPTION_LABEL: &str = "Description:";
const PRICE_RANGE_LABEL: &str = "Price Range:";

/// Parse raw model output into a listing
///
/// Only the first `<START>`/`<END>` block is considered; labels outside it
/// are ignored.
///
/// # Examples
///
/// ```
/// use listsmith_generator::parse_listing;
///
/// let listing = parse_listing("<START>\nTitle: Test Title\nDescription: Test Description\n<END>");
/// assert_eq!(listing.title, "Test Title");
/// assert_eq!(listing.description, "Test Description");
/// assert_eq!(listing.price_range, "");
/// ```
pub fn parse_listing(raw: &str) -> GeneratedListing {
    let Some(block) = find_block(raw) else {
        warn!(
            "No {}...{} block in model output ({} chars)",
            START_MARKER,
            END_MARKER,
            raw.len()
        );
        return GeneratedListing::default();
    };

    debug!("Listing block length: {} chars", block.len());

    GeneratedListing {
        title: capture_line(block, TITLE_LABEL),
        description: capture_until(block, DESCRIPTION_LABEL, PRICE_RANGE_LABEL),
        price_range: capture_line(block, PRICE_RANGE_LABEL),
    }
}

/// Text between the first start marker and the first end marker after it
fn find_block(raw: &str) -> Option<&str> {
    let start = raw.find(START_MARKER)? + START_MARKER.len();
    let len = raw[start..].find(END_MARKER)?;
    Some(raw[start..start + len].trim())
}

/// Text following the first occurrence of `label`, leading whitespace skipped
fn after_label<'a>(block: &'a str, label: &str) -> Option<&'a str> {
    let at = block.find(label)?;
    Some(block[at + label.len()..].trim_start())
}

/// Value of a single-line field
fn capture_line(block: &str, label: &str) -> String {
    after_label(block, label)
        .map(|rest| rest.split('\n').next().unwrap_or(rest))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Value of a field that runs until `terminator` or the end of the block
fn capture_until(block: &str, label: &str, terminator: &str) -> String {
    after_label(block, label)
        .map(|rest| match rest.find(terminator) {
            Some(end) => &rest[..end],
            None => rest,
        })
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
