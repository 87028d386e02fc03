//! Result types for generation

use listsmith_domain::{GeneratedListing, ListingRequest, QualityReport};

/// Result of generating a listing for one item
#[derive(Debug, Clone)]
pub struct ListingOutcome {
    /// The validated item the listing was generated for
    pub request: ListingRequest,

    /// Best listing across all attempts
    pub listing: GeneratedListing,

    /// Quality report for `listing`
    pub report: QualityReport,

    /// Number of generation calls made
    pub attempts: u32,
}

/// An item that could not be turned into a listing
#[derive(Debug, Clone)]
pub struct BatchFailure {
    /// Position of the item in the input
    pub index: usize,

    /// Short item label (model name or "item")
    pub label: String,

    /// Why it failed
    pub reason: String,
}

/// Result of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Successful outcomes, highest score first
    pub outcomes: Vec<ListingOutcome>,

    /// Failed items, in input order
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of items that produced a listing
    pub fn successful(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of items that failed
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Number of items processed
    pub fn total(&self) -> usize {
        self.successful() + self.failed()
    }
}
