//! Listsmith Generator
//!
//! Turns structured item details into e-commerce listings using an LLM,
//! scores the result and regenerates low-quality output.
//!
//! # Architecture
//!
//! ```text
//! ItemDetails → validate → PromptBuilder → LLM → parse_listing → evaluate_listing
//!                                          ↑                          │
//!                                          └── score < min_score ─────┘ (up to max_attempts)
//! ```
//!
//! # Key Features
//!
//! - **Output parsing**: tolerant extraction of title, description and price
//!   range from a `<START>`/`<END>` block; never fails
//! - **Quality scoring**: fixed, deterministic 0-100 heuristics with suggestions
//! - **Regeneration**: bounded attempts, best-scoring attempt kept
//! - **Batch processing**: bounded concurrency, per-item failure isolation
//!
//! # Example Usage
//!
//! ```no_run
//! use listsmith_generator::{GeneratorConfig, ListingGenerator};
//! use listsmith_domain::ItemDetails;
//! use listsmith_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("<START>\nTitle: ...\n<END>");
//! let generator = ListingGenerator::new(llm, GeneratorConfig::default())?
//!     .with_comparables(vec!["Similar item sold for $15 (New)".to_string()]);
//!
//! let details = ItemDetails {
//!     brand: Some("Example Brand".to_string()),
//!     model: Some("Model A".to_string()),
//!     condition: Some("New".to_string()),
//!     ..Default::default()
//! };
//!
//! let outcome = generator.generate_from_details(details).await?;
//! println!("{} ({}/100)", outcome.listing.title, outcome.report.score);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod batch;
mod config;
mod error;
mod generator;
mod parser;
mod prompt;
mod quality;
mod types;

#[cfg(test)]
mod tests;

pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::ListingGenerator;
pub use parser::{parse_listing, END_MARKER, START_MARKER};
pub use prompt::{validate_template, PromptBuilder, DEFAULT_TEMPLATE, PLACEHOLDERS, SYSTEM_PROMPT};
pub use quality::{evaluate_listing, find_issues, QualityIssue};
pub use types::{BatchFailure, BatchReport, ListingOutcome};
