//! Listsmith Domain Layer
//!
//! Core value types and trait interfaces for listing generation. This crate
//! has ZERO external dependencies; infrastructure (LLM clients, CLI, file
//! export) lives in other crates and depends on the types defined here.
//!
//! ## Key Concepts
//!
//! - **ItemDetails**: Raw, unvalidated item description as received from input
//! - **ListingRequest**: Validated, normalized item ready for prompting
//! - **GeneratedListing**: Title, description and price range parsed from model output
//! - **QualityReport**: Deterministic 0-100 score plus improvement suggestions
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure business logic only
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod item;
pub mod listing;
pub mod traits;

// Re-exports for convenience
pub use item::{ItemDetails, ListingRequest, ValidationError};
pub use listing::{GeneratedListing, QualityReport};
pub use traits::{GenerationRequest, GenerationService, SamplingParams};
