//! Error types for the generator

use listsmith_domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while generating a listing
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Item details failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Generation service error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Generation call exceeded the configured timeout
    #[error("Generation timed out after {0}s")]
    Timeout(u64),

    /// Prompt template could not be rendered
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
