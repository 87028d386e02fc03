//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Sampling parameters passed to the generation service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Penalty applied to repeated tokens
    pub repeat_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 512,
            top_p: 0.95,
            repeat_penalty: 1.15,
        }
    }
}

impl SamplingParams {
    /// Same parameters with a different temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// A structured request to the generation service
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System instruction
    pub system: String,
    /// User prompt
    pub prompt: String,
    /// Sampling parameters
    pub params: SamplingParams,
}

/// Trait for text generation backends
///
/// Implemented by the infrastructure layer (listsmith-llm)
pub trait GenerationService {
    /// Error type for generation operations
    type Error;

    /// Generate raw text for the given request
    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error>;
}
