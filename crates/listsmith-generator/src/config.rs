//! Configuration for the listing generator

use listsmith_domain::SamplingParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lowest accepted sampling temperature
pub const MIN_TEMPERATURE: f32 = 0.1;

/// Highest accepted sampling temperature
pub const MAX_TEMPERATURE: f32 = 1.0;

/// Configuration for the ListingGenerator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Temperature for the first attempt
    pub temperature: f32,

    /// Temperature for every regeneration attempt
    pub retry_temperature: f32,

    /// Maximum tokens per generation
    pub max_tokens: u32,

    /// Nucleus sampling cutoff
    pub top_p: f32,

    /// Repetition penalty
    pub repeat_penalty: f32,

    /// Listings scoring below this are regenerated (0-100)
    pub min_score: u8,

    /// Total generation attempts per item, including the first
    pub max_attempts: u32,

    /// Maximum time for a single generation call (seconds)
    pub generation_timeout_secs: u64,
}

impl GeneratorConfig {
    /// Sampling parameters for the first attempt
    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
            repeat_penalty: self.repeat_penalty,
        }
    }

    /// Sampling parameters for regeneration attempts
    pub fn retry_sampling(&self) -> SamplingParams {
        self.sampling().with_temperature(self.retry_temperature)
    }

    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("temperature", self.temperature),
            ("retry_temperature", self.retry_temperature),
        ] {
            if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
                return Err(format!(
                    "{} must be between {} and {} (got {})",
                    name, MIN_TEMPERATURE, MAX_TEMPERATURE, value
                ));
            }
        }
        if self.top_p <= 0.0 || self.top_p > 1.0 {
            return Err(format!("top_p must be in (0, 1] (got {})", self.top_p));
        }
        if self.repeat_penalty <= 0.0 {
            return Err("repeat_penalty must be greater than 0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if self.min_score > 100 {
            return Err(format!("min_score must be at most 100 (got {})", self.min_score));
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    /// Default configuration: one regeneration below a score of 70
    fn default() -> Self {
        Self {
            temperature: 0.7,
            retry_temperature: 0.8,
            max_tokens: 512,
            top_p: 0.95,
            repeat_penalty: 1.15,
            min_score: 70,
            max_attempts: 2,
            generation_timeout_secs: 300,
        }
    }
}

impl GeneratorConfig {
    /// Strict preset: higher bar, more regeneration attempts
    pub fn strict() -> Self {
        Self {
            min_score: 85,
            max_attempts: 3,
            ..Self::default()
        }
    }

    /// Lenient preset: lower bar, never regenerates
    pub fn lenient() -> Self {
        Self {
            min_score: 50,
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
