//! Ollama Provider Implementation
//!
//! Talks to an Ollama-compatible `/api/generate` endpoint.
//!
//! # Features
//!
//! - Async HTTP communication via `reqwest`
//! - Endpoint, model, credential and timeout injected through [`ProviderConfig`]
//! - Sampling options (temperature, top_p, repeat penalty, token budget)
//!   forwarded per request
//!
//! A failed call is reported once; retrying is the caller's decision.
//!
//! # Examples
//!
//! ```no_run
//! use listsmith_llm::{OllamaProvider, ProviderConfig};
//!
//! let config = ProviderConfig::new("http://localhost:11434", "llama3.1:8b-instruct");
//! let provider = OllamaProvider::new(config).unwrap();
//! ```

use crate::{LlmError, ProviderConfig};
use listsmith_domain::{GenerationRequest, GenerationService};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ollama API provider
pub struct OllamaProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    top_p: f32,
    repeat_penalty: f32,
    num_predict: u32,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider from explicit settings
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if the settings are invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self, LlmError> {
        config.validate().map_err(LlmError::Config)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Model identifier requests are sent to
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate text using the Ollama API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint is unreachable or times out
    /// - The model is not available (HTTP 404)
    /// - The server answers with any other non-success status
    /// - The response body is not a valid generate response
    pub async fn generate_async(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.config.endpoint.trim_end_matches('/'));

        let body = OllamaGenerateRequest {
            model: &self.config.model,
            system: &request.system,
            prompt: &request.prompt,
            stream: false,
            options: OllamaOptions {
                temperature: request.params.temperature,
                top_p: request.params.top_p,
                repeat_penalty: request.params.repeat_penalty,
                num_predict: request.params.max_tokens,
            },
        };

        debug!(
            "POST {} (model: {}, temperature: {})",
            url, self.config.model, request.params.temperature
        );

        let mut builder = self.client.post(&url).json(&body);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.config.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed = response
            .json::<OllamaGenerateResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(parsed.response.trim().to_string())
    }
}

impl GenerationService for OllamaProvider {
    type Error = LlmError;

    /// Blocking wrapper around [`OllamaProvider::generate_async`]
    ///
    /// Reuses the ambient tokio runtime when called from a blocking-pool
    /// thread (`spawn_blocking`); builds a private runtime otherwise. Must not
    /// be called directly from an async task.
    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.generate_async(request)),
            Err(_) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
                .block_on(self.generate_async(request)),
        }
    }
}
