//! Listsmith LLM Provider Layer
//!
//! Implementations of the `GenerationService` trait from `listsmith-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic, scriptable mock for testing
//! - `OllamaProvider`: Ollama-compatible HTTP API integration
//!
//! # Examples
//!
//! ```
//! use listsmith_llm::MockProvider;
//! use listsmith_domain::{GenerationRequest, GenerationService, SamplingParams};
//!
//! let provider = MockProvider::new("<START>\nTitle: Hello\n<END>");
//! let request = GenerationRequest {
//!     system: String::new(),
//!     prompt: "test prompt".to_string(),
//!     params: SamplingParams::default(),
//! };
//! assert_eq!(provider.generate(&request).unwrap(), "<START>\nTitle: Hello\n<END>");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod ollama;

use listsmith_domain::{GenerationRequest, GenerationService};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use config::ProviderConfig;
pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider misconfigured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
}

#[derive(Debug, Default)]
struct MockState {
    by_prompt: HashMap<String, MockReply>,
    queue: VecDeque<MockReply>,
    requests: Vec<GenerationRequest>,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Lookup order: a reply registered for the exact prompt, then the next
/// queued reply, then the default response. Clones share state.
///
/// # Examples
///
/// ```
/// use listsmith_llm::MockProvider;
/// use listsmith_domain::{GenerationRequest, GenerationService, SamplingParams};
///
/// let request = |prompt: &str| GenerationRequest {
///     system: String::new(),
///     prompt: prompt.to_string(),
///     params: SamplingParams::default(),
/// };
///
/// let provider = MockProvider::new("fallback");
/// provider.push_response("first");
/// provider.push_response("second");
/// assert_eq!(provider.generate(&request("a")).unwrap(), "first");
/// assert_eq!(provider.generate(&request("a")).unwrap(), "second");
/// assert_eq!(provider.generate(&request("a")).unwrap(), "fallback");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A poisoned mock only means another test thread panicked
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&self, prompt: impl Into<String>, response: impl Into<String>) {
        self.state()
            .by_prompt
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&self, prompt: impl Into<String>) {
        self.state().by_prompt.insert(prompt.into(), MockReply::Error);
    }

    /// Queue a response for the next call that has no prompt-specific reply
    pub fn push_response(&self, response: impl Into<String>) {
        self.state().queue.push_back(MockReply::Text(response.into()));
    }

    /// Queue an error for the next call that has no prompt-specific reply
    pub fn push_error(&self) {
        self.state().queue.push_back(MockReply::Error);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.state().requests.len()
    }

    /// Every request received so far, in call order
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.state().requests.clone()
    }

    /// Reset the call count and recorded requests
    pub fn reset_call_count(&self) {
        self.state().requests.clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl GenerationService for MockProvider {
    type Error = LlmError;

    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        let mut state = self.state();
        state.requests.push(request.clone());

        let specific = state.by_prompt.get(&request.prompt).cloned();
        let reply = specific.or_else(|| state.queue.pop_front());

        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}
