//! Core ListingGenerator implementation

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::parser::parse_listing;
use crate::prompt::{validate_template, PromptBuilder, DEFAULT_TEMPLATE, SYSTEM_PROMPT};
use crate::quality::evaluate_listing;
use crate::types::ListingOutcome;
use listsmith_domain::{
    GeneratedListing, GenerationRequest, GenerationService, ItemDetails, ListingRequest,
    QualityReport, SamplingParams,
};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// Turns item details into scored listings using a generation service
pub struct ListingGenerator<L>
where
    L: GenerationService,
{
    llm_provider: Arc<L>,
    config: GeneratorConfig,
    comparables: Arc<[String]>,
    template: Arc<str>,
}

// Manual impl: L itself need not be Clone
impl<L: GenerationService> Clone for ListingGenerator<L> {
    fn clone(&self) -> Self {
        Self {
            llm_provider: Arc::clone(&self.llm_provider),
            config: self.config.clone(),
            comparables: Arc::clone(&self.comparables),
            template: Arc::clone(&self.template),
        }
    }
}

impl<L> ListingGenerator<L>
where
    L: GenerationService + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new ListingGenerator
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Config`] if the configuration is invalid.
    pub fn new(llm_provider: L, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate().map_err(GeneratorError::Config)?;

        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            config,
            comparables: Arc::from(Vec::new()),
            template: Arc::from(DEFAULT_TEMPLATE),
        })
    }

    /// Set the comparable sold-listing snippets included in every prompt
    pub fn with_comparables(mut self, comparables: Vec<String>) -> Self {
        self.comparables = Arc::from(comparables);
        self
    }

    /// Use a custom prompt template
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Template`] if the template uses an unknown
    /// placeholder or has unbalanced braces.
    pub fn with_template(mut self, template: impl Into<String>) -> Result<Self, GeneratorError> {
        let template = template.into();
        validate_template(&template)?;
        self.template = Arc::from(template);
        Ok(self)
    }

    /// The active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate raw item details, then generate
    pub async fn generate_from_details(
        &self,
        details: ItemDetails,
    ) -> Result<ListingOutcome, GeneratorError> {
        let request = ListingRequest::from_details(details)?;
        self.generate(&request).await
    }

    /// Generate a listing, regenerating while the score is below `min_score`
    ///
    /// The first attempt uses `temperature`, later attempts use
    /// `retry_temperature`. Stops at the first attempt that meets
    /// `min_score` or after `max_attempts`; the highest-scoring attempt is
    /// kept (the earliest one on ties).
    pub async fn generate(&self, request: &ListingRequest) -> Result<ListingOutcome, GeneratorError> {
        let prompt = PromptBuilder::new(request)
            .with_comparables(&self.comparables)
            .with_template(&self.template)
            .build()?;

        debug!("Prompt length: {} chars", prompt.len());

        let max_attempts = self.config.max_attempts;
        let mut best: Option<(GeneratedListing, QualityReport)> = None;
        let mut attempts = 0;

        while attempts < max_attempts {
            attempts += 1;
            let params = if attempts == 1 {
                self.config.sampling()
            } else {
                self.config.retry_sampling()
            };

            let raw = self.call_llm(&prompt, params).await?;
            debug!("LLM response length: {} chars", raw.len());

            let listing = parse_listing(&raw);
            let report = evaluate_listing(&listing);
            let score = report.score;
            let passed = report.passes(self.config.min_score);

            info!(
                "Attempt {}/{} for {}: score {}",
                attempts,
                max_attempts,
                request.model(),
                score
            );

            let improves = best
                .as_ref()
                .is_none_or(|(_, kept)| report.score > kept.score);
            if improves {
                best = Some((listing, report));
            }

            if passed {
                break;
            }
            if attempts < max_attempts {
                info!(
                    "Low quality score ({}), regenerating {}...",
                    score,
                    request.model()
                );
            }
        }

        let (listing, report) = best
            .ok_or_else(|| GeneratorError::Config("max_attempts must be at least 1".to_string()))?;

        Ok(ListingOutcome {
            request: request.clone(),
            listing,
            report,
            attempts,
        })
    }

    /// Call the generation service with the configured timeout
    async fn call_llm(&self, prompt: &str, params: SamplingParams) -> Result<String, GeneratorError> {
        let llm = Arc::clone(&self.llm_provider);
        let request = GenerationRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: prompt.to_string(),
            params,
        };

        // Call in a blocking context since GenerationService is not async
        let call = tokio::task::spawn_blocking(move || {
            llm.generate(&request)
                .map_err(|e| GeneratorError::Llm(e.to_string()))
        });

        timeout(self.config.generation_timeout(), call)
            .await
            .map_err(|_| GeneratorError::Timeout(self.config.generation_timeout_secs))?
            .map_err(|e| GeneratorError::Llm(format!("Task join error: {}", e)))?
    }
}
