//! Integration tests for the ListingGenerator

#[cfg(test)]
mod tests {
    use crate::{GeneratorConfig, GeneratorError, ListingGenerator};
    use listsmith_domain::{GenerationRequest, GenerationService, ItemDetails, ListingRequest};
    use listsmith_llm::MockProvider;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const GOOD: &str = "<START>\nTitle: Premium Brand Pro Model C Limited Edition\nDescription: Collector's item in original packaging. This limited edition Pro Model C is new, unused, and ships with every accessory it came with from the factory.\nPrice Range: $22-$28\n<END>";

    // Short title and brief description: 65 points
    const WEAK: &str = "<START>\nTitle: Example Title\nDescription: Example Description\nPrice Range: $10-$20\n<END>";

    const GARBAGE: &str = "I'm sorry, I can't help with that.";

    /// Service that answers well, but only after the generation timeout
    struct SlowService;

    impl GenerationService for SlowService {
        type Error = String;

        fn generate(&self, _request: &GenerationRequest) -> Result<String, Self::Error> {
            std::thread::sleep(Duration::from_millis(2500));
            Ok(GOOD.to_string())
        }
    }

    fn one_second_timeout() -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        config.generation_timeout_secs = 1;
        config
    }

    fn details(brand: &str, model: &str, condition: &str) -> ItemDetails {
        ItemDetails {
            brand: Some(brand.to_string()),
            model: Some(model.to_string()),
            condition: Some(condition.to_string()),
            ..Default::default()
        }
    }

    fn request() -> ListingRequest {
        ListingRequest::new("Example Brand", "Model A", "New").unwrap()
    }

    #[tokio::test]
    async fn test_low_score_triggers_one_regeneration() {
        let llm = MockProvider::new(GOOD);
        llm.push_response(WEAK);

        let generator = ListingGenerator::new(llm.clone(), GeneratorConfig::default()).unwrap();
        let outcome = generator.generate(&request()).await.unwrap();

        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.report.score, 100);
        assert_eq!(llm.call_count(), 2);

        let sent = llm.requests();
        assert_eq!(sent[0].params.temperature, 0.7);
        assert_eq!(sent[1].params.temperature, 0.8);
    }

    #[tokio::test]
    async fn test_best_attempt_is_kept() {
        let llm = MockProvider::new(GARBAGE);
        llm.push_response(WEAK);

        let generator = ListingGenerator::new(llm, GeneratorConfig::default()).unwrap();
        let outcome = generator.generate(&request()).await.unwrap();

        // Second attempt scored 0, first attempt's 65 survives
        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.report.score, 65);
        assert_eq!(outcome.listing.title, "Example Title");
        assert_eq!(
            outcome.report.suggestions,
            vec!["Title is too short", "Description is too brief"]
        );
    }

    #[tokio::test]
    async fn test_max_attempts_bounds_regeneration() {
        let llm = MockProvider::new(GARBAGE);
        let mut config = GeneratorConfig::default();
        config.max_attempts = 4;

        let generator = ListingGenerator::new(llm.clone(), config).unwrap();
        let outcome = generator.generate(&request()).await.unwrap();

        assert_eq!(outcome.attempts, 4);
        assert_eq!(outcome.report.score, 0);
        assert_eq!(llm.call_count(), 4);
    }

    #[tokio::test]
    async fn test_single_attempt_never_regenerates() {
        let llm = MockProvider::new(GOOD);
        llm.push_response(GARBAGE);

        let generator = ListingGenerator::new(llm.clone(), GeneratorConfig::lenient()).unwrap();
        let outcome = generator.generate(&request()).await.unwrap();

        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.report.score, 0);
        assert_eq!(
            outcome.report.suggestions,
            vec!["Missing title", "Missing description", "Missing price range"]
        );
    }

    #[tokio::test]
    async fn test_min_score_zero_accepts_anything() {
        let llm = MockProvider::new(GARBAGE);
        let mut config = GeneratorConfig::default();
        config.min_score = 0;

        let generator = ListingGenerator::new(llm.clone(), config).unwrap();
        generator.generate(&request()).await.unwrap();
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_validation_happens_before_generation() {
        let llm = MockProvider::new(GOOD);
        let generator = ListingGenerator::new(llm.clone(), GeneratorConfig::default()).unwrap();

        let raw = ItemDetails {
            brand: Some("X".to_string()),
            condition: Some("New".to_string()),
            ..Default::default()
        };
        let result = generator.generate_from_details(raw).await;

        match result {
            Err(GeneratorError::Validation(e)) => assert_eq!(e.missing_fields(), &["model"]),
            other => panic!("Expected validation error, got {:?}", other.map(|o| o.attempts)),
        }
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_comparables_reach_the_prompt() {
        let llm = MockProvider::new(GOOD);
        let generator = ListingGenerator::new(llm.clone(), GeneratorConfig::default())
            .unwrap()
            .with_comparables(vec!["Used version sold for $8-10".to_string()]);

        generator.generate(&request()).await.unwrap();
        assert!(llm.requests()[0].prompt.contains("- Used version sold for $8-10"));
    }

    #[tokio::test]
    async fn test_custom_template_is_used() {
        let llm = MockProvider::new(GOOD);
        let generator = ListingGenerator::new(llm.clone(), GeneratorConfig::default())
            .unwrap()
            .with_template("Sell {brand} {model} ({condition})")
            .unwrap();

        generator.generate(&request()).await.unwrap();
        assert_eq!(llm.requests()[0].prompt, "Sell Example Brand Model A (New)");
    }

    #[tokio::test]
    async fn test_batch_isolates_failures_and_sorts_by_score() {
        let llm = MockProvider::new(GOOD);
        let generator = ListingGenerator::new(llm.clone(), GeneratorConfig::default())
            .unwrap()
            .with_template("{model}")
            .unwrap();
        // Prompt is just the model name, so replies can be keyed per item
        llm.add_response("Weak Model", WEAK);
        llm.add_error("Broken Model");

        let items = vec![
            details("Brand", "Weak Model", "Used"),
            details("Brand", "", "New"),
            details("Brand", "Good Model", "New"),
            details("Brand", "Broken Model", "New"),
        ];

        let report = generator.generate_batch(items, 2).await;

        assert_eq!(report.total(), 4);
        assert_eq!(report.successful(), 2);
        assert_eq!(report.failed(), 2);

        assert_eq!(report.outcomes[0].request.model(), "Good Model");
        assert_eq!(report.outcomes[0].report.score, 100);
        assert_eq!(report.outcomes[1].request.model(), "Weak Model");
        assert_eq!(report.outcomes[1].report.score, 65);
        assert_eq!(report.outcomes[1].attempts, 2);

        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.failures[0].label, "item");
        assert!(report.failures[0].reason.contains("model"));
        assert_eq!(report.failures[1].index, 3);
        assert_eq!(report.failures[1].label, "Broken Model");
    }

    #[tokio::test]
    async fn test_batch_reports_progress_for_every_item() {
        let generator = ListingGenerator::new(MockProvider::new(GOOD), GeneratorConfig::default()).unwrap();
        let items: Vec<_> = (0..5)
            .map(|i| details("Brand", &format!("Model {}", i), "New"))
            .collect();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let report = generator
            .generate_batch_with_progress(items, 3, move |done, total| {
                sink.lock().unwrap().push((done, total));
            })
            .await;

        assert_eq!(report.successful(), 5);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]
        );
    }

    #[tokio::test]
    async fn test_batch_with_zero_workers_still_runs() {
        let generator = ListingGenerator::new(MockProvider::new(GOOD), GeneratorConfig::default()).unwrap();
        let report = generator
            .generate_batch(vec![details("Brand", "Model", "New")], 0)
            .await;
        assert_eq!(report.successful(), 1);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let generator = ListingGenerator::new(MockProvider::new(GOOD), GeneratorConfig::default()).unwrap();
        let report = generator.generate_batch(Vec::new(), 4).await;
        assert_eq!(report.total(), 0);
    }

    #[tokio::test]
    async fn test_slow_generation_times_out() {
        let generator = ListingGenerator::new(SlowService, one_second_timeout()).unwrap();
        let result = generator.generate(&request()).await;

        match result {
            Err(GeneratorError::Timeout(secs)) => assert_eq!(secs, 1),
            other => panic!("Expected timeout, got {:?}", other.map(|o| o.attempts)),
        }
    }

    #[tokio::test]
    async fn test_batch_counts_timed_out_item_as_failed() {
        let generator = ListingGenerator::new(SlowService, one_second_timeout()).unwrap();
        let report = generator
            .generate_batch(vec![details("Brand", "Slow Model", "New")], 1)
            .await;

        assert_eq!(report.successful(), 0);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures[0].label, "Slow Model");
        assert_eq!(report.failures[0].reason, "Generation timed out after 1s");
    }
}
