//! Batch generation across many items
//!
//! Items run as independent tokio tasks, at most `workers` at a time. A
//! failure in one item is recorded and never affects the others.

use crate::generator::ListingGenerator;
use crate::types::{BatchFailure, BatchReport};
use listsmith_domain::{GenerationService, ItemDetails};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};

impl<L> ListingGenerator<L>
where
    L: GenerationService + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Generate listings for every item, `workers` at a time
    pub async fn generate_batch(&self, items: Vec<ItemDetails>, workers: usize) -> BatchReport {
        self.generate_batch_with_progress(items, workers, |_, _| {}).await
    }

    /// Like [`generate_batch`](Self::generate_batch), calling
    /// `on_progress(done, total)` as each item is collected
    ///
    /// Items are collected in input order; outcomes are then sorted by
    /// score, highest first.
    pub async fn generate_batch_with_progress<F>(
        &self,
        items: Vec<ItemDetails>,
        workers: usize,
        mut on_progress: F,
    ) -> BatchReport
    where
        F: FnMut(usize, usize),
    {
        let workers = workers.max(1);
        let total = items.len();
        info!("Starting batch generation with {} workers...", workers);

        let semaphore = Arc::new(Semaphore::new(workers));
        let mut handles = Vec::with_capacity(total);

        for details in items {
            let label = details.label();
            let generator = self.clone();
            let semaphore = Arc::clone(&semaphore);

            let handle = tokio::spawn(async move {
                // The semaphore is never closed, so acquire only fails on close
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| e.to_string())?;
                let outcome = generator
                    .generate_from_details(details)
                    .await
                    .map_err(|e| e.to_string())?;
                Ok::<_, String>(outcome)
            });
            handles.push((label, handle));
        }

        let mut report = BatchReport::default();

        for (index, (label, handle)) in handles.into_iter().enumerate() {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(format!("Task failed: {}", e)),
            };

            match result {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(reason) => {
                    warn!("Error processing {}: {}", label, reason);
                    report.failures.push(BatchFailure { index, label, reason });
                }
            }
            on_progress(index + 1, total);
        }

        info!(
            "Batch generation completed: {} successful, {} failed",
            report.successful(),
            report.failed()
        );

        report
            .outcomes
            .sort_by(|a, b| b.report.score.cmp(&a.report.score));
        report
    }
}
