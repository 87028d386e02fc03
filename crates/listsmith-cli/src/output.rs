//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use listsmith_generator::{BatchReport, ListingOutcome};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest title shown in the summary table before truncation.
const SUMMARY_TITLE_CHARS: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format one generated listing, numbered from 1.
    pub fn format_outcome(&self, number: usize, outcome: &ListingOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&outcome_json(outcome))?),
            OutputFormat::Text => Ok(self.format_outcome_text(number, outcome)),
        }
    }

    fn format_outcome_text(&self, number: usize, outcome: &ListingOutcome) -> String {
        let request = &outcome.request;
        let mut lines = vec![
            self.colorize(&format!("=== GENERATED LISTING #{} ===", number), "cyan"),
            format!(
                "Item: {} {} ({})",
                request.brand(),
                request.model(),
                request.condition()
            ),
            format!("Title: {}", outcome.listing.title),
            String::new(),
            "Description:".to_string(),
            outcome.listing.description.clone(),
            String::new(),
            format!("Price Range: {}", outcome.listing.price_range),
            String::new(),
            self.score_line(outcome),
        ];

        if !outcome.report.suggestions.is_empty() {
            lines.push("Improvement Suggestions:".to_string());
            for suggestion in &outcome.report.suggestions {
                lines.push(format!("- {}", suggestion));
            }
        }

        lines.join("\n")
    }

    fn score_line(&self, outcome: &ListingOutcome) -> String {
        let attempts = if outcome.attempts == 1 {
            "1 attempt".to_string()
        } else {
            format!("{} attempts", outcome.attempts)
        };
        let line = format!("Quality Score: {}/100 ({})", outcome.report.score, attempts);

        let color = match outcome.report.score {
            85..=100 => "green",
            70..=84 => "yellow",
            _ => "red",
        };
        self.colorize(&line, color)
    }

    /// Format a whole batch run.
    pub fn format_batch(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_batch_json(report),
            OutputFormat::Text => Ok(self.format_batch_text(report)),
        }
    }

    fn format_batch_json(&self, report: &BatchReport) -> Result<String> {
        let listings: Vec<serde_json::Value> = report.outcomes.iter().map(outcome_json).collect();
        let failures: Vec<serde_json::Value> = report
            .failures
            .iter()
            .map(|f| {
                serde_json::json!({
                    "index": f.index,
                    "item": f.label,
                    "reason": f.reason
                })
            })
            .collect();

        let value = serde_json::json!({
            "successful": report.successful(),
            "failed": report.failed(),
            "listings": listings,
            "failures": failures
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_batch_text(&self, report: &BatchReport) -> String {
        let mut sections = Vec::new();

        if !report.outcomes.is_empty() {
            sections.push(format!("Generated {} listings:", report.successful()));
            for (i, outcome) in report.outcomes.iter().enumerate() {
                sections.push(self.format_outcome_text(i + 1, outcome));
            }
            sections.push(self.summary_table(report));
        }

        for failure in &report.failures {
            sections.push(self.error(&format!(
                "Item {} ({}) failed: {}",
                failure.index + 1,
                failure.label,
                failure.reason
            )));
        }

        sections.push(self.batch_counts(report));
        sections.join("\n\n")
    }

    /// Summary table of successful outcomes.
    pub fn summary_table(&self, report: &BatchReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Item", "Condition", "Score", "Attempts", "Title"]);

        for (i, outcome) in report.outcomes.iter().enumerate() {
            let item = format!("{} {}", outcome.request.brand(), outcome.request.model());
            builder.push_record([
                (i + 1).to_string(),
                item,
                outcome.request.condition().to_string(),
                outcome.report.score.to_string(),
                outcome.attempts.to_string(),
                truncate(&outcome.listing.title, SUMMARY_TITLE_CHARS),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// "N successful, M failed" line.
    pub fn batch_counts(&self, report: &BatchReport) -> String {
        let line = format!(
            "Batch generation completed: {} successful, {} failed",
            report.successful(),
            report.failed()
        );
        if report.failed() == 0 {
            self.success(&line)
        } else {
            self.warning(&line)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn outcome_json(outcome: &ListingOutcome) -> serde_json::Value {
    let request = &outcome.request;
    serde_json::json!({
        "item": {
            "brand": request.brand(),
            "model": request.model(),
            "variant": request.variant(),
            "condition": request.condition(),
            "notes": request.notes()
        },
        "title": outcome.listing.title,
        "description": outcome.listing.description,
        "price_range": outcome.listing.price_range,
        "quality_score": outcome.report.score,
        "suggestions": outcome.report.suggestions,
        "attempts": outcome.attempts
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
