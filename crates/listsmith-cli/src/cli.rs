//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Listsmith - Generate marketplace listings with an LLM.
#[derive(Debug, Parser)]
#[command(name = "listsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run in batch mode
    #[arg(long)]
    pub batch: bool,

    /// Number of workers for batch processing
    #[arg(long)]
    pub workers: Option<usize>,

    /// Export results to a text file
    #[arg(long)]
    pub export: bool,

    /// Directory for exported files (default: current directory)
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Minimum quality score (0-100) before regenerating
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Model temperature (0.1-1.0)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Total generation attempts per item, including the first
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// JSON file with an array of items
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Text file of comparable sold listings, one per line
    #[arg(long)]
    pub comparables: Option<PathBuf>,

    /// Prompt template file
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Item brand (single-item mode)
    #[arg(long)]
    pub brand: Option<String>,

    /// Item model (single-item mode)
    #[arg(long)]
    pub model: Option<String>,

    /// Item variant (single-item mode)
    #[arg(long)]
    pub variant: Option<String>,

    /// Item condition (single-item mode)
    #[arg(long)]
    pub condition: Option<String>,

    /// Seller notes (single-item mode)
    #[arg(long)]
    pub notes: Option<String>,

    /// Generation API endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// LLM model identifier
    #[arg(long)]
    pub model_name: Option<String>,

    /// API key for hosted endpoints
    #[arg(long, env = "LISTSMITH_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether any single-item detail flag was given
    pub fn has_item_flags(&self) -> bool {
        self.brand.is_some()
            || self.model.is_some()
            || self.variant.is_some()
            || self.condition.is_some()
            || self.notes.is_some()
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
