//! Configuration management for the CLI.
//!
//! Precedence: command-line flags, then the config file, then defaults.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use listsmith_generator::GeneratorConfig;
use listsmith_llm::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation backend connection
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Sampling and regeneration policy
    #[serde(default)]
    pub generation: GeneratorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Concurrent items in batch mode
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Directory for exported files
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".listsmith").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// if present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Apply command-line overrides.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.provider.endpoint = endpoint.clone();
        }
        if let Some(model_name) = &cli.model_name {
            self.provider.model = model_name.clone();
        }
        if let Some(api_key) = &cli.api_key {
            self.provider.api_key = Some(api_key.clone());
        }
        if let Some(temperature) = cli.temperature {
            self.generation.temperature = temperature;
        }
        if let Some(min_score) = cli.min_score {
            self.generation.min_score = min_score;
        }
        if let Some(max_attempts) = cli.max_attempts {
            self.generation.max_attempts = max_attempts;
        }
        if let Some(workers) = cli.workers {
            self.settings.workers = workers;
        }
        if let Some(export_dir) = &cli.export_dir {
            self.settings.export_dir = export_dir.clone();
        }
        if let Some(format) = cli.format {
            self.settings.format = format.into();
        }
        if cli.no_color {
            self.settings.color = false;
        }
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<()> {
        self.provider.validate().map_err(CliError::Config)?;
        self.generation.validate().map_err(CliError::Config)?;
        if self.settings.workers == 0 {
            return Err(CliError::Config("workers must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            workers: default_workers(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_workers() -> usize {
    4
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}
