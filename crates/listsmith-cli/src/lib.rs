//! Listsmith CLI library.
//!
//! Argument parsing, configuration, item input, display, and export for the
//! `listsmith` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod output;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
