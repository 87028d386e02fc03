//! Listsmith CLI - Generate marketplace listings with an LLM.

use clap::Parser;
use listsmith_cli::commands;
use listsmith_cli::export::export_results;
use listsmith_cli::{Cli, Config, Formatter, OutputFormat};
use listsmith_llm::OllamaProvider;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,listsmith_cli={level},listsmith_generator={level},listsmith_llm={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> listsmith_cli::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    config.validate()?;

    let formatter = Formatter::new(config.settings.format, config.settings.color);

    let provider = OllamaProvider::new(config.provider.clone())?;
    info!("Using model {}", provider.model());

    let comparables = commands::load_comparables(cli.comparables.as_deref())?;
    let generator = commands::build_generator(
        provider,
        config.generation.clone(),
        comparables,
        cli.template.as_deref(),
    )?;

    let outcomes = if cli.batch {
        let items = commands::batch_items(&cli)?;
        let show_progress = config.settings.format == OutputFormat::Text;
        let report = commands::execute_batch(
            &generator,
            items,
            config.settings.workers,
            &formatter,
            show_progress,
        )
        .await?;
        report.outcomes
    } else {
        let details = commands::single_item(&cli)?;
        vec![commands::execute_single(&generator, details, &formatter).await?]
    };

    if cli.export && !outcomes.is_empty() {
        let path = export_results(&outcomes, &config.settings.export_dir)?;
        eprintln!(
            "{}",
            formatter.success(&format!("Results exported to {}", path.display()))
        );
    }

    Ok(())
}
