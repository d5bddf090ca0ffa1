//! Command implementations for the item pipeline CLI
//!
//! This module contains the run command execution logic: logging setup,
//! configuration loading, source selection, and final report generation.

use crate::app::services::data_source::{ItemSource, JsonFileSource, SimulatedSource};
use crate::app::services::item_processor::ItemProcessor;
use crate::app::services::pipeline::{Pipeline, RunReport};
use crate::cli::args::{Args, Commands, OutputFormat, RunArgs, SourceKind};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use tracing::{debug, info};

/// Main command runner for the item pipeline
///
/// Orchestrates the workflow:
/// 1. Set up logging and configuration
/// 2. Build the requested data source and the processor
/// 3. Execute the pipeline run
/// 4. Generate the final report
pub fn run(args: Args) -> Result<RunReport> {
    let run_args = match args.command {
        Some(Commands::Run(run_args)) => run_args,
        None => {
            return Err(Error::configuration(
                "No command provided: expected 'run'",
            ));
        }
    };

    run_args.validate()?;

    let config = load_configuration(&run_args)?;
    setup_logging(&config, run_args.quiet);

    info!("Starting item pipeline");
    debug!("Loaded configuration: {:?}", config);
    info!(
        "Config - Data Path: {}, Threshold: {}",
        config.data_path.display(),
        config.threshold
    );

    let processor = ItemProcessor::new(config.threshold);
    let report = match run_args.source {
        SourceKind::Simulated => {
            let source = SimulatedSource::new(config.data_path.display().to_string());
            execute(source, processor, &run_args)?
        }
        SourceKind::Json => {
            let source = JsonFileSource::new(&config.data_path);
            execute(source, processor, &run_args)?
        }
    };

    match run_args.format {
        OutputFormat::Human => generate_human_report(&report),
        OutputFormat::Json => generate_json_report(&report),
    }

    Ok(report)
}

/// Build and run a pipeline over the given source
fn execute<S: ItemSource>(
    source: S,
    processor: ItemProcessor,
    run_args: &RunArgs,
) -> Result<RunReport> {
    let pipeline = Pipeline::new(source, processor).with_progress(run_args.show_progress());
    pipeline.run()
}

/// Load configuration with layered overrides (defaults -> file -> CLI args)
fn load_configuration(run_args: &RunArgs) -> Result<Config> {
    let mut config = match &run_args.config_file {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(data_path) = &run_args.data_path {
        config.data_path = data_path.clone();
    }
    if let Some(threshold) = run_args.threshold {
        config.threshold = threshold;
    }
    if let Some(log_level) = &run_args.log_level {
        config.log_level = log_level.to_lowercase();
    }

    config.validate()?;
    Ok(config)
}

/// Set up structured logging from the configured level
///
/// The level comes from the configuration rather than any process-wide
/// mutable state; `RUST_LOG` still wins when set.
fn setup_logging(config: &Config, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("item_pipeline={}", config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    // try_init so repeated calls (e.g. from tests) do not panic
    let result = if quiet {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", config.log_level);
    }
}

/// Generate the human-readable final report
fn generate_human_report(report: &RunReport) {
    println!("\n{}", "Item Pipeline Complete".bright_green().bold());
    println!(
        "  {} {}",
        "Records loaded:".bright_cyan(),
        report.records_loaded.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Records skipped:".bright_cyan(),
        report.records_skipped
    );
    println!(
        "  {} {}",
        "Items constructed:".bright_cyan(),
        report.items_constructed
    );
    println!(
        "  {} {}",
        "Processed successfully:".bright_cyan(),
        report.success_count.to_string().bright_white().bold()
    );
    if report.failure_count > 0 {
        println!(
            "  {} {}",
            "Processing failures:".bright_cyan(),
            report.failure_count.to_string().bright_red().bold()
        );
    } else {
        println!("  {} 0", "Processing failures:".bright_cyan());
    }
    println!(
        "  {} {}",
        "Saved:".bright_cyan(),
        if report.saved {
            "yes".bright_green()
        } else if report.is_empty_batch() {
            "skipped (empty batch)".bright_yellow()
        } else {
            "no".bright_red()
        }
    );
    println!(
        "  {} {:.2}s",
        "Duration:".bright_cyan(),
        report.duration.as_secs_f64()
    );
    println!();
}

/// Generate the JSON final report for machine consumption
fn generate_json_report(report: &RunReport) {
    let json_report = serde_json::json!({
        "records_loaded": report.records_loaded,
        "records_skipped": report.records_skipped,
        "items_constructed": report.items_constructed,
        "success_count": report.success_count,
        "failure_count": report.failure_count,
        "saved": report.saved,
        "stage": report.stage.to_string(),
        "duration_seconds": report.duration.as_secs_f64(),
        "partial_failure": report.has_partial_failure(),
    });

    match serde_json::to_string_pretty(&json_report) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => eprintln!("Failed to render JSON report: {}", e),
    }
}
