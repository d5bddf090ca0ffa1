//! Command-line argument definitions for the item pipeline
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::LOG_LEVELS;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the item pipeline
///
/// Runs the load/process/save pipeline over item records, classifying each
/// item against a configured threshold.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "item-pipeline",
    version,
    about = "Run the item load/process/save pipeline with threshold-based classification",
    long_about = "Loads raw item records from a data source, validates and constructs items \
                  (skipping incomplete records), classifies each item's value against a \
                  configured threshold, marks every item processed, and saves the full \
                  ordered sequence back to the source with a final run report."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the item pipeline
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Execute one pipeline run (load, process, save, report)
    Run(RunArgs),
}

/// Arguments for the run command
#[derive(Debug, Clone, Parser)]
pub struct RunArgs {
    /// Path to the item data source
    ///
    /// For the simulated source this is a nominal label used in logs.
    /// For the json source it must point at a JSON array of records.
    #[arg(
        short = 'd',
        long = "data-path",
        value_name = "PATH",
        help = "Path to the item data source"
    )]
    pub data_path: Option<PathBuf>,

    /// Processing threshold
    ///
    /// Items with a value strictly above the threshold are reported as
    /// exceeding it; all others as within it. The comparison only selects
    /// which informational outcome is logged.
    #[arg(
        short = 't',
        long = "threshold",
        value_name = "N",
        help = "Processing threshold for item classification"
    )]
    pub threshold: Option<i32>,

    /// Data source kind to run against
    #[arg(
        long = "source",
        value_enum,
        default_value_t = SourceKind::Simulated,
        help = "Data source kind (simulated or json file)"
    )]
    pub source: SourceKind,

    /// Path to a JSON configuration file
    ///
    /// Keys: data_path, threshold, log_level. CLI flags override file values.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to a JSON configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Logging level for the run"
    )]
    pub log_level: Option<String>,

    /// Suppress progress output and use compact logging
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,

    /// Disable the processing progress bar
    #[arg(long = "no-progress", help = "Disable the processing progress bar")]
    pub no_progress: bool,

    /// Exit with a distinct status when the run had partial failures
    ///
    /// By default the process exits 0 even when records were skipped or a
    /// save failed, matching the pipeline's swallow-and-report policy.
    #[arg(
        long = "strict",
        help = "Exit non-zero when records were skipped or processing/saving failed"
    )]
    pub strict: bool,

    /// Output format for the final report
    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Human,
        help = "Output format for the final report"
    )]
    pub format: OutputFormat,
}

/// Supported data source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// In-memory source with a fixed record set and simulated persistence
    Simulated,
    /// JSON file source reading and writing a real file
    Json,
}

/// Output formats for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored summary
    Human,
    /// Machine-readable JSON
    Json,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl RunArgs {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log_level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(Error::configuration(format!(
                    "Invalid log level '{}': expected one of {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        if self.source == SourceKind::Json {
            if let Some(path) = &self.data_path {
                if path.as_os_str().is_empty() {
                    return Err(Error::configuration(
                        "Data path cannot be empty for the json source",
                    ));
                }
            }
        }

        Ok(())
    }

    /// Whether the progress bar should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_run(args: &[&str]) -> RunArgs {
        let full: Vec<&str> = ["item-pipeline", "run"].iter().chain(args.iter()).copied().collect();
        match Args::try_parse_from(full).unwrap().command.unwrap() {
            Commands::Run(run_args) => run_args,
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse_run(&[]);
        assert_eq!(args.data_path, None);
        assert_eq!(args.threshold, None);
        assert_eq!(args.source, SourceKind::Simulated);
        assert_eq!(args.format, OutputFormat::Human);
        assert!(!args.strict);
        assert!(args.show_progress());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_full_flag_set() {
        let args = parse_run(&[
            "--data-path",
            "items.json",
            "--threshold",
            "250",
            "--source",
            "json",
            "--log-level",
            "debug",
            "--strict",
            "--format",
            "json",
        ]);
        assert_eq!(args.data_path, Some(PathBuf::from("items.json")));
        assert_eq!(args.threshold, Some(250));
        assert_eq!(args.source, SourceKind::Json);
        assert!(args.strict);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let args = parse_run(&["--log-level", "shouty"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_quiet_disables_progress() {
        let args = parse_run(&["--quiet"]);
        assert!(!args.show_progress());

        let args = parse_run(&["--no-progress"]);
        assert!(!args.show_progress());
    }
}
