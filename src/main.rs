use clap::Parser;
use item_pipeline::cli::{
    args::{Args, Commands},
    commands,
};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let strict = matches!(&args.command, Some(Commands::Run(run_args)) if run_args.strict);

    match commands::run(args) {
        Ok(report) => {
            if strict && report.has_partial_failure() {
                // Strict mode surfaces partial failure through the exit code
                eprintln!("Run completed with partial failures: {}", report.summary());
                process::exit(2);
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Item Pipeline - Load, Process, Save");
    println!("===================================");
    println!();
    println!("Load raw item records from a data source, classify each item against a");
    println!("configured threshold, mark it processed, and save the ordered results.");
    println!();
    println!("USAGE:");
    println!("    item-pipeline <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    run         Execute one pipeline run (load, process, save, report)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Run against the built-in simulated data:");
    println!("    item-pipeline run");
    println!();
    println!("    # Run against a JSON data file with a custom threshold:");
    println!("    item-pipeline run --source json --data-path data/items.json --threshold 150");
    println!();
    println!("    # Fail the process when records were skipped:");
    println!("    item-pipeline run --strict");
    println!();
    println!("For detailed help on any command, use:");
    println!("    item-pipeline <COMMAND> --help");
}
