//! aoc25 - Command-line runner for the Advent of Code 2025 solutions

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Link the solutions crate so its plugins are registered
use aoc25_days as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc25_solver::{DayRegistry, DayRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing::{info, warn};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    logging::init_logging()?;
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    info!(days = registry.len(), "registry built");

    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing: Vec<_> = work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.day))
        .map(|w| executor.inputs().path(w.day))
        .collect();
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for path in &missing {
            eprintln!("  - {}", path.display());
        }
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    run_executor(executor, ResultKey::expected(&work_items), config.quiet)
}

/// Run the executor on a background thread and print results in order
fn run_executor(
    executor: Executor,
    expected_keys: Vec<ResultKey>,
    quiet: bool,
) -> Result<(), CliError> {
    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Only non-empty if the executor stopped early
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::ExecutorPanicked)??;

    formatter.print_summary(&results);
    Ok(())
}

/// Register every plugin carrying all of `tags`
fn build_registry(tags: &[String]) -> Result<DayRegistry, CliError> {
    let builder = DayRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
