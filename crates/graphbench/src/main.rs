// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! graphbench - compare graph analytics implementations on real datasets.
//!
//! This is the binary entry point: it loads configuration, registers the
//! built-in plugins and hands the request to the benchmark engine.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod datasets;
mod fetch;
mod plugins;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use graphbench_config::GraphbenchConfig;
use graphbench_core::{ExitStatus, GraphbenchError};

/// graphbench - compare graph analytics implementations on real datasets.
#[derive(Parser, Debug)]
#[command(name = "graphbench", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run benchmarks and write a summary.
    Run(run::RunArgs),
    /// List registered plugins and the algorithms they provide.
    Plugins {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// List configured datasets and their properties.
    Datasets {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Download datasets into the dataset directory.
    Fetch(fetch::FetchArgs),
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match graphbench_config::load_and_validate(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            graphbench_config::render_errors(&errors);
            return exit_code(ExitStatus::CONFIG);
        }
    };

    init_tracing(&config.bench.log_level.to_lowercase());

    let status = match cli.command {
        Some(Commands::Run(args)) => run::run_command(&config, &args),
        Some(Commands::Plugins { json, plain }) => {
            report(run::build_engine(&config).and_then(|engine| {
                plugins::run_plugins(engine.registry(), json, plain)
            }))
        }
        Some(Commands::Datasets { json }) => report(datasets::run_datasets(&config, json)),
        Some(Commands::Fetch(args)) => report(fetch::run_fetch(&config, &args).await),
        Some(Commands::Config) => report(print_config(&config)),
        None => {
            println!("graphbench: use --help for available commands");
            ExitStatus::SUCCESS
        }
    };

    exit_code(status)
}

/// Print a command error and map it to an exit status.
fn report(result: Result<(), GraphbenchError>) -> ExitStatus {
    match result {
        Ok(()) => ExitStatus::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_status()
        }
    }
}

fn exit_code(status: ExitStatus) -> ExitCode {
    ExitCode::from(u8::try_from(status.code()).unwrap_or(1))
}

fn print_config(config: &GraphbenchConfig) -> Result<(), GraphbenchError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| GraphbenchError::Internal(format!("cannot render configuration: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "graphbench={log_level},graphbench_engine={log_level},graphbench_plugin={log_level},graphbench_graph={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
