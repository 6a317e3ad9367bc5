// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `graphbench run` command implementation.

use std::path::PathBuf;

use clap::Args;
use graphbench_config::GraphbenchConfig;
use graphbench_core::{BenchmarkKind, ExitStatus, GraphbenchError, OutputFormat, ResultsPrinter};
use graphbench_engine::{BenchmarkEngine, DatasetSpec, RunPlan};
use graphbench_plugin::{PluginStatus, builtin_plugins};
use tracing::debug;

/// Selection and output flags for a benchmark run. Anything left unset
/// comes from the configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Algorithm to run (bfs, sssp, tc, cc, pagerank); repeatable, default all.
    #[arg(long = "algo", value_name = "KIND")]
    pub algorithms: Vec<BenchmarkKind>,

    /// Plugin to run; repeatable, default every enabled plugin.
    #[arg(long = "plugin", value_name = "NAME")]
    pub plugins: Vec<String>,

    /// Dataset name or `.mtx` path; repeatable, default `datasets.use`.
    #[arg(long = "dataset", value_name = "NAME|PATH")]
    pub datasets: Vec<String>,

    /// Directory receiving the timestamped summary.
    #[arg(long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Summary format.
    #[arg(long, value_name = "csv|raw")]
    pub format: Option<OutputFormat>,

    /// How each result is printed.
    #[arg(long, value_name = "all|median")]
    pub printer: Option<ResultsPrinter>,

    /// Timed iterations per benchmark, overriding the size-based count.
    #[arg(long, value_name = "N")]
    pub iterations: Option<usize>,

    /// Source vertex for BFS and SSSP.
    #[arg(long = "source", value_name = "V")]
    pub source: Option<usize>,
}

/// Register every built-in plugin, disabling those turned off in
/// `[plugin.plugins]`. Naming a plugin that does not exist there is a
/// configuration error.
pub fn build_engine(config: &GraphbenchConfig) -> Result<BenchmarkEngine, GraphbenchError> {
    let mut engine = BenchmarkEngine::new();
    for factory in builtin_plugins() {
        let descriptor = factory();
        let status = if config.plugin.is_enabled(descriptor.name()) {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        engine.register_with_status(descriptor, status)?;
    }

    if let Some(name) = config
        .plugin
        .plugins
        .keys()
        .find(|name| !engine.registry().contains(name))
    {
        return Err(GraphbenchError::Config(format!(
            "[plugin.plugins] names unknown plugin `{name}`"
        )));
    }
    Ok(engine)
}

/// Merge the command-line flags over the configured plan.
pub fn build_plan(config: &GraphbenchConfig, args: &RunArgs) -> Result<RunPlan, GraphbenchError> {
    let mut plan = RunPlan::from_config(config);

    if !args.datasets.is_empty() {
        plan.datasets = args
            .datasets
            .iter()
            .map(|d| DatasetSpec::resolve(&config.datasets, d))
            .collect();
    }
    plan.algorithms = args.algorithms.clone();
    plan.plugins = args.plugins.clone();

    if let Some(output) = &args.output {
        plan.output_dir = output.clone();
    }
    if let Some(format) = args.format {
        plan.format = format;
    }
    if let Some(printer) = args.printer {
        plan.printer = printer;
    }
    if args.iterations == Some(0) {
        return Err(GraphbenchError::InvalidArgument(
            "--iterations must be at least 1".to_string(),
        ));
    }
    plan.iterations_override = args.iterations;
    if let Some(source) = args.source {
        plan.params.source_vertex = source;
    }

    debug!(?plan, "run plan resolved");
    Ok(plan)
}

pub fn run_command(config: &GraphbenchConfig, args: &RunArgs) -> ExitStatus {
    let plan = build_engine(config).and_then(|engine| Ok((engine, build_plan(config, args)?)));
    match plan {
        Ok((mut engine, plan)) => {
            engine.set_plan(plan);
            engine.run(std::env::args())
        }
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_status()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_configuration() {
        let config = GraphbenchConfig::default();
        let args = RunArgs {
            algorithms: vec![BenchmarkKind::Tc],
            plugins: vec!["bulk".into()],
            datasets: vec!["local/g.mtx".into()],
            output: Some("elsewhere".into()),
            format: Some(OutputFormat::Raw),
            printer: Some(ResultsPrinter::Median),
            iterations: Some(4),
            source: Some(2),
        };

        let plan = build_plan(&config, &args).unwrap();
        assert_eq!(plan.algorithms, [BenchmarkKind::Tc]);
        assert_eq!(plan.plugins, ["bulk"]);
        assert_eq!(plan.datasets, [DatasetSpec::new("g", "local/g.mtx")]);
        assert_eq!(plan.output_dir, PathBuf::from("elsewhere"));
        assert_eq!(plan.format, OutputFormat::Raw);
        assert_eq!(plan.printer, ResultsPrinter::Median);
        assert_eq!(plan.iterations_override, Some(4));
        assert_eq!(plan.params.source_vertex, 2);
    }

    #[test]
    fn no_flags_keeps_configured_datasets() {
        let config = GraphbenchConfig::default();
        let plan = build_plan(&config, &RunArgs::default()).unwrap();
        assert_eq!(plan.datasets.len(), config.datasets.selected.len());
        assert!(plan.algorithms.is_empty());
        assert_eq!(plan.iterations_override, None);
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let args = RunArgs {
            iterations: Some(0),
            ..RunArgs::default()
        };
        let err = build_plan(&GraphbenchConfig::default(), &args).unwrap_err();
        assert_eq!(err.exit_status(), ExitStatus::USAGE);
    }

    #[test]
    fn disabled_plugins_are_registered_but_not_enabled() {
        let mut config = GraphbenchConfig::default();
        config.plugin.plugins.insert("bulk".into(), false);

        let engine = build_engine(&config).unwrap();
        assert!(engine.registry().contains("bulk"));
        let enabled: Vec<&str> = engine
            .registry()
            .get_enabled()
            .into_iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(enabled, ["reference"]);
    }

    #[test]
    fn unknown_plugin_in_config_is_a_config_error() {
        let mut config = GraphbenchConfig::default();
        config.plugin.plugins.insert("missing".into(), true);

        let err = build_engine(&config).unwrap_err();
        assert!(matches!(err, GraphbenchError::Config(ref message) if message.contains("missing")));
        assert_eq!(err.exit_status(), ExitStatus::CONFIG);
    }
}
