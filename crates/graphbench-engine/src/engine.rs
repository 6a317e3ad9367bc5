// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The benchmark engine: plugin registration, argument capture and
//! dispatch of a run plan.

use std::sync::{Arc, Mutex, OnceLock};

use graphbench_core::{BenchmarkKind, ExitStatus, GraphbenchError};
use graphbench_graph::{Dataset, LoadedDataset, PropertiesCache};
use graphbench_plugin::{Benchmark, PluginDescriptor, PluginRegistry, PluginStatus};
use tracing::{debug, error, info, warn};

use crate::plan::RunPlan;
use crate::runner::run_benchmark;
use crate::summary::BenchmarkSummary;

/// Registry of plugins plus the captured command-line tokens.
///
/// Without a [`RunPlan`] attached, [`execute`](Self::execute) is a no-op that
/// reports success.
#[derive(Debug, Default)]
pub struct BenchmarkEngine {
    registry: PluginRegistry,
    options: Vec<String>,
    plan: Option<RunPlan>,
}

impl BenchmarkEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide engine, created on first access.
    pub fn instance() -> &'static Mutex<BenchmarkEngine> {
        static INSTANCE: OnceLock<Mutex<BenchmarkEngine>> = OnceLock::new();
        INSTANCE.get_or_init(|| Mutex::new(BenchmarkEngine::new()))
    }

    /// Register a plugin under its name, replacing any previous plugin of
    /// the same name.
    pub fn register(&mut self, plugin: impl Into<Arc<PluginDescriptor>>) -> Result<(), GraphbenchError> {
        self.registry.register(plugin)
    }

    /// Register a plugin with an explicit enabled/disabled status.
    pub fn register_with_status(
        &mut self,
        plugin: impl Into<Arc<PluginDescriptor>>,
        status: PluginStatus,
    ) -> Result<(), GraphbenchError> {
        self.registry.register_with_status(plugin, status)
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PluginRegistry {
        &mut self.registry
    }

    pub fn plugin(&self, name: &str) -> Option<Arc<PluginDescriptor>> {
        self.registry.plugin(name)
    }

    /// Append command-line tokens verbatim.
    pub fn parse<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extend(args.into_iter().map(Into::into));
    }

    /// Every token captured so far, in order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_plan(&mut self, plan: RunPlan) {
        self.plan = Some(plan);
    }

    pub fn with_plan(mut self, plan: RunPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn plan(&self) -> Option<&RunPlan> {
        self.plan.as_ref()
    }

    /// Parse `args`, then execute.
    pub fn run<I, S>(&mut self, args: I) -> ExitStatus
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse(args);
        self.execute()
    }

    /// Execute the attached plan, if any.
    pub fn execute(&self) -> ExitStatus {
        let Some(plan) = &self.plan else {
            debug!(options = self.options.len(), "no run plan attached, nothing to execute");
            return ExitStatus::SUCCESS;
        };

        match self.dispatch(plan) {
            Ok(()) => ExitStatus::SUCCESS,
            Err(e) => {
                error!(error = %e, "benchmark run failed");
                e.exit_status()
            }
        }
    }

    /// Plugins selected by the plan, sorted by name when none are named.
    fn selected_plugins(&self, plan: &RunPlan) -> Result<Vec<Arc<PluginDescriptor>>, GraphbenchError> {
        if plan.plugins.is_empty() {
            return Ok(self
                .registry
                .get_enabled()
                .into_iter()
                .map(|entry| Arc::clone(&entry.descriptor))
                .collect());
        }

        plan.plugins
            .iter()
            .map(|name| {
                self.registry
                    .plugin(name)
                    .ok_or_else(|| GraphbenchError::PluginNotFound { name: name.clone() })
            })
            .collect()
    }

    fn dispatch(&self, plan: &RunPlan) -> Result<(), GraphbenchError> {
        let plugins = self.selected_plugins(plan)?;
        if plugins.is_empty() {
            return Err(GraphbenchError::InvalidArgument(
                "no enabled plugins to benchmark".to_string(),
            ));
        }

        let algorithms = plan.selected_algorithms();
        if !plan.plugins.is_empty() && !plan.algorithms.is_empty() {
            for plugin in &plugins {
                if let Some(kind) = algorithms.iter().find(|kind| !plugin.supports(**kind)) {
                    return Err(GraphbenchError::UnsupportedBenchmark {
                        plugin: plugin.name().to_string(),
                        kind: *kind,
                    });
                }
            }
        }

        info!(
            plugins = ?plugins.iter().map(|p| p.name()).collect::<Vec<_>>(),
            algorithms = ?algorithms,
            datasets = plan.datasets.len(),
            "starting benchmark run"
        );

        let mut summary = BenchmarkSummary::new();
        let outcome = self.run_datasets(plan, &plugins, &algorithms, &mut summary);
        let dumped = summary.dump(plan.format, &plan.output_dir, plan.printer);

        match (outcome, dumped) {
            (Ok(()), Ok(_)) => Ok(()),
            (Ok(()), Err(e)) => Err(e),
            (Err(e), Ok(_)) => Err(e),
            (Err(e), Err(dump_err)) => {
                warn!(error = %dump_err, "summary could not be written");
                Err(e)
            }
        }
    }

    fn run_datasets(
        &self,
        plan: &RunPlan,
        plugins: &[Arc<PluginDescriptor>],
        algorithms: &[BenchmarkKind],
        summary: &mut BenchmarkSummary,
    ) -> Result<(), GraphbenchError> {
        let mut cache = match &plan.properties_cache {
            Some(path) => PropertiesCache::open(path)?,
            None => PropertiesCache::in_memory(),
        };

        let outcome = plan.datasets.iter().try_for_each(|entry| {
            let dataset = Dataset::open(&entry.name, &entry.path)?.load()?;
            cache.insert(&dataset.name, dataset.properties);
            self.run_dataset(plan, plugins, algorithms, &dataset, &mut *summary)
        });

        // Properties of the datasets loaded so far are kept even after a failure.
        if let Err(e) = cache.save() {
            warn!(error = %e, "properties cache could not be saved");
        }
        outcome
    }

    fn run_dataset(
        &self,
        plan: &RunPlan,
        plugins: &[Arc<PluginDescriptor>],
        algorithms: &[BenchmarkKind],
        dataset: &LoadedDataset,
        summary: &mut BenchmarkSummary,
    ) -> Result<(), GraphbenchError> {
        let iterations = plan.iterations_for(dataset.size());
        info!(
            dataset = %dataset.name,
            size = %dataset.size(),
            iterations,
            "benchmarking dataset"
        );

        for &kind in algorithms {
            let benchmarks = match runnable_benchmarks(plugins, kind, dataset) {
                Ok(benchmarks) => benchmarks,
                Err(reason) => {
                    info!(%kind, dataset = %dataset.name, %reason, "skipping benchmark");
                    continue;
                }
            };
            for (plugin, mut benchmark) in benchmarks {
                let measurement =
                    run_benchmark(benchmark.as_mut(), dataset, &plan.params, iterations)?;
                info!(
                    plugin,
                    %kind,
                    dataset = %dataset.name,
                    median_ms = measurement.result.median(),
                    outcome = %measurement.outcome,
                    "benchmark finished"
                );
                summary.add(kind, &dataset.name, plugin, measurement.result);
            }
        }
        Ok(())
    }
}

/// One benchmark per plugin for `kind`. Fails with the reason to skip the
/// kind when any plugin lacks it or cannot run it on `dataset`.
fn runnable_benchmarks<'a>(
    plugins: &'a [Arc<PluginDescriptor>],
    kind: BenchmarkKind,
    dataset: &LoadedDataset,
) -> Result<Vec<(&'a str, Box<dyn Benchmark>)>, GraphbenchError> {
    let mut benchmarks = Vec::with_capacity(plugins.len());
    for plugin in plugins {
        let benchmark = plugin
            .benchmark(kind)
            .ok_or_else(|| GraphbenchError::UnsupportedBenchmark {
                plugin: plugin.name().to_string(),
                kind,
            })?;
        if !benchmark.can_run(&dataset.properties) {
            return Err(GraphbenchError::IncompatibleDataset {
                plugin: plugin.name().to_string(),
                kind,
                dataset: dataset.name.clone(),
            });
        }
        benchmarks.push((plugin.name(), benchmark));
    }
    Ok(benchmarks)
}
