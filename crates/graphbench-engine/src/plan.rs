// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run plans: which algorithms, plugins and datasets an execute pass covers
//! and where its results go.

use std::path::{Path, PathBuf};

use graphbench_config::GraphbenchConfig;
use graphbench_config::model::DatasetsConfig;
use graphbench_core::{BenchmarkKind, OutputFormat, ResultsPrinter, RunParams};
use graphbench_graph::cache::PROPERTIES_FILE;
use graphbench_graph::{DatasetSize, IterationTable};

/// A dataset to benchmark: display name and `.mtx` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSpec {
    pub name: String,
    pub path: PathBuf,
}

impl DatasetSpec {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Resolve a name or a path against the dataset configuration.
    ///
    /// Configured names win. Anything else that looks like a file
    /// (`.mtx` suffix or a path separator) is used as a path named by its
    /// file stem; a bare name maps to `<dir>/<name>.mtx`.
    pub fn resolve(datasets: &DatasetsConfig, name_or_path: &str) -> Self {
        if datasets.entry(name_or_path).is_some() {
            return Self::new(name_or_path, datasets.resolve_path(name_or_path));
        }

        let path = Path::new(name_or_path);
        let looks_like_file =
            name_or_path.ends_with(".mtx") || name_or_path.contains(std::path::MAIN_SEPARATOR);
        if looks_like_file {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| name_or_path.to_string());
            return Self::new(name, path);
        }

        Self::new(name_or_path, datasets.resolve_path(name_or_path))
    }
}

/// Everything an execute pass needs besides the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    /// Kinds to run; empty means all five.
    pub algorithms: Vec<BenchmarkKind>,
    /// Plugin names to run; empty means every enabled plugin.
    pub plugins: Vec<String>,
    pub datasets: Vec<DatasetSpec>,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub printer: ResultsPrinter,
    pub params: RunParams,
    pub iterations: IterationTable,
    /// Fixed iteration count, ignoring the size category.
    pub iterations_override: Option<usize>,
    /// `properties.json` updated with every loaded dataset.
    pub properties_cache: Option<PathBuf>,
}

impl RunPlan {
    /// A plan with default settings and no datasets.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            algorithms: Vec::new(),
            plugins: Vec::new(),
            datasets: Vec::new(),
            output_dir: output_dir.into(),
            format: OutputFormat::default(),
            printer: ResultsPrinter::default(),
            params: RunParams::default(),
            iterations: IterationTable::default(),
            iterations_override: None,
            properties_cache: None,
        }
    }

    /// Plan covering the configured dataset selection with configured
    /// output, iteration and PageRank settings.
    pub fn from_config(config: &GraphbenchConfig) -> Self {
        let iterations = &config.iterations;
        let pagerank = &config.pagerank;

        Self {
            algorithms: Vec::new(),
            plugins: Vec::new(),
            datasets: config
                .datasets
                .selected
                .iter()
                .map(|name| DatasetSpec::resolve(&config.datasets, name))
                .collect(),
            output_dir: config.bench.output_dir.clone(),
            format: config.bench.format,
            printer: config.bench.printer,
            params: RunParams {
                source_vertex: config.bench.source_vertex,
                damping: pagerank.damping,
                max_iterations: pagerank.max_iterations,
                tolerance: pagerank.tolerance,
            },
            iterations: IterationTable {
                tiny: iterations.tiny,
                small: iterations.small,
                medium: iterations.medium,
                large: iterations.large,
                extra_large: iterations.extra_large,
            },
            iterations_override: None,
            properties_cache: Some(config.datasets.dir.join(PROPERTIES_FILE)),
        }
    }

    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = BenchmarkKind>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    pub fn with_plugins<S: Into<String>>(mut self, plugins: impl IntoIterator<Item = S>) -> Self {
        self.plugins = plugins.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_datasets(mut self, datasets: impl IntoIterator<Item = DatasetSpec>) -> Self {
        self.datasets = datasets.into_iter().collect();
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations_override = Some(iterations);
        self
    }

    /// Requested kinds, all five when none were named.
    pub fn selected_algorithms(&self) -> Vec<BenchmarkKind> {
        if self.algorithms.is_empty() {
            BenchmarkKind::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    /// Number of timed iterations for a dataset of `size`.
    pub fn iterations_for(&self, size: DatasetSize) -> usize {
        self.iterations_override
            .unwrap_or_else(|| self.iterations.iterations(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_uses_selection_and_settings() {
        let mut config = GraphbenchConfig::default();
        config.bench.source_vertex = 4;
        config.pagerank.damping = 0.5;
        config.iterations.tiny = 3;
        config.datasets.selected = vec!["Journals".into(), "extra/file.mtx".into()];

        let plan = RunPlan::from_config(&config);
        assert_eq!(
            plan.datasets,
            vec![
                DatasetSpec::new("Journals", "dataset/Journals.mtx"),
                DatasetSpec::new("file", "extra/file.mtx"),
            ]
        );
        assert_eq!(plan.params.source_vertex, 4);
        assert_eq!(plan.params.damping, 0.5);
        assert_eq!(plan.iterations_for(DatasetSize::Tiny), 3);
        assert_eq!(
            plan.properties_cache,
            Some(PathBuf::from("dataset/properties.json"))
        );
    }

    #[test]
    fn empty_algorithm_list_means_all() {
        let plan = RunPlan::new("out");
        assert_eq!(plan.selected_algorithms(), BenchmarkKind::ALL.to_vec());
        let plan = plan.with_algorithms([BenchmarkKind::Tc]);
        assert_eq!(plan.selected_algorithms(), vec![BenchmarkKind::Tc]);
    }

    #[test]
    fn override_beats_size_category() {
        let plan = RunPlan::new("out").with_iterations(1);
        assert_eq!(plan.iterations_for(DatasetSize::Tiny), 1);
        assert_eq!(plan.iterations_for(DatasetSize::ExtraLarge), 1);
    }

    #[test]
    fn bare_unknown_name_maps_into_dataset_dir() {
        let datasets = DatasetsConfig::default();
        assert_eq!(
            DatasetSpec::resolve(&datasets, "mine"),
            DatasetSpec::new("mine", "dataset/mine.mtx")
        );
        assert_eq!(
            DatasetSpec::resolve(&datasets, "g.mtx"),
            DatasetSpec::new("g", "g.mtx")
        );
    }
}
