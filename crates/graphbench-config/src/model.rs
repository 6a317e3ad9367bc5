// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for graphbench.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::BTreeMap;
use std::path::PathBuf;

use graphbench_core::{OutputFormat, ResultsPrinter};
use serde::{Deserialize, Serialize};

/// Top-level graphbench configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GraphbenchConfig {
    /// Run-wide benchmark settings.
    #[serde(default)]
    pub bench: BenchConfig,

    /// Dataset directory, selection and download sources.
    #[serde(default)]
    pub datasets: DatasetsConfig,

    /// Timed iterations per dataset size category.
    #[serde(default)]
    pub iterations: IterationsConfig,

    /// PageRank parameters.
    #[serde(default)]
    pub pagerank: PageRankConfig,

    /// Per-plugin enable switches.
    #[serde(default)]
    pub plugin: PluginConfig,
}

/// Run-wide benchmark settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Source vertex for BFS and SSSP (0-based).
    #[serde(default)]
    pub source_vertex: usize,

    /// Directory that receives the timestamped result directories.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Summary output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// How each result is rendered.
    #[serde(default)]
    pub printer: ResultsPrinter,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            source_vertex: 0,
            output_dir: default_output_dir(),
            format: OutputFormat::default(),
            printer: ResultsPrinter::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("benchmarks")
}

/// Dataset configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetsConfig {
    /// Directory holding `<name>.mtx` files and `properties.json`.
    #[serde(default = "default_dataset_dir")]
    pub dir: PathBuf,

    /// Names of the datasets to benchmark, in order.
    #[serde(rename = "use", default = "default_selected")]
    pub selected: Vec<String>,

    /// Known datasets.
    #[serde(default = "default_entries")]
    pub entries: Vec<DatasetEntry>,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            dir: default_dataset_dir(),
            selected: default_selected(),
            entries: default_entries(),
        }
    }
}

impl DatasetsConfig {
    /// Entry with the given name.
    pub fn entry(&self, name: &str) -> Option<&DatasetEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Path of the dataset file: the entry's explicit path, otherwise
    /// `<dir>/<name>.mtx`.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.entry(name)
            .and_then(|e| e.path.clone())
            .unwrap_or_else(|| self.dir.join(format!("{name}.mtx")))
    }
}

/// A named dataset with an optional explicit path and download URL.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// `.tar.gz` archive containing the `.mtx` file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn default_dataset_dir() -> PathBuf {
    PathBuf::from("dataset")
}

const SUITESPARSE: &str = "https://suitesparse-collection-website.herokuapp.com/MM";

const DEFAULT_DATASETS: [(&str, &str); 5] = [
    ("1128_bus", "HB/1138_bus"),
    ("bcspwr03", "HB/bcspwr03"),
    ("soc-LiveJournal", "SNAP/soc-LiveJournal1"),
    ("hollywood-09", "LAW/hollywood-2009"),
    ("Journals", "Pajek/Journals"),
];

fn default_selected() -> Vec<String> {
    DEFAULT_DATASETS.iter().map(|(name, _)| name.to_string()).collect()
}

fn default_entries() -> Vec<DatasetEntry> {
    DEFAULT_DATASETS
        .iter()
        .map(|(name, archive)| DatasetEntry {
            name: name.to_string(),
            path: None,
            url: Some(format!("{SUITESPARSE}/{archive}.tar.gz")),
        })
        .collect()
}

/// Timed iterations per dataset size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IterationsConfig {
    #[serde(default = "default_tiny")]
    pub tiny: usize,
    #[serde(default = "default_small")]
    pub small: usize,
    #[serde(default = "default_medium")]
    pub medium: usize,
    #[serde(default = "default_large")]
    pub large: usize,
    #[serde(default = "default_extra_large")]
    pub extra_large: usize,
}

impl Default for IterationsConfig {
    fn default() -> Self {
        Self {
            tiny: default_tiny(),
            small: default_small(),
            medium: default_medium(),
            large: default_large(),
            extra_large: default_extra_large(),
        }
    }
}

fn default_tiny() -> usize {
    50
}

fn default_small() -> usize {
    20
}

fn default_medium() -> usize {
    10
}

fn default_large() -> usize {
    5
}

fn default_extra_large() -> usize {
    2
}

/// PageRank parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PageRankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Stop once no score changes by more than this.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_damping() -> f64 {
    0.85
}

fn default_max_iterations() -> usize {
    100
}

fn default_tolerance() -> f64 {
    1e-6
}

/// Plugin enable switches. Plugins not listed are enabled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    #[serde(default)]
    pub plugins: BTreeMap<String, bool>,
}

impl PluginConfig {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.plugins.get(name).copied().unwrap_or(true)
    }
}
