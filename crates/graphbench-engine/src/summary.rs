// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collected results of an execute pass and their on-disk dump.
//!
//! Results are keyed algorithm -> dataset -> plugin. Every dump goes into a
//! fresh timestamped directory under the output directory, and a `recent`
//! symlink is pointed at the newest one.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use graphbench_core::{BenchmarkKind, GraphbenchError, OutputFormat, ResultsPrinter};
use tracing::{debug, info};

use crate::runner::ExecutionResult;

/// Name of the symlink pointing at the latest dump.
pub const RECENT_LINK: &str = "recent";

/// File written by [`OutputFormat::Raw`].
pub const RAW_FILE: &str = "raw.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

type DatasetResults = BTreeMap<String, BTreeMap<String, ExecutionResult>>;

#[derive(Debug, Default, Clone)]
pub struct BenchmarkSummary {
    results: BTreeMap<BenchmarkKind, DatasetResults>,
}

impl BenchmarkSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result. The first result for a given triple is kept;
    /// returns `false` when one was already present.
    pub fn add(
        &mut self,
        kind: BenchmarkKind,
        dataset: &str,
        plugin: &str,
        result: ExecutionResult,
    ) -> bool {
        let plugins = self
            .results
            .entry(kind)
            .or_default()
            .entry(dataset.to_string())
            .or_default();
        if plugins.contains_key(plugin) {
            return false;
        }
        plugins.insert(plugin.to_string(), result);
        true
    }

    pub fn get(&self, kind: BenchmarkKind, dataset: &str, plugin: &str) -> Option<&ExecutionResult> {
        self.results.get(&kind)?.get(dataset)?.get(plugin)
    }

    /// Algorithms with at least one result.
    pub fn algorithms(&self) -> Vec<BenchmarkKind> {
        self.results.keys().copied().collect()
    }

    /// Every `(algorithm, dataset, plugin, result)`, ordered by key.
    pub fn entries(&self) -> impl Iterator<Item = (BenchmarkKind, &str, &str, &ExecutionResult)> + '_ {
        self.results.iter().flat_map(|(kind, datasets)| {
            datasets.iter().flat_map(move |(dataset, plugins)| {
                plugins
                    .iter()
                    .map(move |(plugin, result)| (*kind, dataset.as_str(), plugin.as_str(), result))
            })
        })
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// CSV for one algorithm: header `dataset,<plugins...>`, one row per
    /// dataset, empty cells where a plugin has no result.
    pub fn render_csv(&self, kind: BenchmarkKind, printer: ResultsPrinter) -> Result<String, GraphbenchError> {
        let empty = DatasetResults::new();
        let datasets = self.results.get(&kind).unwrap_or(&empty);
        let plugins: BTreeSet<&str> = datasets
            .values()
            .flat_map(|plugins| plugins.keys().map(String::as_str))
            .collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        let header = std::iter::once("dataset").chain(plugins.iter().copied());
        writer.write_record(header).map_err(csv_error)?;

        for (dataset, results) in datasets {
            let mut record = vec![dataset.clone()];
            record.extend(plugins.iter().map(|plugin| {
                results
                    .get(*plugin)
                    .map(|r| r.render(printer))
                    .unwrap_or_default()
            }));
            writer.write_record(&record).map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| GraphbenchError::Internal(format!("cannot flush CSV: {e}")))?;
        String::from_utf8(bytes).map_err(|e| GraphbenchError::Internal(format!("CSV is not UTF-8: {e}")))
    }

    /// One `algo: .., dataset: .., plugin: .., result: ..` line per result.
    pub fn render_raw(&self, printer: ResultsPrinter) -> String {
        let mut out = String::new();
        for (kind, dataset, plugin, result) in self.entries() {
            let _ = writeln!(
                out,
                "algo: {kind}, dataset: {dataset}, plugin: {plugin}, result: {}",
                result.render(printer)
            );
        }
        out
    }

    /// Write the summary under `output_dir` and return the directory the
    /// files were written to.
    pub fn dump(
        &self,
        format: OutputFormat,
        output_dir: &Path,
        printer: ResultsPrinter,
    ) -> Result<PathBuf, GraphbenchError> {
        std::fs::create_dir_all(output_dir)?;
        let run_dir = create_run_dir(output_dir)?;

        match format {
            OutputFormat::Csv => {
                for kind in self.algorithms() {
                    let path = run_dir.join(format!("{kind}.{}", format.extension()));
                    std::fs::write(&path, self.render_csv(kind, printer)?)?;
                    debug!(path = %path.display(), "wrote CSV summary");
                }
            }
            OutputFormat::Raw => {
                std::fs::write(run_dir.join(RAW_FILE), self.render_raw(printer))?;
            }
        }

        update_recent_link(output_dir, &run_dir)?;
        info!(
            dir = %run_dir.display(),
            %format,
            results = self.len(),
            "benchmark summary written"
        );
        Ok(run_dir)
    }
}

fn csv_error(err: csv::Error) -> GraphbenchError {
    GraphbenchError::Internal(format!("cannot write CSV: {err}"))
}

/// Create a new directory named by the local time, adding a numeric suffix
/// when a dump from the same second already exists.
fn create_run_dir(output_dir: &Path) -> Result<PathBuf, GraphbenchError> {
    let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    let mut candidate = output_dir.join(&stamp);
    let mut suffix = 1;
    loop {
        match std::fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                candidate = output_dir.join(format!("{stamp}_{suffix}"));
                suffix += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn update_recent_link(output_dir: &Path, run_dir: &Path) -> Result<(), GraphbenchError> {
    let link = output_dir.join(RECENT_LINK);
    if link.symlink_metadata().is_ok() {
        std::fs::remove_file(&link)?;
    }
    // Relative target, resolved against `output_dir`.
    let target = run_dir.file_name().map(PathBuf::from).unwrap_or_else(|| run_dir.to_path_buf());
    std::os::unix::fs::symlink(target, &link)?;
    Ok(())
}

#[cfg(not(unix))]
fn update_recent_link(_output_dir: &Path, run_dir: &Path) -> Result<(), GraphbenchError> {
    debug!(dir = %run_dir.display(), "symlinks unsupported, `recent` not updated");
    Ok(())
}
