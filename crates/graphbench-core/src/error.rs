// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the graphbench harness.

use thiserror::Error;

use crate::types::{BenchmarkKind, ExitStatus};

/// The primary error type used across plugin registration, dataset loading
/// and benchmark execution.
#[derive(Debug, Error)]
pub enum GraphbenchError {
    /// A plugin was registered with an empty or whitespace-only name.
    #[error("plugin name must not be empty")]
    EmptyPluginName,

    /// A requested plugin is not present in the registry.
    #[error("plugin not found: {name}")]
    PluginNotFound { name: String },

    /// A plugin was asked for a benchmark kind it does not provide.
    #[error("plugin `{plugin}` does not support {kind}")]
    UnsupportedBenchmark { plugin: String, kind: BenchmarkKind },

    /// A benchmark cannot run on the given dataset (e.g. SSSP on a pattern matrix).
    #[error("plugin `{plugin}` cannot run {kind} on dataset `{dataset}`")]
    IncompatibleDataset {
        plugin: String,
        kind: BenchmarkKind,
        dataset: String,
    },

    /// Malformed or out-of-range argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Dataset resolution or property errors.
    #[error("dataset `{name}`: {message}")]
    Dataset { name: String, message: String },

    /// Matrix Market parse errors. `line` is 1-based.
    #[error("matrix market error at line {line}: {message}")]
    MatrixMarket { line: usize, message: String },

    /// Filesystem errors.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Configuration errors detected outside the config loader.
    #[error("configuration error: {0}")]
    Config(String),

    /// Dataset download or unpack failures.
    #[error("fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    /// A benchmark failed during setup or a timed run.
    #[error("{kind} benchmark failed: {message}")]
    Benchmark { kind: BenchmarkKind, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GraphbenchError {
    /// Map the error to the process exit status reported by the engine.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            GraphbenchError::EmptyPluginName
            | GraphbenchError::PluginNotFound { .. }
            | GraphbenchError::UnsupportedBenchmark { .. }
            | GraphbenchError::InvalidArgument(_) => ExitStatus::USAGE,
            GraphbenchError::Config(_) => ExitStatus::CONFIG,
            _ => ExitStatus::FAILURE,
        }
    }

    /// Shorthand for a [`GraphbenchError::Benchmark`] error.
    pub fn benchmark(kind: BenchmarkKind, message: impl Into<String>) -> Self {
        GraphbenchError::Benchmark {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a [`GraphbenchError::Dataset`] error.
    pub fn dataset(name: impl Into<String>, message: impl Into<String>) -> Self {
        GraphbenchError::Dataset {
            name: name.into(),
            message: message.into(),
        }
    }
}
