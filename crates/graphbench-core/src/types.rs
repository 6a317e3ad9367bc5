// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the registry, the plugins and the engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The closed set of graph algorithms a plugin can benchmark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkKind {
    /// Breadth-first search from a source vertex.
    Bfs,
    /// Single-source shortest path.
    Sssp,
    /// Triangle counting.
    Tc,
    /// Connected components.
    Cc,
    /// PageRank.
    PageRank,
}

impl BenchmarkKind {
    /// Every kind, in canonical order.
    pub const ALL: [BenchmarkKind; 5] = [
        BenchmarkKind::Bfs,
        BenchmarkKind::Sssp,
        BenchmarkKind::Tc,
        BenchmarkKind::Cc,
        BenchmarkKind::PageRank,
    ];

    /// Human-readable algorithm name.
    pub fn label(self) -> &'static str {
        match self {
            BenchmarkKind::Bfs => "breadth-first search",
            BenchmarkKind::Sssp => "single-source shortest path",
            BenchmarkKind::Tc => "triangle counting",
            BenchmarkKind::Cc => "connected components",
            BenchmarkKind::PageRank => "PageRank",
        }
    }

    /// Whether the algorithm starts from a source vertex.
    pub fn needs_source(self) -> bool {
        matches!(self, BenchmarkKind::Bfs | BenchmarkKind::Sssp)
    }

    /// Whether the algorithm needs edge values (weights) in the dataset.
    pub fn needs_values(self) -> bool {
        matches!(self, BenchmarkKind::Sssp)
    }
}

/// Process exit status returned by the engine's run sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus(0);
    /// A benchmark or dataset failed during execution.
    pub const FAILURE: ExitStatus = ExitStatus(1);
    /// The request named an unknown plugin or an unsupported benchmark.
    pub const USAGE: ExitStatus = ExitStatus(2);
    /// Configuration could not be loaded or validated.
    pub const CONFIG: ExitStatus = ExitStatus(3);

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format used when dumping a benchmark summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One CSV file per algorithm, one row per dataset, one column per plugin.
    #[default]
    Csv,
    /// A single text file with one line per measurement.
    Raw,
}

impl OutputFormat {
    /// File extension (without the dot) of the dumped files.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Raw => "txt",
        }
    }
}

/// How a single execution result is rendered into the summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResultsPrinter {
    /// Warm-up, mean, median and standard deviation.
    #[default]
    All,
    /// Median only.
    Median,
}

/// Parameters handed to every benchmark at setup time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    /// Source vertex (0-based) for BFS and SSSP.
    pub source_vertex: usize,
    /// PageRank damping factor.
    pub damping: f64,
    /// PageRank iteration cap.
    pub max_iterations: usize,
    /// PageRank convergence tolerance (max absolute change per vertex).
    pub tolerance: f64,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            source_vertex: 0,
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Checksum-style summary of a single benchmark run.
///
/// Used to compare plugins against each other and for debug logging; the
/// full algorithm output never leaves the benchmark.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// BFS: number of reached vertices and the deepest level.
    Reached { vertices: usize, depth: usize },
    /// SSSP: number of reached vertices and the largest finite distance.
    Distances { reached: usize, max_distance: f64 },
    /// Triangle count.
    Triangles(u64),
    /// Number of (weakly) connected components.
    Components(usize),
    /// PageRank: iterations performed and the sum of all scores.
    Ranks { iterations: usize, sum: f64 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Reached { vertices, depth } => {
                write!(f, "reached={vertices} depth={depth}")
            }
            Outcome::Distances {
                reached,
                max_distance,
            } => write!(f, "reached={reached} max_distance={max_distance}"),
            Outcome::Triangles(count) => write!(f, "triangles={count}"),
            Outcome::Components(count) => write!(f, "components={count}"),
            Outcome::Ranks { iterations, sum } => {
                write!(f, "iterations={iterations} rank_sum={sum:.6}")
            }
        }
    }
}
