// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The contract every benchmark implementation fulfils.

use std::sync::Arc;

use graphbench_core::{BenchmarkKind, GraphbenchError, Outcome, RunParams};
use graphbench_graph::{DatasetProperties, ElementType, Graph};

/// A single algorithm implementation supplied by a plugin.
///
/// The runner calls [`setup`](Benchmark::setup) once per dataset, then
/// [`run_once`](Benchmark::run_once) for the warm-up and every timed
/// iteration. Only `run_once` is timed.
pub trait Benchmark: Send {
    /// The algorithm this benchmark implements.
    fn kind(&self) -> BenchmarkKind;

    /// Whether this benchmark can run on a dataset with these properties.
    ///
    /// The default rejects pattern datasets for kinds that need edge values.
    fn can_run(&self, properties: &DatasetProperties) -> bool {
        !self.kind().needs_values() || properties.element_type != ElementType::Void
    }

    /// Prepare for timed runs on `graph`.
    fn setup(&mut self, graph: Arc<Graph>, params: &RunParams) -> Result<(), GraphbenchError>;

    /// Run the algorithm once and summarize its output.
    fn run_once(&mut self) -> Result<Outcome, GraphbenchError>;
}
