// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugins backed by the in-process graph kernels.

pub mod bulk;
pub mod reference;

use std::sync::Arc;

use graphbench_core::{BenchmarkKind, GraphbenchError, Outcome, RunParams};
use graphbench_graph::Graph;

use crate::traits::Benchmark;

/// Kernel entry point: run an algorithm on a prepared graph.
type Kernel = fn(&Graph, &RunParams) -> Result<Outcome, GraphbenchError>;

/// Benchmark that holds the graph between runs and invokes a kernel.
struct KernelBenchmark {
    kind: BenchmarkKind,
    kernel: Kernel,
    prepared: Option<(Arc<Graph>, RunParams)>,
}

impl KernelBenchmark {
    fn boxed(kind: BenchmarkKind, kernel: Kernel) -> Box<dyn Benchmark> {
        Box::new(Self {
            kind,
            kernel,
            prepared: None,
        })
    }
}

impl Benchmark for KernelBenchmark {
    fn kind(&self) -> BenchmarkKind {
        self.kind
    }

    fn setup(&mut self, graph: Arc<Graph>, params: &RunParams) -> Result<(), GraphbenchError> {
        if self.kind.needs_source() && params.source_vertex >= graph.vertex_count() {
            return Err(GraphbenchError::InvalidArgument(format!(
                "source vertex {} out of range for a graph with {} vertices",
                params.source_vertex,
                graph.vertex_count()
            )));
        }
        self.prepared = Some((graph, params.clone()));
        Ok(())
    }

    fn run_once(&mut self) -> Result<Outcome, GraphbenchError> {
        let (graph, params) = self
            .prepared
            .as_ref()
            .ok_or_else(|| GraphbenchError::benchmark(self.kind, "run before setup"))?;
        (self.kernel)(graph, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_vertices(graph: &Graph, _params: &RunParams) -> Result<Outcome, GraphbenchError> {
        Ok(Outcome::Components(graph.vertex_count()))
    }

    #[test]
    fn run_before_setup_fails() {
        let mut bench = KernelBenchmark::boxed(BenchmarkKind::Cc, count_vertices);
        let err = bench.run_once().unwrap_err();
        assert!(matches!(err, GraphbenchError::Benchmark { kind: BenchmarkKind::Cc, .. }));
    }

    #[test]
    fn source_outside_graph_is_rejected() {
        let mut bench = KernelBenchmark::boxed(BenchmarkKind::Bfs, count_vertices);
        let graph = Arc::new(Graph::from_edges(2, false, &[(0, 1)]));
        let params = RunParams {
            source_vertex: 2,
            ..RunParams::default()
        };
        assert!(matches!(
            bench.setup(graph, &params),
            Err(GraphbenchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn source_is_ignored_for_sourceless_kinds() {
        let mut bench = KernelBenchmark::boxed(BenchmarkKind::Tc, count_vertices);
        let graph = Arc::new(Graph::from_edges(2, false, &[(0, 1)]));
        let params = RunParams {
            source_vertex: 99,
            ..RunParams::default()
        };
        bench.setup(graph, &params).unwrap();
        assert_eq!(bench.run_once().unwrap(), Outcome::Components(2));
    }
}
