// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock plugins for deterministic engine tests.
//!
//! Mock benchmarks do no real work: each run reports a fixed outcome
//! derived from the graph's size, so timings stay near zero.

use std::sync::Arc;

use graphbench_core::{BenchmarkKind, GraphbenchError, Outcome, RunParams};
use graphbench_graph::{DatasetProperties, ElementType, Graph};
use graphbench_plugin::{Benchmark, BenchmarkFactory, PluginDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Succeed,
    FailOnRun,
    RefuseDataset,
}

/// A benchmark that reports graph-size based outcomes.
#[derive(Debug)]
pub struct MockBenchmark {
    kind: BenchmarkKind,
    behavior: Behavior,
    graph: Option<Arc<Graph>>,
}

impl MockBenchmark {
    pub fn new(kind: BenchmarkKind) -> Self {
        Self {
            kind,
            behavior: Behavior::Succeed,
            graph: None,
        }
    }

    fn with_behavior(kind: BenchmarkKind, behavior: Behavior) -> Self {
        Self {
            kind,
            behavior,
            graph: None,
        }
    }
}

impl Benchmark for MockBenchmark {
    fn kind(&self) -> BenchmarkKind {
        self.kind
    }

    fn can_run(&self, properties: &DatasetProperties) -> bool {
        if self.behavior == Behavior::RefuseDataset {
            return false;
        }
        !self.kind.needs_values() || properties.element_type != ElementType::Void
    }

    fn setup(&mut self, graph: Arc<Graph>, _params: &RunParams) -> Result<(), GraphbenchError> {
        self.graph = Some(graph);
        Ok(())
    }

    fn run_once(&mut self) -> Result<Outcome, GraphbenchError> {
        if self.behavior == Behavior::FailOnRun {
            return Err(GraphbenchError::benchmark(self.kind, "mock failure"));
        }
        let graph = self
            .graph
            .as_ref()
            .ok_or_else(|| GraphbenchError::benchmark(self.kind, "run before setup"))?;

        let n = graph.vertex_count();
        Ok(match self.kind {
            BenchmarkKind::Bfs => Outcome::Reached {
                vertices: n,
                depth: 0,
            },
            BenchmarkKind::Sssp => Outcome::Distances {
                reached: n,
                max_distance: 0.0,
            },
            BenchmarkKind::Tc => Outcome::Triangles(0),
            BenchmarkKind::Cc => Outcome::Components(n),
            BenchmarkKind::PageRank => Outcome::Ranks {
                iterations: 1,
                sum: 1.0,
            },
        })
    }
}

fn bfs() -> Box<dyn Benchmark> {
    Box::new(MockBenchmark::new(BenchmarkKind::Bfs))
}

fn sssp() -> Box<dyn Benchmark> {
    Box::new(MockBenchmark::new(BenchmarkKind::Sssp))
}

fn tc() -> Box<dyn Benchmark> {
    Box::new(MockBenchmark::new(BenchmarkKind::Tc))
}

fn cc() -> Box<dyn Benchmark> {
    Box::new(MockBenchmark::new(BenchmarkKind::Cc))
}

fn page_rank() -> Box<dyn Benchmark> {
    Box::new(MockBenchmark::new(BenchmarkKind::PageRank))
}

fn failing_bfs() -> Box<dyn Benchmark> {
    Box::new(MockBenchmark::with_behavior(BenchmarkKind::Bfs, Behavior::FailOnRun))
}

fn picky_bfs() -> Box<dyn Benchmark> {
    Box::new(MockBenchmark::with_behavior(BenchmarkKind::Bfs, Behavior::RefuseDataset))
}

fn factory(kind: BenchmarkKind) -> BenchmarkFactory {
    match kind {
        BenchmarkKind::Bfs => bfs,
        BenchmarkKind::Sssp => sssp,
        BenchmarkKind::Tc => tc,
        BenchmarkKind::Cc => cc,
        BenchmarkKind::PageRank => page_rank,
    }
}

/// A plugin named `name` supporting exactly `kinds`.
pub fn mock_plugin(name: &str, kinds: &[BenchmarkKind]) -> PluginDescriptor {
    kinds.iter().fold(
        PluginDescriptor::new(name, format!("mock plugin {name}")),
        |descriptor, &kind| descriptor.with_benchmark(kind, factory(kind)),
    )
}

/// A BFS-only plugin whose timed runs fail.
pub fn failing_plugin(name: &str) -> PluginDescriptor {
    PluginDescriptor::new(name, "fails every run").with_benchmark(BenchmarkKind::Bfs, failing_bfs)
}

/// A BFS-only plugin that declines every dataset.
pub fn picky_plugin(name: &str) -> PluginDescriptor {
    PluginDescriptor::new(name, "runs on nothing").with_benchmark(BenchmarkKind::Bfs, picky_bfs)
}
