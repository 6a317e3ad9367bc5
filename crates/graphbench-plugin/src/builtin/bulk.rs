// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `bulk`: frontier and sweep based kernels, an independent second
//! implementation of every algorithm.

use graphbench_core::{BenchmarkKind, GraphbenchError, Outcome};
use graphbench_graph::algorithms::{centrality, components, shortest_path, traversal, triangles};

use super::KernelBenchmark;
use crate::descriptor::PluginDescriptor;
use crate::traits::Benchmark;

pub const NAME: &str = "bulk";

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(
        NAME,
        "Frontier BFS, Bellman-Ford, edge-iterator triangles, label propagation, pull PageRank",
    )
    .with_benchmark(BenchmarkKind::Bfs, bfs)
    .with_benchmark(BenchmarkKind::Sssp, sssp)
    .with_benchmark(BenchmarkKind::Tc, tc)
    .with_benchmark(BenchmarkKind::Cc, cc)
    .with_benchmark(BenchmarkKind::PageRank, page_rank)
}

fn bfs() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::Bfs, |graph, params| {
        let levels = traversal::bfs_frontier(graph, params.source_vertex);
        let (vertices, depth) = traversal::summarize_levels(&levels);
        Ok(Outcome::Reached { vertices, depth })
    })
}

fn sssp() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::Sssp, |graph, params| {
        let dist = shortest_path::bellman_ford(graph, params.source_vertex).ok_or_else(|| {
            GraphbenchError::benchmark(BenchmarkKind::Sssp, "negative cycle reachable from source")
        })?;
        let (reached, max_distance) = shortest_path::summarize_distances(&dist);
        Ok(Outcome::Distances {
            reached,
            max_distance,
        })
    })
}

fn tc() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::Tc, |graph, _| {
        Ok(Outcome::Triangles(triangles::count_edge_iterator(graph)))
    })
}

fn cc() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::Cc, |graph, _| {
        let labels = components::label_propagation(graph);
        Ok(Outcome::Components(components::component_count(&labels)))
    })
}

fn page_rank() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::PageRank, |graph, params| {
        let result = centrality::pagerank_pull(
            graph,
            params.damping,
            params.max_iterations,
            params.tolerance,
        );
        Ok(Outcome::Ranks {
            iterations: result.iterations,
            sum: result.scores.iter().sum(),
        })
    })
}
