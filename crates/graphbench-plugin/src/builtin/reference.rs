// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `reference`: straightforward sequential kernels.

use graphbench_core::{BenchmarkKind, GraphbenchError, Outcome};
use graphbench_graph::algorithms::{centrality, components, shortest_path, traversal, triangles};

use super::KernelBenchmark;
use crate::descriptor::PluginDescriptor;
use crate::traits::Benchmark;

pub const NAME: &str = "reference";

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(
        NAME,
        "Queue BFS, Dijkstra, node-iterator triangles, union-find components, push PageRank",
    )
    .with_benchmark(BenchmarkKind::Bfs, bfs)
    .with_benchmark(BenchmarkKind::Sssp, sssp)
    .with_benchmark(BenchmarkKind::Tc, tc)
    .with_benchmark(BenchmarkKind::Cc, cc)
    .with_benchmark(BenchmarkKind::PageRank, page_rank)
}

fn bfs() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::Bfs, |graph, params| {
        let levels = traversal::bfs_levels(graph, params.source_vertex);
        let (vertices, depth) = traversal::summarize_levels(&levels);
        Ok(Outcome::Reached { vertices, depth })
    })
}

fn sssp() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::Sssp, |graph, params| {
        let dist = shortest_path::dijkstra(graph, params.source_vertex)
            .ok_or_else(|| GraphbenchError::benchmark(BenchmarkKind::Sssp, "negative edge weight"))?;
        let (reached, max_distance) = shortest_path::summarize_distances(&dist);
        Ok(Outcome::Distances {
            reached,
            max_distance,
        })
    })
}

fn tc() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::Tc, |graph, _| {
        Ok(Outcome::Triangles(triangles::count_node_iterator(graph)))
    })
}

fn cc() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::Cc, |graph, _| {
        let labels = components::union_find(graph);
        Ok(Outcome::Components(components::component_count(&labels)))
    })
}

fn page_rank() -> Box<dyn Benchmark> {
    KernelBenchmark::boxed(BenchmarkKind::PageRank, |graph, params| {
        let result = centrality::pagerank(
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
