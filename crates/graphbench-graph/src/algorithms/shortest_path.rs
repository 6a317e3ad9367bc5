// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-source shortest paths over arc weights.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapEntry {
    distance: f64,
    vertex: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on distance.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra from `source`.
///
/// Returns `None` when any arc weight is negative. `dist[v]` is `None`
/// when `v` is unreachable.
pub fn dijkstra(graph: &Graph, source: usize) -> Option<Vec<Option<f64>>> {
    if has_negative_weight(graph) {
        return None;
    }

    let mut dist: Vec<Option<f64>> = vec![None; graph.vertex_count()];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0.0);
    heap.push(HeapEntry {
        distance: 0.0,
        vertex: source,
    });

    while let Some(HeapEntry { distance, vertex }) = heap.pop() {
        if dist[vertex].is_some_and(|d| distance > d) {
            continue;
        }
        for (next, weight) in graph.weighted_neighbors(vertex) {
            let candidate = distance + weight;
            if dist[next].is_none_or(|d| candidate < d) {
                dist[next] = Some(candidate);
                heap.push(HeapEntry {
                    distance: candidate,
                    vertex: next,
                });
            }
        }
    }

    Some(dist)
}

pub fn has_negative_weight(graph: &Graph) -> bool {
    (0..graph.vertex_count()).any(|u| graph.weighted_neighbors(u).any(|(_, w)| w < 0.0))
}

/// Bellman-Ford from `source`; tolerates negative weights.
///
/// Returns `None` when a negative cycle is reachable from `source`.
pub fn bellman_ford(graph: &Graph, source: usize) -> Option<Vec<Option<f64>>> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<f64>> = vec![None; n];
    dist[source] = Some(0.0);

    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            let Some(du) = dist[u] else { continue };
            for (v, w) in graph.weighted_neighbors(u) {
                let candidate = du + w;
                if dist[v].is_none_or(|d| candidate < d) {
                    dist[v] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            return Some(dist);
        }
    }

    // Still relaxing after n passes.
    None
}

/// Number of reached vertices and the largest finite distance.
pub fn summarize_distances(dist: &[Option<f64>]) -> (usize, f64) {
    dist.iter()
        .flatten()
        .fold((0, 0.0_f64), |(count, max), &d| (count + 1, max.max(d)))
}
