// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Breadth-first search.

use std::collections::VecDeque;

use crate::graph::Graph;

/// BFS levels from `source` using a FIFO queue.
///
/// `levels[v]` is the hop distance from `source`, or `None` when `v` is
/// unreachable. Panics if `source` is not a vertex of `graph`.
pub fn bfs_levels(graph: &Graph, source: usize) -> Vec<Option<usize>> {
    let mut levels = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();

    levels[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let next = levels[u].map_or(0, |l| l + 1);
        for &v in graph.neighbors(u) {
            if levels[v].is_none() {
                levels[v] = Some(next);
                queue.push_back(v);
            }
        }
    }

    levels
}

/// BFS levels from `source`, expanding one whole frontier per step.
pub fn bfs_frontier(graph: &Graph, source: usize) -> Vec<Option<usize>> {
    let n = graph.vertex_count();
    let mut levels = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = vec![source];
    let mut depth = 0;

    visited[source] = true;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &u in &frontier {
            levels[u] = Some(depth);
            for &v in graph.neighbors(u) {
                if !visited[v] {
                    visited[v] = true;
                    next.push(v);
                }
            }
        }
        frontier = next;
        depth += 1;
    }

    levels
}

/// Number of reached vertices and the deepest level.
pub fn summarize_levels(levels: &[Option<usize>]) -> (usize, usize) {
    levels
        .iter()
        .flatten()
        .fold((0, 0), |(count, depth), &l| (count + 1, depth.max(l)))
}
