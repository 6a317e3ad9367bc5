// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triangle counting on the underlying undirected simple graph.
//!
//! Both counters orient every edge from the lower to the higher vertex id, so
//! each triangle `a < b < c` is counted exactly once.

use super::undirected_adjacency;
use crate::graph::Graph;

fn forward_adjacency(graph: &Graph) -> Vec<Vec<usize>> {
    undirected_adjacency(graph)
        .into_iter()
        .enumerate()
        .map(|(u, list)| list.into_iter().filter(|&v| v > u).collect())
        .collect()
}

/// For every vertex, test each pair of higher neighbors for a closing edge.
pub fn count_node_iterator(graph: &Graph) -> u64 {
    let forward = forward_adjacency(graph);
    let mut triangles = 0u64;

    for list in &forward {
        for (i, &v) in list.iter().enumerate() {
            for &w in &list[i + 1..] {
                if forward[v].binary_search(&w).is_ok() {
                    triangles += 1;
                }
            }
        }
    }

    triangles
}

/// For every oriented edge `u -> v`, intersect the forward lists of `u` and `v`.
pub fn count_edge_iterator(graph: &Graph) -> u64 {
    let forward = forward_adjacency(graph);
    let mut triangles = 0u64;

    for list in &forward {
        for &v in list {
            triangles += sorted_intersection(list, &forward[v]);
        }
    }

    triangles
}

fn sorted_intersection(a: &[usize], b: &[usize]) -> u64 {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle() {
        let g = Graph::from_edges(3, false, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(count_node_iterator(&g), 1);
        assert_eq!(count_edge_iterator(&g), 1);
    }

    #[test]
    fn complete_graph_k4_has_four() {
        let edges: Vec<_> = (0..4)
            .flat_map(|u| (u + 1..4).map(move |v| (u, v)))
            .collect();
        let g = Graph::from_edges(4, false, &edges);
        assert_eq!(count_node_iterator(&g), 4);
        assert_eq!(count_edge_iterator(&g), 4);
    }

    #[test]
    fn direction_and_self_loops_are_ignored() {
        // Directed cycle plus a reciprocal arc and a self-loop.
        let g = Graph::from_edges(4, true, &[(0, 1), (1, 2), (2, 0), (1, 0), (3, 3)]);
        assert_eq!(count_node_iterator(&g), 1);
        assert_eq!(count_edge_iterator(&g), 1);
    }

    #[test]
    fn tree_has_no_triangles() {
        let g = Graph::from_edges(5, false, &[(0, 1), (0, 2), (1, 3), (1, 4)]);
        assert_eq!(count_node_iterator(&g), 0);
        assert_eq!(count_edge_iterator(&g), 0);
    }
}
