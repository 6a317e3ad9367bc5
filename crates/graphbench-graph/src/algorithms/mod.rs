// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Graph algorithm kernels.
//!
//! Each benchmark kind has two independent implementations so plugins can be
//! compared against each other on the same datasets.

pub mod centrality;
pub mod components;
pub mod shortest_path;
pub mod traversal;
pub mod triangles;

use crate::graph::Graph;

/// Sorted neighbor lists of the underlying undirected simple graph:
/// arcs in both directions, no self-loops, no duplicates.
pub(crate) fn undirected_adjacency(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for u in 0..n {
        for &v in graph.neighbors(u) {
            if u == v {
                continue;
            }
            adjacency[u].push(v);
            if graph.is_directed() {
                adjacency[v].push(u);
            }
        }
    }
    for list in &mut adjacency {
        list.sort_unstable();
        list.dedup();
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_arcs_become_symmetric() {
        let g = Graph::from_edges(3, true, &[(0, 1), (1, 0), (2, 1), (2, 2)]);
        let adj = undirected_adjacency(&g);
        assert_eq!(adj[0], vec![1]);
        assert_eq!(adj[1], vec![0, 2]);
        assert_eq!(adj[2], vec![1]);
    }
}
