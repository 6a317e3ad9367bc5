// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weakly connected components.
//!
//! Both kernels label every vertex with the smallest vertex id of its
//! component, so their outputs are directly comparable.

use super::undirected_adjacency;
use crate::graph::Graph;

/// Disjoint-set forest with path halving; the root is always the smallest id.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            let (low, high) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[high] = low;
        }
    }
}

/// Components via union-find over every arc.
pub fn union_find(graph: &Graph) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut set = DisjointSet::new(n);
    for u in 0..n {
        for &v in graph.neighbors(u) {
            set.union(u, v);
        }
    }
    (0..n).map(|v| set.find(v)).collect()
}

/// Components via min-label propagation until a fixed point.
pub fn label_propagation(graph: &Graph) -> Vec<usize> {
    let adjacency = undirected_adjacency(graph);
    let mut labels: Vec<usize> = (0..graph.vertex_count()).collect();

    loop {
        let mut changed = false;
        for (u, list) in adjacency.iter().enumerate() {
            let min = list.iter().map(|&v| labels[v]).fold(labels[u], usize::min);
            if min < labels[u] {
                labels[u] = min;
                changed = true;
            }
        }
        if !changed {
            return labels;
        }
    }
}

/// Number of distinct components in a labelling.
pub fn component_count(labels: &[usize]) -> usize {
    labels
        .iter()
        .enumerate()
        .filter(|&(v, &label)| v == label)
        .count()
}
