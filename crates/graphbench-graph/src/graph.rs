// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compressed sparse row graph shared read-only by every benchmark.

use crate::mtx::MatrixData;

/// Immutable adjacency in CSR form.
///
/// Arcs are sorted by target within each row and deduplicated. Undirected
/// graphs store both directions of every edge. Self-loops are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    directed: bool,
    weighted: bool,
    offsets: Vec<usize>,
    targets: Vec<usize>,
    weights: Vec<f64>,
}

impl Graph {
    /// Build from a parsed matrix; entries without a value weigh `1.0`.
    pub fn from_matrix(matrix: &MatrixData, directed: bool) -> Self {
        let vertices = matrix.header.rows.max(matrix.header.cols);
        let arcs = matrix
            .entries
            .iter()
            .map(|e| (e.row, e.col, e.value.unwrap_or(1.0)));
        Self::build(vertices, directed, matrix.has_values(), arcs)
    }

    /// Build an unweighted graph from `(source, target)` pairs.
    pub fn from_edges(vertices: usize, directed: bool, edges: &[(usize, usize)]) -> Self {
        let arcs = edges.iter().map(|&(u, v)| (u, v, 1.0));
        Self::build(vertices, directed, false, arcs)
    }

    /// Build a weighted graph from `(source, target, weight)` triples.
    pub fn from_weighted_edges(vertices: usize, directed: bool, edges: &[(usize, usize, f64)]) -> Self {
        Self::build(vertices, directed, true, edges.iter().copied())
    }

    fn build<I>(vertices: usize, directed: bool, weighted: bool, arcs: I) -> Self
    where
        I: Iterator<Item = (usize, usize, f64)>,
    {
        let mut list: Vec<(usize, usize, f64)> = Vec::new();
        for (u, v, w) in arcs {
            if u >= vertices || v >= vertices {
                continue;
            }
            list.push((u, v, w));
            if !directed && u != v {
                list.push((v, u, w));
            }
        }

        // Sort by (source, target, weight) so the first of each run is the
        // lightest parallel arc.
        list.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)).then(a.2.total_cmp(&b.2)));
        list.dedup_by(|next, kept| next.0 == kept.0 && next.1 == kept.1);

        let mut offsets = vec![0usize; vertices + 1];
        for &(u, _, _) in &list {
            offsets[u + 1] += 1;
        }
        for i in 0..vertices {
            offsets[i + 1] += offsets[i];
        }

        let (targets, weights) = list.into_iter().map(|(_, v, w)| (v, w)).unzip();

        Self {
            directed,
            weighted,
            offsets,
            targets,
            weights,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of stored arcs; an undirected edge counts twice.
    pub fn arc_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of logical edges; undirected edges count once.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            return self.arc_count();
        }
        let loops = (0..self.vertex_count())
            .map(|u| self.neighbors(u).iter().filter(|&&v| v == u).count())
            .sum::<usize>();
        (self.arc_count() - loops) / 2 + loops
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether the arcs carry weights from the dataset.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn out_degree(&self, vertex: usize) -> usize {
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    /// Sorted out-neighbors of `vertex`.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.targets[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    /// Out-neighbors of `vertex` with the arc weights.
    pub fn weighted_neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.offsets[vertex]..self.offsets[vertex + 1];
        self.targets[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    /// Reverse graph: every arc `u -> v` becomes `v -> u`.
    pub fn transpose(&self) -> Graph {
        if !self.directed {
            return self.clone();
        }
        let arcs: Vec<(usize, usize, f64)> = (0..self.vertex_count())
            .flat_map(|u| self.weighted_neighbors(u).map(move |(v, w)| (v, u, w)))
            .collect();
        Self::build(self.vertex_count(), true, self.weighted, arcs.into_iter())
    }
}
