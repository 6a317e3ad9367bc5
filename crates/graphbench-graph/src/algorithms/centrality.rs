// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PageRank by power iteration.

use crate::graph::Graph;

/// Scores and the number of iterations actually performed.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    pub scores: Vec<f64>,
    pub iterations: usize,
}

/// PageRank with uniform teleport; mass on dangling vertices is spread evenly.
///
/// Stops once no score moves by more than `tolerance` or after
/// `max_iterations` rounds.
pub fn pagerank(graph: &Graph, damping: f64, max_iterations: usize, tolerance: f64) -> PageRankResult {
    let n = graph.vertex_count();
    if n == 0 {
        return PageRankResult {
            scores: Vec::new(),
            iterations: 0,
        };
    }

    let nf = n as f64;
    let mut scores = vec![1.0 / nf; n];
    let mut next = vec![0.0; n];
    let dangling: Vec<usize> = (0..n).filter(|&v| graph.out_degree(v) == 0).collect();
    let teleport = (1.0 - damping) / nf;

    let mut iterations = 0;
    while iterations < max_iterations {
        iterations += 1;

        let dangling_sum: f64 = dangling.iter().map(|&v| scores[v]).sum();
        next.fill(teleport + damping * dangling_sum / nf);

        for (u, &score) in scores.iter().enumerate() {
            let degree = graph.out_degree(u);
            if degree == 0 {
                continue;
            }
            let share = damping * score / degree as f64;
            for &v in graph.neighbors(u) {
                next[v] += share;
            }
        }

        let max_diff = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);

        std::mem::swap(&mut scores, &mut next);
        if max_diff < tolerance {
            break;
        }
    }

    PageRankResult { scores, iterations }
}

/// Pull-based PageRank over the transposed graph.
///
/// Same model and stopping rule as [`pagerank`]; each vertex gathers from its
/// in-neighbors instead of scattering to its out-neighbors.
pub fn pagerank_pull(
    graph: &Graph,
    damping: f64,
    max_iterations: usize,
    tolerance: f64,
) -> PageRankResult {
    let n = graph.vertex_count();
    if n == 0 {
        return PageRankResult {
            scores: Vec::new(),
            iterations: 0,
        };
    }

    let incoming = graph.transpose();
    let nf = n as f64;
    let inv_degree: Vec<f64> = (0..n)
        .map(|v| match graph.out_degree(v) {
            0 => 0.0,
            d => 1.0 / d as f64,
        })
        .collect();
    let mut scores = vec![1.0 / nf; n];
    let mut next = vec![0.0; n];

    let mut iterations = 0;
    while iterations < max_iterations {
        iterations += 1;

        let dangling_sum: f64 = (0..n)
            .filter(|&v| inv_degree[v] == 0.0)
            .map(|v| scores[v])
            .sum();
        let base = (1.0 - damping) / nf + damping * dangling_sum / nf;

        let mut max_diff = 0.0_f64;
        for (v, slot) in next.iter_mut().enumerate() {
            let gathered: f64 = incoming
                .neighbors(v)
                .iter()
                .map(|&u| scores[u] * inv_degree[u])
                .sum();
            *slot = base + damping * gathered;
            max_diff = max_diff.max((*slot - scores[v]).abs());
        }

        std::mem::swap(&mut scores, &mut next);
        if max_diff < tolerance {
            break;
        }
    }

    PageRankResult { scores, iterations }
}
