// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Timed benchmark runner and per-run statistics.

use std::sync::Arc;
use std::time::Instant;

use graphbench_core::{GraphbenchError, Outcome, ResultsPrinter, RunParams};
use graphbench_graph::LoadedDataset;
use graphbench_plugin::Benchmark;
use tracing::debug;

/// Timings of one plugin/algorithm/dataset combination, in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub warm_up: f64,
    pub times: Vec<f64>,
}

impl ExecutionResult {
    pub fn new(warm_up: f64, times: Vec<f64>) -> Self {
        Self { warm_up, times }
    }

    /// Arithmetic mean of the timed runs, 0 when there are none.
    pub fn avg(&self) -> f64 {
        if self.times.is_empty() {
            return 0.0;
        }
        self.times.iter().sum::<f64>() / self.times.len() as f64
    }

    /// Median of the timed runs; the mean of the two middle values for an
    /// even count.
    pub fn median(&self) -> f64 {
        if self.times.is_empty() {
            return 0.0;
        }
        let mut sorted = self.times.clone();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        }
    }

    /// Sample standard deviation, 0 for fewer than two runs.
    pub fn stdev(&self) -> f64 {
        let n = self.times.len();
        if n < 2 {
            return 0.0;
        }
        let avg = self.avg();
        let variance = self
            .times
            .iter()
            .map(|t| (t - avg).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt()
    }

    /// Text written into the summary for this result.
    pub fn render(&self, printer: ResultsPrinter) -> String {
        match printer {
            ResultsPrinter::All => format!(
                "warm_up={:.2}ms, avg={:.2}ms, median={:.2}ms, stdev={:.2}",
                self.warm_up,
                self.avg(),
                self.median(),
                self.stdev()
            ),
            ResultsPrinter::Median => format!("{:.2}", self.median()),
        }
    }
}

/// Result of [`run_benchmark`]: timings plus the outcome of the last run.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub result: ExecutionResult,
    pub outcome: Outcome,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Set up `benchmark` on `dataset`, run it once to warm up and then
/// `iterations` more times, timing every run.
pub fn run_benchmark(
    benchmark: &mut dyn Benchmark,
    dataset: &LoadedDataset,
    params: &RunParams,
    iterations: usize,
) -> Result<Measurement, GraphbenchError> {
    let kind = benchmark.kind();
    benchmark.setup(Arc::clone(&dataset.graph), params)?;

    let start = Instant::now();
    let mut outcome = benchmark.run_once()?;
    let warm_up = elapsed_ms(start);
    debug!(%kind, dataset = %dataset.name, warm_up_ms = warm_up, "warm-up finished");

    let mut times = Vec::with_capacity(iterations);
    for i in 0..iterations {
        let start = Instant::now();
        outcome = benchmark.run_once()?;
        let ms = elapsed_ms(start);
        debug!(%kind, dataset = %dataset.name, iteration = i + 1, ms, "timed run finished");
        times.push(ms);
    }

    Ok(Measurement {
        result: ExecutionResult::new(warm_up, times),
        outcome,
    })
}
