// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Benchmark engine for graphbench.
//!
//! [`BenchmarkEngine`] owns the plugin registry and the captured
//! command-line tokens. Attaching a [`RunPlan`] turns `execute` into a full
//! benchmark pass: every selected plugin runs every selected algorithm on
//! every dataset through the timed runner, and the collected
//! [`BenchmarkSummary`] is dumped as CSV or raw text.

pub mod engine;
pub mod plan;
pub mod runner;
pub mod summary;

pub use engine::BenchmarkEngine;
pub use plan::{DatasetSpec, RunPlan};
pub use runner::{ExecutionResult, Measurement, run_benchmark};
pub use summary::BenchmarkSummary;
