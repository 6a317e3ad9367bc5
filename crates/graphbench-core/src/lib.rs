// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the graphbench harness.
//!
//! Provides the error type and the small set of types shared by the plugin
//! registry, the built-in plugins and the benchmark engine.

pub mod error;
pub mod types;

pub use error::GraphbenchError;
pub use types::{BenchmarkKind, ExitStatus, Outcome, OutputFormat, ResultsPrinter, RunParams};
