// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for graphbench integration tests.
//!
//! Provides mock plugins and on-disk dataset fixtures for fast,
//! deterministic tests without downloaded datasets.
//!
//! # Components
//!
//! - [`mock_plugin`] - Plugin descriptor backed by trivial benchmarks
//! - [`TestHarness`] - Temp directory holding `.mtx` fixtures and an output dir

pub mod harness;
pub mod mock_plugin;

pub use harness::{PATH_MTX, TestHarness, WEIGHTED_MTX};
pub use mock_plugin::{MockBenchmark, failing_plugin, mock_plugin, picky_plugin};
