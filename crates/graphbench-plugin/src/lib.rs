// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin contract, registry and built-in plugin catalog.
//!
//! A plugin is a [`PluginDescriptor`]: a name, a description and an optional
//! [`Benchmark`] factory for each algorithm kind. The registry stores
//! descriptors by name; the catalog lists the plugins compiled into the
//! binary.

pub mod builtin;
pub mod catalog;
pub mod descriptor;
pub mod registry;
pub mod traits;

pub use catalog::{builtin_catalog, builtin_plugins, PluginFactory};
pub use descriptor::{BenchmarkFactory, PluginDescriptor};
pub use registry::{PluginEntry, PluginRegistry, PluginStatus};
pub use traits::Benchmark;
