// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptors: a name, a description and one optional benchmark
//! factory per kind.

use std::collections::BTreeMap;

use graphbench_core::BenchmarkKind;

use crate::traits::Benchmark;

/// Creates a fresh benchmark instance.
pub type BenchmarkFactory = fn() -> Box<dyn Benchmark>;

/// Capability record of a plugin.
///
/// A kind without a factory is unsupported; asking for it yields `None`.
#[derive(Clone)]
pub struct PluginDescriptor {
    name: String,
    description: String,
    factories: BTreeMap<BenchmarkKind, BenchmarkFactory>,
}

impl PluginDescriptor {
    /// A descriptor that supports nothing yet.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            factories: BTreeMap::new(),
        }
    }

    /// Add (or replace) the factory for `kind`.
    pub fn with_benchmark(mut self, kind: BenchmarkKind, factory: BenchmarkFactory) -> Self {
        self.factories.insert(kind, factory);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn bfs(&self) -> Option<Box<dyn Benchmark>> {
        self.benchmark(BenchmarkKind::Bfs)
    }

    pub fn sssp(&self) -> Option<Box<dyn Benchmark>> {
        self.benchmark(BenchmarkKind::Sssp)
    }

    pub fn tc(&self) -> Option<Box<dyn Benchmark>> {
        self.benchmark(BenchmarkKind::Tc)
    }

    pub fn cc(&self) -> Option<Box<dyn Benchmark>> {
        self.benchmark(BenchmarkKind::Cc)
    }

    pub fn page_rank(&self) -> Option<Box<dyn Benchmark>> {
        self.benchmark(BenchmarkKind::PageRank)
    }

    /// A new benchmark of `kind`, or `None` when unsupported.
    pub fn benchmark(&self, kind: BenchmarkKind) -> Option<Box<dyn Benchmark>> {
        self.factories.get(&kind).map(|factory| factory())
    }

    /// Whether a factory exists for `kind`; does not invoke it.
    pub fn supports(&self, kind: BenchmarkKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Supported kinds in canonical order.
    pub fn supported_kinds(&self) -> Vec<BenchmarkKind> {
        self.factories.keys().copied().collect()
    }
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("supports", &self.supported_kinds())
            .finish()
    }
}
